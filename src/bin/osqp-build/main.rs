//! osqp-build CLI - builds OSQP extension modules with CMake

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use osqp_build::BuildError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);

        // A failed CMake phase exits with CMake's own status
        let code = e
            .downcast_ref::<BuildError>()
            .and_then(BuildError::exit_code)
            .filter(|code| *code != 0)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("osqp_build=debug")
    } else {
        EnvFilter::new("osqp_build=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Clean(args) => commands::clean::execute(args),
        Commands::Backends => commands::backends::execute(),
        Commands::Metadata(args) => commands::metadata::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
