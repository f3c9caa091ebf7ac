//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use osqp_build::core::ALGEBRA_ENV;

/// osqp-build - builds the OSQP solver into a Python extension module
#[derive(Parser)]
#[command(name = "osqp-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and build the extension module
    Build(BuildArgs),

    /// Remove the build workspace
    Clean(CleanArgs),

    /// List the supported algebra backends
    Backends,

    /// Print the distribution metadata as JSON
    Metadata(MetadataArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Algebra backend to build (default, mkl, cuda)
    #[arg(long, env = ALGEBRA_ENV)]
    pub algebra: Option<String>,

    /// Build in debug mode
    #[arg(short = 'g', long)]
    pub debug: bool,

    /// CMake source tree (defaults to the current directory)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Scratch workspace for CMake (reset on every build)
    #[arg(long)]
    pub build_temp: Option<PathBuf>,

    /// Output directory for the extension module
    #[arg(long)]
    pub build_lib: Option<PathBuf>,

    /// CMake executable
    #[arg(long)]
    pub cmake: Option<PathBuf>,

    /// Python interpreter to build against
    #[arg(long)]
    pub python: Option<PathBuf>,

    /// Emit the build plan as JSON (no build)
    #[arg(long)]
    pub plan: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Also remove the extension output directory
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Algebra backend the distribution is named after
    #[arg(long, env = ALGEBRA_ENV)]
    pub algebra: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
