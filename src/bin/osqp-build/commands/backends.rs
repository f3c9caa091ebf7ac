//! `osqp-build backends` command

use anyhow::Result;

use osqp_build::core::{artifact_name, Backend};

pub fn execute() -> Result<()> {
    println!("Algebra Backends:");
    println!();

    for backend in Backend::ALL {
        let marker = if backend == Backend::default() {
            " (default)"
        } else {
            ""
        };

        println!("  {}{} - {}", backend, marker, backend.description());
        println!("    Module:  {}", artifact_name(backend));
    }

    Ok(())
}
