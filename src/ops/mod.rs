//! High-level operations.
//!
//! This module contains the implementation of osqp-build commands.

pub mod osqp_build;

pub use osqp_build::{build, plan, BuildOptions, BuildResult};
