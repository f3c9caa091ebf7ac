//! osqp-build - builds the OSQP solver into a Python extension module
//!
//! This crate selects one linear-algebra backend, derives the CMake
//! invocations for the host platform, and runs them against a freshly reset
//! build workspace.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording process runner.
#[cfg(test)]
pub mod test_support;

pub use crate::builder::{BuildError, BuildPlan, CommandRunner, SystemRunner};
pub use crate::core::{Backend, BuildMode, ExtensionDescriptor, PlatformFacts};
pub use crate::util::context::GlobalContext;
