//! CMake build orchestration.
//!
//! This module derives the CMake invocations for an extension and runs them
//! against a freshly reset workspace.

pub mod args;
pub mod errors;
pub mod invoker;
pub mod plan;
pub mod toolchain;
pub mod workspace;

pub use args::{derive_args, InvocationArgs};
pub use errors::{BuildError, PhaseStatus};
pub use invoker::{BuildPhase, CommandRunner, ExternalBuild, SystemRunner};
pub use plan::{BuildPlan, PlanPaths};
pub use toolchain::{platform_args_for, MsvcArgs, PlatformArgs, PosixArgs, ToolchainFamily};
pub use workspace::{check_workspace, prepare_workspace};
