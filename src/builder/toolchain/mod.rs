//! Per-toolchain-family CMake argument idioms.
//!
//! CMake is driven differently under the Visual Studio generators than under
//! Makefile/Ninja style generators: output directories are segregated by
//! configuration name, the architecture is chosen at configure time, and the
//! native parallel-build flag differs. Each family implements
//! [`PlatformArgs`]; the rest of the build is platform-agnostic.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::core::{BuildMode, PlatformFacts};

mod msvc;
mod posix;

pub use msvc::MsvcArgs;
pub use posix::{PosixArgs, POSIX_JOBS};

/// Toolchain family whose command-line idioms are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainFamily {
    /// Visual Studio / MSBuild
    Msvc,
    /// Makefile or Ninja generators on POSIX-style hosts
    Posix,
}

impl fmt::Display for ToolchainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolchainFamily::Msvc => write!(f, "msvc"),
            ToolchainFamily::Posix => write!(f, "posix"),
        }
    }
}

/// Derives the platform-specific part of both CMake invocations.
pub trait PlatformArgs: fmt::Debug + Send + Sync {
    /// The toolchain family this implementation speaks for.
    fn family(&self) -> ToolchainFamily;

    /// Platform-specific configure arguments.
    fn configure_args(&self, mode: BuildMode, output_dir: &Path) -> Vec<String>;

    /// Platform-specific build arguments, appended after `--config <mode>`.
    fn build_args(&self, mode: BuildMode) -> Vec<String>;
}

/// Select the argument idioms for a platform.
pub fn platform_args_for(facts: &PlatformFacts) -> Box<dyn PlatformArgs> {
    if facts.os.is_windows() {
        Box::new(MsvcArgs::new(facts.is_64bit()))
    } else {
        Box::new(PosixArgs::new())
    }
}
