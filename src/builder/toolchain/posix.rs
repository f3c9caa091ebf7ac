//! Single-config generator idioms (Makefiles, Ninja).

use std::path::Path;

use crate::core::BuildMode;

use super::{PlatformArgs, ToolchainFamily};

/// Number of parallel jobs requested from the native build tool.
pub const POSIX_JOBS: u32 = 2;

/// Arguments for single-config generators on POSIX-style hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixArgs {
    pub jobs: u32,
}

impl PosixArgs {
    pub fn new() -> Self {
        PosixArgs { jobs: POSIX_JOBS }
    }
}

impl Default for PosixArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformArgs for PosixArgs {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Posix
    }

    fn configure_args(&self, mode: BuildMode, _output_dir: &Path) -> Vec<String> {
        vec![format!("-DCMAKE_BUILD_TYPE={}", mode.config_name())]
    }

    fn build_args(&self, _mode: BuildMode) -> Vec<String> {
        vec!["--".to_string(), format!("-j{}", self.jobs)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_type_directive() {
        let args = PosixArgs::new().configure_args(BuildMode::Debug, Path::new("/out"));
        assert_eq!(args, vec!["-DCMAKE_BUILD_TYPE=Debug"]);
    }

    #[test]
    fn test_fixed_job_count() {
        assert_eq!(PosixArgs::new().build_args(BuildMode::Release), vec!["--", "-j2"]);
    }
}
