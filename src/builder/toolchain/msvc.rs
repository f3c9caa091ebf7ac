//! Visual Studio generator idioms.

use std::path::Path;

use crate::core::BuildMode;

use super::{PlatformArgs, ToolchainFamily};

/// Arguments for the Visual Studio (multi-config) generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsvcArgs {
    /// Select the x64 architecture at configure time
    pub x64: bool,
}

impl MsvcArgs {
    pub fn new(x64: bool) -> Self {
        MsvcArgs { x64 }
    }
}

impl PlatformArgs for MsvcArgs {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Msvc
    }

    fn configure_args(&self, mode: BuildMode, output_dir: &Path) -> Vec<String> {
        // Multi-config generators ignore the unqualified output directory
        let mut args = vec![format!(
            "-DCMAKE_LIBRARY_OUTPUT_DIRECTORY_{}={}",
            mode.config_name().to_uppercase(),
            output_dir.display()
        )];

        if self.x64 {
            args.push("-A".to_string());
            args.push("x64".to_string());
        }

        args
    }

    fn build_args(&self, _mode: BuildMode) -> Vec<String> {
        // MSBuild picks the job count itself
        vec!["--".to_string(), "/m".to_string()]
    }
}
