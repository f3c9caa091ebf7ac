//! Build plan - everything a run will do, derived before anything happens.
//!
//! The plan can be emitted as JSON (`osqp-build build --plan`) without
//! touching the filesystem or launching CMake.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::builder::args::{derive_args, InvocationArgs};
use crate::builder::toolchain::{platform_args_for, ToolchainFamily};
use crate::core::{BuildMode, ExtensionDescriptor, PlatformFacts};

/// Fully derived plan of one orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// The extension being built
    pub extension: ExtensionDescriptor,
    /// Debug or release
    pub mode: BuildMode,
    /// Host facts the arguments were derived from
    pub platform: PlatformFacts,
    /// Argument idioms in use
    pub toolchain: ToolchainFamily,
    /// CMake executable
    pub cmake: PathBuf,
    /// Scratch directory, reset before configuring
    pub workspace: PathBuf,
    /// Directory CMake places the extension module in
    pub output_dir: PathBuf,
    /// Expected path of the extension module
    pub artifact: PathBuf,
    /// Arguments of both CMake invocations
    pub args: InvocationArgs,
}

/// Tool and directory inputs of a plan.
#[derive(Debug, Clone)]
pub struct PlanPaths {
    pub cmake: PathBuf,
    pub python: PathBuf,
    pub workspace: PathBuf,
    pub output_dir: PathBuf,
}

impl BuildPlan {
    /// Derive the plan for an extension on a platform.
    pub fn new(
        extension: ExtensionDescriptor,
        mode: BuildMode,
        platform: PlatformFacts,
        paths: PlanPaths,
    ) -> Self {
        let idioms = platform_args_for(&platform);
        let args = derive_args(
            &extension,
            mode,
            idioms.as_ref(),
            &paths.output_dir,
            &paths.python,
        );

        let artifact = paths
            .output_dir
            .join(format!("{}{}", extension.name(), platform.extension_suffix()));

        BuildPlan {
            extension,
            mode,
            platform,
            toolchain: idioms.family(),
            cmake: paths.cmake,
            workspace: paths.workspace,
            output_dir: paths.output_dir,
            artifact,
            args,
        }
    }

    /// Source tree handed to the configure phase.
    pub fn source_root(&self) -> &Path {
        self.extension.source_root()
    }

    /// Serialize the plan as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
