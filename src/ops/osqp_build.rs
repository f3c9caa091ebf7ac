//! Implementation of `osqp-build build`.

use std::path::PathBuf;

use crate::builder::{
    check_workspace, prepare_workspace, BuildError, BuildPhase, BuildPlan, CommandRunner, ExternalBuild, PlanPaths,
};
use crate::core::{Backend, BuildMode, ExtensionDescriptor, PlatformFacts};
use crate::util::process::{find_cmake, find_python};

/// Options for the build command.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Raw backend selection (`None` selects the default backend)
    pub algebra: Option<String>,

    /// Build in debug mode
    pub debug: bool,

    /// Root of the CMake source tree
    pub source_dir: PathBuf,

    /// Scratch workspace for CMake
    pub build_temp: PathBuf,

    /// Directory the extension module is placed in
    pub build_lib: PathBuf,

    /// Explicit CMake executable (otherwise searched in PATH)
    pub cmake: Option<PathBuf>,

    /// Explicit Python interpreter (otherwise searched in PATH)
    pub python: Option<PathBuf>,

    /// Platform facts the arguments are derived for
    pub platform: PlatformFacts,
}

impl BuildOptions {
    /// Options for building `source_dir` into `<source_dir>/build`, on the host.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let build_dir = source_dir.join("build");

        BuildOptions {
            algebra: None,
            debug: false,
            build_temp: build_dir.join("temp"),
            build_lib: build_dir.join("lib"),
            source_dir,
            cmake: None,
            python: None,
            platform: PlatformFacts::host(),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub plan: BuildPlan,
    pub phase: BuildPhase,
}

/// Derive the build plan without side effects.
///
/// The backend is validated first, so an unsupported selection fails before
/// any tool lookup. A workspace that would swallow the source tree or the
/// output directory is rejected here, before anything is removed.
pub fn plan(opts: &BuildOptions) -> Result<BuildPlan, BuildError> {
    let backend = Backend::select(opts.algebra.as_deref())?;
    check_workspace(
        &opts.build_temp,
        &[("source", opts.source_dir.as_path()), ("output", opts.build_lib.as_path())],
    )?;
    let extension = ExtensionDescriptor::for_backend(backend, &opts.source_dir);

    let cmake = match opts.cmake {
        Some(ref path) => path.clone(),
        None => find_cmake().ok_or(BuildError::ToolNotFound {
            tool: "CMake",
            hint: "CMake is required to build the extension module.\n\
                   Install CMake and ensure it's in your PATH.",
        })?,
    };

    let python = match opts.python {
        Some(ref path) => path.clone(),
        None => find_python().ok_or(BuildError::ToolNotFound {
            tool: "Python interpreter",
            hint: "Install Python 3 or pass --python <path>.",
        })?,
    };

    Ok(BuildPlan::new(
        extension,
        BuildMode::from_debug_flag(opts.debug),
        opts.platform,
        PlanPaths {
            cmake,
            python,
            workspace: opts.build_temp.clone(),
            output_dir: opts.build_lib.clone(),
        },
    ))
}

/// Build the extension module.
///
/// Resets the workspace, then configures and builds with CMake. The module
/// is left where CMake puts it, at `plan.artifact`.
pub fn build(opts: &BuildOptions, runner: &mut dyn CommandRunner) -> Result<BuildResult, BuildError> {
    let plan = plan(opts)?;

    tracing::info!(
        "building `{}` ({}, {}, {})",
        plan.extension.name(),
        plan.extension.backend(),
        plan.mode,
        plan.toolchain
    );

    prepare_workspace(&plan.workspace)?;

    let mut external = ExternalBuild::new(&plan.cmake, &plan.workspace, runner);
    external.run(plan.source_root(), &plan.args)?;
    let phase = external.phase();

    Ok(BuildResult { plan, phase })
}
