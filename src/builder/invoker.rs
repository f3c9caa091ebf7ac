//! Two-phase CMake invocation.
//!
//! A build moves through `NotStarted -> Configured -> Built`. Any failing
//! phase moves it to `Failed`, which is terminal: the build phase is only
//! reachable from `Configured`.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::builder::args::InvocationArgs;
use crate::builder::errors::{BuildError, PhaseStatus};
use crate::util::process::ProcessBuilder;

/// Executes external processes on behalf of the build.
pub trait CommandRunner {
    /// Run a process to completion and report its exit status.
    fn run(&mut self, process: &ProcessBuilder) -> io::Result<PhaseStatus>;
}

/// Runs processes on the host, with the child's stdio inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, process: &ProcessBuilder) -> io::Result<PhaseStatus> {
        process.status().map(PhaseStatus::from)
    }
}

/// State of a two-phase build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildPhase {
    NotStarted,
    Configured,
    Built,
    Failed,
}

/// One CMake build, scoped to a workspace directory.
pub struct ExternalBuild<'a> {
    cmake: PathBuf,
    workspace: PathBuf,
    runner: &'a mut dyn CommandRunner,
    phase: BuildPhase,
}

impl<'a> ExternalBuild<'a> {
    /// Create a build that runs `cmake` inside `workspace`.
    pub fn new(
        cmake: impl Into<PathBuf>,
        workspace: impl Into<PathBuf>,
        runner: &'a mut dyn CommandRunner,
    ) -> Self {
        ExternalBuild {
            cmake: cmake.into(),
            workspace: workspace.into(),
            runner,
            phase: BuildPhase::NotStarted,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// The configure command: `cmake <source_root> <args...>`.
    pub fn configure_command(&self, source_root: &Path, args: &[String]) -> ProcessBuilder {
        ProcessBuilder::new(&self.cmake)
            .arg(source_root)
            .args(args)
            .cwd(&self.workspace)
    }

    /// The build command: `cmake --build . <args...>`.
    pub fn build_command(&self, args: &[String]) -> ProcessBuilder {
        ProcessBuilder::new(&self.cmake)
            .arg("--build")
            .arg(".")
            .args(args)
            .cwd(&self.workspace)
    }

    /// Run the configure phase.
    pub fn configure(&mut self, source_root: &Path, args: &[String]) -> Result<(), BuildError> {
        if self.phase != BuildPhase::NotStarted {
            return Err(BuildError::OutOfOrder {
                step: "configure",
                phase: self.phase,
            });
        }

        tracing::info!("Configuring CMake project");
        let cmd = self.configure_command(source_root, args);
        let status = self.execute(&cmd)?;

        if !status.success() {
            self.phase = BuildPhase::Failed;
            return Err(BuildError::ConfigureFailed { status });
        }

        self.phase = BuildPhase::Configured;
        Ok(())
    }

    /// Run the build phase. Only valid after a successful configure.
    pub fn build(&mut self, args: &[String]) -> Result<(), BuildError> {
        if self.phase != BuildPhase::Configured {
            return Err(BuildError::OutOfOrder {
                step: "build",
                phase: self.phase,
            });
        }

        tracing::info!("Building CMake project");
        let cmd = self.build_command(args);
        let status = self.execute(&cmd)?;

        if !status.success() {
            self.phase = BuildPhase::Failed;
            return Err(BuildError::BuildFailed { status });
        }

        self.phase = BuildPhase::Built;
        Ok(())
    }

    /// Configure, then build.
    pub fn run(&mut self, source_root: &Path, args: &InvocationArgs) -> Result<(), BuildError> {
        self.configure(source_root, &args.configure)?;
        self.build(&args.build)
    }

    fn execute(&mut self, cmd: &ProcessBuilder) -> Result<PhaseStatus, BuildError> {
        tracing::debug!("running `{}` in {}", cmd.display_command(), self.workspace.display());

        match self.runner.run(cmd) {
            Ok(status) => Ok(status),
            Err(source) => {
                self.phase = BuildPhase::Failed;
                Err(BuildError::Spawn {
                    program: self.cmake.display().to_string(),
                    source,
                })
            }
        }
    }
}
