//! Build error taxonomy.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::builder::invoker::BuildPhase;
use crate::core::BackendParseError;

/// Exit status of an external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStatus {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

impl PhaseStatus {
    pub fn from_code(code: i32) -> Self {
        PhaseStatus { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for PhaseStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        PhaseStatus {
            code: status.code(),
        }
    }
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Error during an orchestration run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidBackend(#[from] BackendParseError),

    #[error("{tool} not found\n\n{hint}")]
    ToolNotFound {
        tool: &'static str,
        hint: &'static str,
    },

    #[error("failed to {action} build workspace: {}", .path.display())]
    Workspace {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "build workspace {} would remove the {role} directory {}",
        .workspace.display(),
        .protected.display()
    )]
    UnsafeWorkspace {
        workspace: PathBuf,
        role: &'static str,
        protected: PathBuf,
    },

    #[error("failed to execute `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("CMake configuration failed ({status})")]
    ConfigureFailed { status: PhaseStatus },

    #[error("CMake build failed ({status})")]
    BuildFailed { status: PhaseStatus },

    #[error("cannot {step} from the {phase:?} phase")]
    OutOfOrder { step: &'static str, phase: BuildPhase },
}

impl BuildError {
    /// Exit code of the failed external process, if the run ended that way.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            BuildError::ConfigureFailed { status } | BuildError::BuildFailed { status } => {
                status.code
            }
            _ => None,
        }
    }
}
