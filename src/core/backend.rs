//! Linear-algebra backend selection.
//!
//! The solver ships one extension module per algebra backend. Exactly one
//! backend is compiled per build, chosen from a closed set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the algebra backend to build.
pub const ALGEBRA_ENV: &str = "OSQP_ALGEBRA";

/// Algebra backend compiled into the extension module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Built-in sparse linear algebra (QDLDL)
    Default,
    /// Intel MKL Pardiso
    #[default]
    Mkl,
    /// NVIDIA CUDA
    Cuda,
}

impl Backend {
    /// Every supported backend, in declaration order.
    pub const ALL: [Backend; 3] = [Backend::Default, Backend::Mkl, Backend::Cuda];

    /// Get the backend tag as used in artifact names and CMake directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Default => "default",
            Backend::Mkl => "mkl",
            Backend::Cuda => "cuda",
        }
    }

    /// One-line description of the backend.
    pub fn description(&self) -> &'static str {
        match self {
            Backend::Default => "built-in sparse direct solver (QDLDL)",
            Backend::Mkl => "Intel MKL Pardiso direct solver",
            Backend::Cuda => "NVIDIA CUDA iterative solver",
        }
    }

    /// Resolve an optional selection value into a backend.
    ///
    /// An absent value selects the default backend. Any value outside the
    /// supported set is rejected here, before anything is built.
    pub fn select(value: Option<&str>) -> Result<Backend, BackendParseError> {
        match value {
            Some(s) => s.parse(),
            None => Ok(Backend::default()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Backend {
    type Err = BackendParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Backend::Default),
            "mkl" => Ok(Backend::Mkl),
            "cuda" => Ok(Backend::Cuda),
            _ => Err(BackendParseError(s.to_string())),
        }
    }
}

/// Error returned when a backend selection is not one of the supported tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid algebra backend '{0}', valid values: default, mkl, cuda")]
pub struct BackendParseError(pub String);
