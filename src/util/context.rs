//! Global context for osqp-build operations.
//!
//! Provides centralized access to configuration and paths.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::util::config::{load_config, Config};
use crate::util::fs::{absolutize, normalize, resolve_program};

/// Name of the project-local configuration file.
pub const PROJECT_CONFIG_FILE: &str = "osqp-build.toml";

/// Project directories for osqp-build
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("org", "osqp", "osqp-build"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root (current working directory)
    cwd: PathBuf,

    /// Merged global and project configuration
    config: Config,
}

impl GlobalContext {
    /// Create a GlobalContext for the current working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_cwd(cwd)
    }

    /// Create a GlobalContext with a specific working directory.
    ///
    /// Fails if a configuration file exists but cannot be parsed.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let global = global_config_path();
        let config = load_config(global.as_deref(), &cwd.join(PROJECT_CONFIG_FILE))?;
        Ok(GlobalContext { cwd, config })
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Root of the CMake source tree.
    pub fn source_dir(&self) -> PathBuf {
        self.resolve(self.config.build.source_dir.as_deref(), Path::new("."))
    }

    /// Scratch workspace CMake runs in.
    pub fn build_temp(&self) -> PathBuf {
        self.resolve(self.config.build.build_temp.as_deref(), Path::new("build/temp"))
    }

    /// Directory the extension module is placed in.
    pub fn build_lib(&self) -> PathBuf {
        self.resolve(self.config.build.build_lib.as_deref(), Path::new("build/lib"))
    }

    /// Resolve a program path given on the command line or in config.
    pub fn resolve_program(&self, program: &Path) -> PathBuf {
        resolve_program(&self.cwd, program)
    }

    /// Resolve an optional configured path against the project root.
    pub fn resolve(&self, configured: Option<&Path>, fallback: &Path) -> PathBuf {
        let path = absolutize(&self.cwd, configured.unwrap_or(fallback));
        normalize(&path)
    }
}

/// Get the global configuration file path.
pub fn global_config_path() -> Option<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
