//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/osqp-build/config.toml` - User-wide defaults
//! - Project: `osqp-build.toml` in the project root - Project-specific overrides
//!
//! Project config takes precedence over global config. Command-line flags and
//! the `OSQP_ALGEBRA` environment variable take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::PackageMetadata;

/// osqp-build configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Static distribution metadata
    pub package: Option<PackageMetadata>,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Default algebra backend (default, mkl, cuda)
    pub algebra: Option<String>,

    /// Path to the CMake executable
    pub cmake: Option<PathBuf>,

    /// Path to the Python interpreter the module is built for
    pub python: Option<PathBuf>,

    /// CMake source tree, relative to the project root
    pub source_dir: Option<PathBuf>,

    /// Scratch workspace, relative to the project root
    pub build_temp: Option<PathBuf>,

    /// Extension output directory, relative to the project root
    pub build_lib: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, falling back to defaults only if the file doesn't exist.
    ///
    /// A file that exists but does not parse is an error: it may carry the
    /// backend selection, and building a different backend silently is worse.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}", path.display());
            Ok(Self::default())
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.build.algebra.is_some() {
            self.build.algebra = other.build.algebra;
        }
        if other.build.cmake.is_some() {
            self.build.cmake = other.build.cmake;
        }
        if other.build.python.is_some() {
            self.build.python = other.build.python;
        }
        if other.build.source_dir.is_some() {
            self.build.source_dir = other.build.source_dir;
        }
        if other.build.build_temp.is_some() {
            self.build.build_temp = other.build.build_temp;
        }
        if other.build.build_lib.is_some() {
            self.build.build_lib = other.build.build_lib;
        }

        // The package table is a single descriptor, replaced as a whole
        if other.package.is_some() {
            self.package = other.package;
        }
    }

    /// Package metadata, or the built-in descriptor if none is configured.
    pub fn package(&self) -> PackageMetadata {
        self.package.clone().unwrap_or_default()
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (osqp-build.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path)?);
    }

    config.merge(Config::load_or_default(project_path)?);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
[build]
algebra = "cuda"
cmake = "/opt/cmake/bin/cmake"
build_temp = "out/tmp"

[package]
description = "custom"
"#,
        )
        .unwrap();

        assert_eq!(config.build.algebra.as_deref(), Some("cuda"));
        assert_eq!(config.build.cmake, Some(PathBuf::from("/opt/cmake/bin/cmake")));
        assert_eq!(config.build.build_temp, Some(PathBuf::from("out/tmp")));
        assert!(config.build.python.is_none());

        let package = config.package();
        assert_eq!(package.description, "custom");
        assert_eq!(package.license, "Apache 2.0");
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = tmp.path().join("osqp-build.toml");

        std::fs::write(&global, "[build]\nalgebra = \"cuda\"\npython = \"/usr/bin/python3\"\n").unwrap();
        std::fs::write(&project, "[build]\nalgebra = \"default\"\n").unwrap();

        let config = load_config(Some(global.as_path()), &project).unwrap();
        assert_eq!(config.build.algebra.as_deref(), Some("default"));
        assert_eq!(config.build.python, Some(PathBuf::from("/usr/bin/python3")));
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, &tmp.path().join("osqp-build.toml")).unwrap();

        assert!(config.build.algebra.is_none());
        assert_eq!(config.package(), PackageMetadata::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("osqp-build.toml");
        std::fs::write(&project, "[build]\nalgebra = cuda\n").unwrap();

        assert!(Config::load_or_default(&project).is_err());
        assert!(load_config(None, &project).is_err());
    }

    #[test]
    fn test_malformed_global_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        std::fs::write(&global, "[build").unwrap();

        let result = load_config(Some(global.as_path()), &tmp.path().join("osqp-build.toml"));
        assert!(result.is_err());
    }
}
