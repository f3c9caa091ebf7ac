//! Extension descriptor - the one artifact a build produces.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::backend::Backend;

/// Product prefix shared by every backend's artifact.
pub const PRODUCT: &str = "osqp";

/// CMake cache variable selecting the algebra backend.
pub const ALGEBRA_DIRECTIVE: &str = "ALGEBRA";

/// An immutable record naming one buildable extension module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionDescriptor {
    name: String,
    backend: Backend,
    source_root: PathBuf,
    backend_overrides: Vec<(String, String)>,
}

impl ExtensionDescriptor {
    /// Create the descriptor for a validated backend.
    ///
    /// The name is `osqp_<backend>`, so every backend gets its own artifact
    /// identity and several can be installed side by side.
    pub fn for_backend(backend: Backend, source_root: impl Into<PathBuf>) -> Self {
        ExtensionDescriptor {
            name: artifact_name(backend),
            backend,
            source_root: source_root.into(),
            backend_overrides: vec![(
                ALGEBRA_DIRECTIVE.to_string(),
                backend.as_str().to_string(),
            )],
        }
    }

    /// Artifact name, also the build target and import name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Importable module name: the last dotted segment of the name.
    pub fn module_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Root of the CMake source tree.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Backend-specific cache directives, in order.
    pub fn backend_overrides(&self) -> &[(String, String)] {
        &self.backend_overrides
    }

    /// Backend overrides rendered as `-DKEY=VALUE` arguments.
    pub fn override_args(&self) -> impl Iterator<Item = String> + '_ {
        self.backend_overrides
            .iter()
            .map(|(key, value)| format!("-D{}={}", key, value))
    }
}

/// Artifact name for a backend (`osqp_mkl`, ...).
pub fn artifact_name(backend: Backend) -> String {
    format!("{}_{}", PRODUCT, backend.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_name_per_backend() {
        assert_eq!(artifact_name(Backend::Default), "osqp_default");
        assert_eq!(artifact_name(Backend::Mkl), "osqp_mkl");
        assert_eq!(artifact_name(Backend::Cuda), "osqp_cuda");
    }

    #[test]
    fn test_names_are_distinct() {
        let names: HashSet<_> = Backend::ALL.iter().map(|b| artifact_name(*b)).collect();
        assert_eq!(names.len(), Backend::ALL.len());
    }

    #[test]
    fn test_descriptor_overrides() {
        let desc = ExtensionDescriptor::for_backend(Backend::Cuda, "/src/osqp");

        assert_eq!(desc.name(), "osqp_cuda");
        assert_eq!(desc.module_name(), "osqp_cuda");
        assert_eq!(desc.source_root(), Path::new("/src/osqp"));
        assert_eq!(
            desc.backend_overrides(),
            &[("ALGEBRA".to_string(), "cuda".to_string())]
        );
        assert_eq!(desc.override_args().collect::<Vec<_>>(), vec!["-DALGEBRA=cuda"]);
    }

    #[test]
    fn test_source_root_fixed_across_backends() {
        let roots: HashSet<_> = Backend::ALL
            .iter()
            .map(|b| ExtensionDescriptor::for_backend(*b, "/src/osqp").source_root().to_path_buf())
            .collect();
        assert_eq!(roots.len(), 1);
    }
}
