//! Distribution metadata for the built extension.
//!
//! Metadata is a static descriptor: it is read from configuration and passed
//! through unchanged, except for the distribution name, which always follows
//! the artifact identity.

use serde::{Deserialize, Serialize};

use crate::core::descriptor::ExtensionDescriptor;

/// Static package metadata, as written in the `[package]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageMetadata {
    pub description: String,
    pub authors: Vec<String>,
    pub license: String,
    pub url: String,
    pub readme: Option<String>,
    pub install_requires: Vec<String>,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        PackageMetadata {
            description: "OSQP: The Operator Splitting QP Solver".to_string(),
            authors: vec![
                "Bartolomeo Stellato".to_string(),
                "Goran Banjac".to_string(),
            ],
            license: "Apache 2.0".to_string(),
            url: "https://osqp.org/".to_string(),
            readme: Some("README.rst".to_string()),
            install_requires: vec![
                "numpy>=1.7".to_string(),
                "scipy>=0.13.2".to_string(),
                "qdldl".to_string(),
            ],
        }
    }
}

/// Metadata of one distribution, named after its extension.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub metadata: &'a PackageMetadata,
}

impl PackageMetadata {
    /// Attach this metadata to the distribution of an extension.
    pub fn for_extension<'a>(&'a self, ext: &'a ExtensionDescriptor) -> Distribution<'a> {
        Distribution {
            name: ext.name(),
            metadata: self,
        }
    }
}
