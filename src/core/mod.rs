//! Core data types: backend selection, the extension descriptor, and the
//! facts a build is parameterized on.

pub mod backend;
pub mod descriptor;
pub mod metadata;
pub mod mode;
pub mod platform;

pub use backend::{Backend, BackendParseError, ALGEBRA_ENV};
pub use descriptor::{artifact_name, ExtensionDescriptor, PRODUCT};
pub use metadata::PackageMetadata;
pub use mode::BuildMode;
pub use platform::{OsKind, PlatformFacts};
