//! Command implementations

pub mod backends;
pub mod build;
pub mod clean;
pub mod completions;
pub mod metadata;
