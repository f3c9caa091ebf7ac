//! Scratch workspace for CMake's intermediate state.

use std::fs;
use std::path::Path;

use crate::builder::errors::BuildError;
use crate::util::fs::normalize;

/// Refuse a workspace that contains any of the `protected` directories.
///
/// The workspace is removed recursively on every run, so it must not be
/// the source tree, the output directory, or one of their ancestors.
/// Paths are compared after making them absolute and folding `.`/`..`.
pub fn check_workspace(
    workspace: &Path,
    protected: &[(&'static str, &Path)],
) -> Result<(), BuildError> {
    let resolve = |path: &Path| {
        std::path::absolute(path)
            .map(|p| normalize(&p))
            .map_err(|source| BuildError::Workspace {
                action: "resolve",
                path: path.to_path_buf(),
                source,
            })
    };

    let ws = resolve(workspace)?;
    for &(role, dir) in protected {
        if resolve(dir)?.starts_with(&ws) {
            return Err(BuildError::UnsafeWorkspace {
                workspace: workspace.to_path_buf(),
                role,
                protected: dir.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Reset the build workspace to an empty directory.
///
/// Anything left from a previous run is removed; there is no incremental
/// mode. Must run once per build, before CMake is invoked.
pub fn prepare_workspace(path: &Path) -> Result<(), BuildError> {
    if path.exists() {
        tracing::debug!("removing stale workspace {}", path.display());
        fs::remove_dir_all(path).map_err(|source| BuildError::Workspace {
            action: "remove",
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::create_dir_all(path).map_err(|source| BuildError::Workspace {
        action: "create",
        path: path.to_path_buf(),
        source,
    })
}
