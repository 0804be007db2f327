use std::env::current_dir;
use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf};

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, Result};
use directories::ProjectDirs;
use shellexpand::tilde;

/// Expand a leading tilde in a user-supplied path
pub fn expand_path(path: &str) -> String {
    tilde(path).to_string()
}

/// Resolve a path against the current working directory and collapse
/// `.` and `..` segments lexically
///
/// No filesystem access takes place, so the returned path does not have
/// to exist and symlinks are not resolved. A `..` at the root stays at
/// the root.
pub fn absolutize(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = current_dir()
            .map_err(|e| file_operation_error(e, PathBuf::from("."), "determine working directory for"))?;
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}
