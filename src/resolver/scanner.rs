//! Directory scanning functionality
//!
//! This module contains functions for walking a directory tree and
//! collecting the files it holds.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{file_operation_error, Result};

/// Collects every file under a directory, recursively
///
/// Subdirectories are descended to any depth. The result is sorted
/// ascending by the full path string (ordinal comparison), so the order
/// is deterministic regardless of how the filesystem returns entries.
///
/// # Arguments
/// * `directory` - The root of the tree to scan
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The sorted list of files found or an error
///
/// # Errors
/// Returns an error if a directory in the tree cannot be read
pub fn collect_files(directory: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory tree: {}", directory.display());

    let mut files = Vec::new();
    walk(directory, &mut files)?;
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!("Found {} files under {}", files.len(), directory.display());

    Ok(files)
}

fn walk(directory: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;

    for entry in entries {
        let entry = entry
            .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read entry in"))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }

    Ok(())
}
