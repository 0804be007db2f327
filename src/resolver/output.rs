//! Output path handling
//!
//! This module derives the output path of a resolved source file and
//! prepares the output directory for batch runs.

use std::ffi::OsStr;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::OUTPUT_SUFFIX;
use crate::errors::{file_operation_error, Result};

use super::sources::ResolutionRequest;

/// Ensures the output directory exists for a batch run
///
/// Creates the output directory and all missing parents. Does nothing in
/// single mode. Safe to call repeatedly; an already existing directory is
/// not an error.
///
/// # Errors
/// Returns an error if the directory cannot be created
pub fn prepare_output(request: &ResolutionRequest) -> Result<()> {
    if !request.batch {
        return Ok(());
    }

    if !request.output.exists() {
        debug!("Creating output directory: {}", request.output.display());
        create_dir_all(&request.output)
            .map_err(|e| file_operation_error(e, request.output.clone(), "create directory"))?;
    }

    Ok(())
}

/// Computes the output path for a resolved source file
///
/// In single mode the request's output path is returned verbatim. In
/// batch mode the output directory is joined with the source file's stem,
/// the `-fc` suffix, and the source extension, so `photo.jpg` becomes
/// `photo-fc.jpg`.
///
/// Known limitation: batch mode flattens the source tree, so two source
/// files sharing a basename in different subdirectories map to the same
/// output path.
pub fn output_filename(request: &ResolutionRequest, source: &Path) -> PathBuf {
    if !request.batch {
        return request.output.clone();
    }

    let stem = source.file_stem().unwrap_or_else(|| OsStr::new(""));
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(extension) = source.extension() {
        name.push(".");
        name.push(extension);
    }

    request.output.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_request(output: &str) -> ResolutionRequest {
        ResolutionRequest {
            source: String::from("unused"),
            output: PathBuf::from(output),
            batch: true,
        }
    }

    #[test]
    fn test_batch_output_gets_suffix() {
        let request = batch_request("/out");
        let result = output_filename(&request, Path::new("/in/photo.jpg"));
        assert_eq!(result, PathBuf::from("/out/photo-fc.jpg"));
    }

    #[test]
    fn test_batch_output_without_extension() {
        let request = batch_request("/out");
        let result = output_filename(&request, Path::new("/in/photo"));
        assert_eq!(result, PathBuf::from("/out/photo-fc"));
    }

    #[test]
    fn test_single_output_is_verbatim() {
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: PathBuf::from("/out/result.jpg"),
            batch: false,
        };

        // The source file has no influence in single mode
        let result = output_filename(&request, Path::new("/in/photo.jpg"));
        assert_eq!(result, PathBuf::from("/out/result.jpg"));
        let result = output_filename(&request, Path::new("/elsewhere/other.png"));
        assert_eq!(result, PathBuf::from("/out/result.jpg"));
    }

    #[test]
    fn test_distinct_basenames_never_collide() {
        let request = batch_request("/out");
        let first = output_filename(&request, Path::new("/in/a/one.jpg"));
        let second = output_filename(&request, Path::new("/in/b/two.jpg"));
        assert_ne!(first, second);
    }
}
