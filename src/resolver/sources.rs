//! Source file resolution
//!
//! This module turns a resolution request into the concrete, ordered list
//! of files to process.

use std::path::PathBuf;

use log::debug;

use crate::errors::{directory_not_found_error, invalid_filename_error, Result};
use crate::utils::{absolutize, expand_path};

use super::output::output_filename;
use super::pattern::{compile_pattern, glob_base, is_match};
use super::scanner::collect_files;

/// A request to resolve a source specification
///
/// Supplied by the command-line layer. `output` is the output file in
/// single mode and the output directory in batch mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionRequest {
    /// The source specification: a file, a directory, or a glob pattern
    pub source: String,
    /// The output path
    pub output: PathBuf,
    /// Whether to process every matched file rather than a single one
    pub batch: bool,
}

/// A resolved source file together with its computed output path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFile {
    /// The absolute path of the source file
    pub source: PathBuf,
    /// The output path the conversion would be written to
    pub output: PathBuf,
}

/// Resolves the request into the ordered list of source files
///
/// The source specification is tilde-expanded and made absolute first.
/// In single mode the absolute path is returned as-is, without checking
/// that it exists. In batch mode an existing directory is enumerated
/// recursively; anything else is treated as a glob pattern, matched
/// against every file under the pattern's literal base directory.
/// Both batch branches return files sorted ascending by full path.
///
/// # Errors
/// * Returns an error if the glob base directory does not exist
/// * Returns an error if the pattern is rejected by the glob matcher
/// * Returns an error if a directory in the scanned tree cannot be read
pub fn get_source_files(request: &ResolutionRequest) -> Result<Vec<PathBuf>> {
    let absolute = absolutize(&expand_path(&request.source))?;

    if !request.batch {
        return Ok(vec![absolute]);
    }

    if absolute.is_dir() {
        debug!("Source is a directory: {}", absolute.display());
        return collect_files(&absolute);
    }

    let pattern_text = absolute
        .to_str()
        .ok_or_else(|| invalid_filename_error(absolute.clone()))?;
    let pattern = compile_pattern(pattern_text)?;

    let base = glob_base(pattern_text);
    if !base.is_dir() {
        return Err(directory_not_found_error(base));
    }

    debug!(
        "Matching pattern {} under base {}",
        pattern_text,
        base.display()
    );

    let matched = collect_files(&base)?
        .into_iter()
        .filter(|path| is_match(&pattern, path))
        .collect();

    Ok(matched)
}

/// Resolves the request into source files paired with their output paths
///
/// # Errors
/// Returns an error if source resolution fails; output path computation
/// itself cannot fail
pub fn resolve(request: &ResolutionRequest) -> Result<Vec<ResolvedFile>> {
    let files = get_source_files(request)?;

    Ok(files
        .into_iter()
        .map(|source| {
            let output = output_filename(request, &source);
            ResolvedFile { source, output }
        })
        .collect())
}
