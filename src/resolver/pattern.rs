//! Glob pattern handling
//!
//! This module splits a source specification into its literal directory
//! prefix and its wildcard suffix, and wraps the glob matcher used to
//! filter enumerated files.

use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use glob::{MatchOptions, Pattern};
use once_cell::sync::Lazy;

use crate::errors::{glob_pattern_error, Result};

/// Match options applied to every pattern comparison
///
/// `*` and `?` never cross a path separator; `**` is the only way to match
/// across directories.
static MATCH_OPTIONS: Lazy<MatchOptions> = Lazy::new(|| MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
});

/// Normalise all path separators to forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Compute the literal base directory of a glob pattern
///
/// Takes path segments from the start while each segment is free of `*`
/// and `?`, stopping at the first segment carrying a wildcard. The
/// retained segments are rejoined with the platform separator.
///
/// A wildcard in the very first segment yields an empty base; a path with
/// no wildcard segments at all is returned unchanged.
pub fn glob_base(path: &str) -> PathBuf {
    let normalized = normalize_separators(path);
    let mut base = PathBuf::new();

    for segment in normalized.split('/') {
        if segment.contains(|c| c == '*' || c == '?') {
            break;
        }
        if segment.is_empty() {
            // A leading empty segment marks an absolute path; empty
            // segments elsewhere carry no information.
            if base.as_os_str().is_empty() {
                base.push(MAIN_SEPARATOR_STR);
            }
        } else {
            base.push(segment);
        }
    }

    base
}

/// Compile a source specification into a glob matcher
///
/// Character classes are not part of the supported syntax, so `[` is
/// escaped before compilation and brackets always match themselves
/// literally.
///
/// # Errors
/// Returns an error if the pattern is rejected by the glob matcher
pub fn compile_pattern(pattern: &str) -> Result<Pattern> {
    let normalized = normalize_separators(pattern);
    let escaped = normalized.replace('[', "[[]");
    Pattern::new(&escaped).map_err(|e| glob_pattern_error(e, pattern))
}

/// Check whether a file path matches a compiled pattern
///
/// The candidate path is normalised to forward slashes before matching so
/// that patterns behave identically across platforms.
pub fn is_match(pattern: &Pattern, path: &Path) -> bool {
    let candidate = normalize_separators(&path.to_string_lossy());
    pattern.matches_with(&candidate, *MATCH_OPTIONS)
}
