use false_color::resolver::{output_filename, prepare_output, ResolutionRequest};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_output_filename_gets_suffix() {
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: PathBuf::from("/out"),
            batch: true,
        };

        let result = output_filename(&request, Path::new("/in/photo.jpg"));
        assert_eq!(result, PathBuf::from("/out/photo-fc.jpg"));
    }

    #[test]
    fn test_single_output_filename_is_taken_verbatim() {
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: PathBuf::from("/out/result.jpg"),
            batch: false,
        };

        let result = output_filename(&request, Path::new("/in/photo.jpg"));
        assert_eq!(result, PathBuf::from("/out/result.jpg"));
    }

    #[test]
    fn test_prepare_output_creates_missing_directories() {
        let root = tempdir().unwrap();
        let output = root.path().join("nested").join("out");
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: output.clone(),
            batch: true,
        };

        prepare_output(&request).unwrap();

        assert!(output.is_dir(), "Output directory should have been created");
    }

    #[test]
    fn test_prepare_output_is_idempotent() {
        let root = tempdir().unwrap();
        let output = root.path().join("out");
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: output.clone(),
            batch: true,
        };

        // Calling twice on the same directory must not fail
        prepare_output(&request).unwrap();
        prepare_output(&request).unwrap();

        assert!(output.is_dir());
    }

    #[test]
    fn test_prepare_output_does_nothing_in_single_mode() {
        let root = tempdir().unwrap();
        let output = root.path().join("out").join("result.jpg");
        let request = ResolutionRequest {
            source: String::from("unused"),
            output: output.clone(),
            batch: false,
        };

        prepare_output(&request).unwrap();

        // Single mode never touches the filesystem
        assert!(!output.exists());
        assert!(!root.path().join("out").exists());
    }
}
