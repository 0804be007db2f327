use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{create_dir_all, File};
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;

    fn fcolor() -> Command {
        Command::cargo_bin("fcolor").unwrap()
    }

    #[test]
    fn test_help_describes_the_arguments() {
        fcolor()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Source file, directory, or glob pattern",
            ));
    }

    #[test]
    fn test_missing_arguments_fail() {
        fcolor().assert().failure();
    }

    #[test]
    fn test_dry_batch_run_prints_the_plan() {
        let root = tempdir().unwrap();
        let source = root.path().join("photos");
        create_dir_all(&source).unwrap();
        File::create(source.join("a.jpg")).unwrap();
        File::create(source.join("b.jpg")).unwrap();

        let output = root.path().join("out");

        fcolor()
            .arg(source.to_str().unwrap())
            .arg(output.to_str().unwrap())
            .args(["--batch", "--dry", "--log-locally", "--log-file", ""])
            .assert()
            .success()
            .stdout(predicate::str::contains("a-fc.jpg"))
            .stdout(predicate::str::contains("b-fc.jpg"));

        // The dry flag suppresses the directory creation side effect
        assert!(!output.exists());
    }

    #[test]
    fn test_batch_run_creates_the_output_directory() {
        let root = tempdir().unwrap();
        let source = root.path().join("photos");
        create_dir_all(&source).unwrap();
        File::create(source.join("a.jpg")).unwrap();

        let output = root.path().join("out");

        fcolor()
            .arg(source.to_str().unwrap())
            .arg(output.to_str().unwrap())
            .args(["--batch", "--log-locally", "--log-file", ""])
            .assert()
            .success();

        assert!(output.is_dir(), "Batch mode should create the output directory");
    }

    #[test]
    fn test_missing_glob_base_aborts_with_a_message() {
        let root = tempdir().unwrap();
        let spec = format!("{}/missing/*.jpg", root.path().display());
        let output = root.path().join("out");

        fcolor()
            .arg(&spec)
            .arg(output.to_str().unwrap())
            .args(["--batch", "--dry", "--log-locally", "--log-file", ""])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Directory not found"));
    }
}
