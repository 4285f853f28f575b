//! Driver loop over the well-known stack files.

use std::path::Path;

use crate::error::Error;
use crate::validator::{report, validate_file};

/// The stack files checked on every run, in order.
pub const STACK_FILES: [&str; 3] = [
    "docker-stack.yml",
    "docker-stack-internal.yml",
    "docker-stack-nfs.yml.template",
];

/// Validate every well-known stack file under `base`.
///
/// Prints the per-file reports and the final banner to stdout and returns
/// whether all files were valid. A missing or erroring file marks the run
/// invalid but never aborts the loop.
pub fn validate_all(base: &Path) -> bool {
    let mut all_valid = true;

    for file_name in STACK_FILES {
        println!("Validating {}...", file_name);

        match validate_file(&base.join(file_name)) {
            Ok(file_report) => {
                print!("{}", report::render(&file_report));
                println!();
                all_valid = all_valid && file_report.is_valid();
            }
            Err(Error::MissingFile(name)) => {
                println!("❌ {} not found", name);
                all_valid = false;
            }
            Err(err) => {
                println!("❌ Error validating {}: {}", file_name, err);
                log::debug!("validation failure detail: {:?}", err);
                all_valid = false;
            }
        }
    }

    println!("{}", report::render_summary(all_valid));
    all_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID_STACK: &str = r#"version: "3.8"
services:
  web:
    image: nginx:1.25
    deploy:
      restart_policy:
        condition: on-failure
"#;

    fn write_all_valid(dir: &TempDir) {
        for file_name in STACK_FILES {
            fs::write(dir.path().join(file_name), VALID_STACK).unwrap();
        }
    }

    #[test]
    fn test_all_valid() {
        let dir = TempDir::new().unwrap();
        write_all_valid(&dir);
        assert!(validate_all(dir.path()));
    }

    #[test]
    fn test_missing_file_fails_run_but_continues() {
        let dir = TempDir::new().unwrap();
        write_all_valid(&dir);
        fs::remove_file(dir.path().join("docker-stack-internal.yml")).unwrap();
        assert!(!validate_all(dir.path()));
    }

    #[test]
    fn test_one_invalid_file_fails_run() {
        let dir = TempDir::new().unwrap();
        write_all_valid(&dir);
        fs::write(
            dir.path().join("docker-stack.yml"),
            "version: \"3.8\"\nservices:\n  web:\n    build: .\n",
        )
        .unwrap();
        assert!(!validate_all(dir.path()));
    }

    #[test]
    fn test_structural_error_hits_catch_all() {
        let dir = TempDir::new().unwrap();
        write_all_valid(&dir);
        fs::write(dir.path().join("docker-stack.yml"), "just a scalar\n").unwrap();
        assert!(!validate_all(dir.path()));
    }
}
