/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI
/// invocation to correct output, using `assert_cmd` and `tempfile` for
/// isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_KB: &str = r#"
{
    "npm": {
        "scanoss@0.15.7": [
            { "name": "tar-stream", "requirement": "^2.2.0" }
        ],
        "tar-stream@2.2.0": [
            { "name": "bl", "requirement": "^4.0.3" }
        ],
        "bl@4.0.3": []
    }
}
"#;

fn write_sample_kb(dir: &Path) -> PathBuf {
    let path = dir.join("kb.json");
    fs::write(&path, SAMPLE_KB).unwrap();
    path
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovered_config_sets_format() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        write_config(&dir.path().join("deptree.config.yml"), "format: text\n");

        cargo_bin_cmd!("deptree")
            .current_dir(dir.path())
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "pkg:npm/scanoss@0.15.7 --> pkg:npm/tar-stream@2.2.0",
            ));
    }

    #[test]
    fn test_auto_discovered_config_sets_default_depth() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        write_config(&dir.path().join("deptree.config.yml"), "default_depth: 1\n");

        cargo_bin_cmd!("deptree")
            .current_dir(dir.path())
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .assert()
            .success()
            .stdout(predicate::str::contains("tar-stream"))
            .stdout(predicate::str::contains("bl").not());
    }

    #[test]
    fn test_missing_config_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());

        cargo_bin_cmd!("deptree")
            .current_dir(dir.path())
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .assert()
            .success();
    }
}

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_is_loaded() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: text\n");

        cargo_bin_cmd!("deptree")
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("-->"));
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());

        cargo_bin_cmd!("deptree")
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .args(["--config", "/nonexistent/deptree.config.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_config_value_fails() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "max_workers: 0\n");

        cargo_bin_cmd!("deptree")
            .args(["scanoss", "0.15.7", "--kb"])
            .arg(&kb)
            .arg("--config")
            .arg(&config_path)
            .assert()
            .code(3);
    }
}

mod cli_override_tests {
    use super::*;

    /// CLI flags always win over config file values
    #[test]
    fn test_cli_depth_overrides_config_depth() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        write_config(&dir.path().join("deptree.config.yml"), "default_depth: 1\n");

        cargo_bin_cmd!("deptree")
            .current_dir(dir.path())
            .args(["scanoss", "0.15.7", "--depth", "3", "--kb"])
            .arg(&kb)
            .assert()
            .success()
            .stdout(predicate::str::contains("bl"));
    }

    #[test]
    fn test_cli_format_overrides_config_format() {
        let dir = TempDir::new().unwrap();
        let kb = write_sample_kb(dir.path());
        write_config(&dir.path().join("deptree.config.yml"), "format: text\n");

        cargo_bin_cmd!("deptree")
            .current_dir(dir.path())
            .args(["scanoss", "0.15.7", "-f", "json", "--kb"])
            .arg(&kb)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"dependency_count\""));
    }
}
