//! Test-only helpers for building cases and case files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::case_file::{Case, CaseFile, CheckConfig};

/// Create a case with the given label, inputs and optional expectation.
pub fn case(name: &str, inputs: [i64; 3], expected: Option<i64>) -> Case {
    Case {
        name: name.to_string(),
        inputs,
        expected,
    }
}

/// Wrap cases in a case file with the given config.
pub fn case_file(config: CheckConfig, cases: Vec<Case>) -> CaseFile {
    CaseFile { config, cases }
}

/// Write raw TOML to `cases.toml` under `dir` and return its path.
pub fn write_cases_toml(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("cases.toml");
    fs::write(&path, contents).expect("write cases.toml");
    path
}

/// A fresh temporary directory for case files.
pub fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
