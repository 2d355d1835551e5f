//! Case file parsing and validation.
//!
//! A case file is TOML with an optional `[config]` table and a non-empty
//! `[[cases]]` array. See `min3/cases/` for examples.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// A parsed case file containing check configuration and cases.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub config: CheckConfig,
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// How a check run behaves.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Stop after the first failing case.
    pub fail_fast: bool,

    /// Also evaluate every permutation of the inputs and require agreement.
    pub check_symmetry: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            check_symmetry: true,
        }
    }
}

/// One set of inputs to evaluate.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Case {
    /// Unique, human-readable label.
    pub name: String,
    pub inputs: [i64; 3],
    /// Expected minimum. When absent only the contract is checked.
    #[serde(default)]
    pub expected: Option<i64>,
}

impl CaseFile {
    /// Load and validate a case file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read cases {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("load cases {}", path.display()))
    }

    /// Parse and validate case file contents.
    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: CaseFile = toml::from_str(contents).context("parse case file")?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<()> {
        if self.cases.is_empty() {
            bail!("cases must be a non-empty array");
        }
        let mut seen = BTreeSet::new();
        for (index, case) in self.cases.iter().enumerate() {
            if case.name.trim().is_empty() {
                bail!("cases[{}].name must be non-empty", index);
            }
            if !seen.insert(case.name.as_str()) {
                bail!("duplicate case name {}", case.name);
            }
        }
        Ok(())
    }
}
