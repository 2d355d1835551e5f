//! Evaluate a case file against `min3` and its contract.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::min::min3;
use crate::core::postcondition::{postcondition_violations, symmetry_violations};
use crate::io::case_file::{Case, CaseFile, CheckConfig};

/// Result of evaluating a single case.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: String,
    pub inputs: [i64; 3],
    pub result: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<i64>,
    pub violations: Vec<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregated outcome of a check run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Cases not evaluated because `fail_fast` stopped the run.
    pub skipped: usize,
    pub cases: Vec<CaseOutcome>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate one case: contract, optional expectation, optional symmetry.
pub fn check_case(case: &Case, config: &CheckConfig) -> CaseOutcome {
    let [a, b, c] = case.inputs;
    let result = min3(a, b, c);

    let mut violations = postcondition_violations(case.inputs, result);
    if let Some(expected) = case.expected
        && expected != result
    {
        violations.push(format!("expected {expected}, got {result}"));
    }
    if config.check_symmetry {
        violations.extend(symmetry_violations(case.inputs));
    }

    CaseOutcome {
        name: case.name.clone(),
        inputs: case.inputs,
        result,
        expected: case.expected,
        violations,
    }
}

/// Evaluate every case in `file`, honoring `fail_fast`.
pub fn check_cases(file: &CaseFile) -> CheckReport {
    let total = file.cases.len();
    info!(total, fail_fast = file.config.fail_fast, "checking cases");

    let mut outcomes = Vec::with_capacity(total);
    for case in &file.cases {
        let outcome = check_case(case, &file.config);
        debug!(name = %outcome.name, result = outcome.result, passed = outcome.passed(), "case evaluated");
        let failed = !outcome.passed();
        outcomes.push(outcome);
        if failed && file.config.fail_fast {
            warn!(name = %case.name, "stopping at first failure");
            break;
        }
    }

    let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();
    let failed = outcomes.len() - passed;
    CheckReport {
        total,
        passed,
        failed,
        skipped: total - outcomes.len(),
        cases: outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{case, case_file};

    #[test]
    fn boundary_cases_all_pass() {
        let file = case_file(
            CheckConfig::default(),
            vec![
                case("ascending", [1, 2, 3], Some(1)),
                case("descending", [3, 2, 1], Some(1)),
                case("all-equal", [5, 5, 5], Some(5)),
                case("straddles-zero", [-1, 0, 1], Some(-1)),
                case("tie", [2, 2, 3], Some(2)),
            ],
        );
        let report = check_cases(&file);
        assert!(report.all_passed());
        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 5);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn wrong_expectation_fails_case() {
        let outcome = check_case(&case("wrong", [4, 8, 6], Some(6)), &CheckConfig::default());
        assert!(!outcome.passed());
        assert_eq!(outcome.result, 4);
        assert_eq!(outcome.violations, vec!["expected 6, got 4".to_string()]);
    }

    #[test]
    fn missing_expectation_checks_contract_only() {
        let outcome = check_case(&case("open", [9, -9, 0], None), &CheckConfig::default());
        assert!(outcome.passed());
        assert_eq!(outcome.result, -9);
    }

    #[test]
    fn fail_fast_skips_remaining_cases() {
        let config = CheckConfig {
            fail_fast: true,
            check_symmetry: false,
        };
        let file = case_file(
            config,
            vec![
                case("ok", [1, 2, 3], Some(1)),
                case("bad", [1, 2, 3], Some(3)),
                case("never", [0, 0, 0], Some(0)),
            ],
        );
        let report = check_cases(&file);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.cases.len(), 2);
    }

    #[test]
    fn without_fail_fast_every_case_runs() {
        let file = case_file(
            CheckConfig::default(),
            vec![
                case("bad", [1, 2, 3], Some(2)),
                case("ok", [7, 7, 1], Some(1)),
            ],
        );
        let report = check_cases(&file);
        assert_eq!(report.failed, 1);
        assert_eq!(report.passed, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn report_serializes_without_absent_expectation() {
        let file = case_file(CheckConfig::default(), vec![case("open", [2, 1, 3], None)]);
        let json = serde_json::to_value(check_cases(&file)).expect("serialize");
        assert_eq!(json["cases"][0]["result"], 1);
        assert!(json["cases"][0].get("expected").is_none());
    }
}
