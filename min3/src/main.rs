//! `min3` command line.
//!
//! `min3 eval` prints the minimum of three integers. `min3 check` runs a TOML
//! case file against the function and its contract.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use min3::check::{CheckReport, check_cases};
use min3::exit_codes;
use min3::io::case_file::CaseFile;
use min3::logging;

#[derive(Parser)]
#[command(name = "min3", version, about = "Minimum of three integers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the smallest of three integers.
    Eval {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        #[arg(allow_negative_numbers = true)]
        c: i64,
    },
    /// Check every case in a TOML case file.
    Check {
        path: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Eval { a, b, c } => {
            debug!(a, b, c, "eval");
            println!("{}", min3::min3(a, b, c));
            Ok(exit_codes::OK)
        }
        Command::Check { path, json } => cmd_check(&path, json),
    }
}

fn cmd_check(path: &Path, json: bool) -> Result<i32> {
    let file = CaseFile::load(path)?;
    let report = check_cases(&file);
    if json {
        let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{}", payload);
    } else {
        print_report(&report);
    }
    for outcome in report.cases.iter().filter(|outcome| !outcome.passed()) {
        for violation in &outcome.violations {
            eprintln!("violation: case={} {}", outcome.name, violation);
        }
    }
    Ok(if report.all_passed() {
        exit_codes::OK
    } else {
        exit_codes::FAILED
    })
}

fn print_report(report: &CheckReport) {
    for outcome in &report.cases {
        let status = if outcome.passed() { "pass" } else { "fail" };
        println!(
            "case: name={} result={} status={}",
            outcome.name, outcome.result, status
        );
    }
    println!(
        "check: total={} passed={} failed={} skipped={}",
        report.total, report.passed, report.failed, report.skipped
    );
}
