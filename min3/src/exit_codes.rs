//! Stable exit codes for the `min3` CLI.
//!
//! `2` is left to clap for usage errors.

/// Command succeeded; for `check`, every case passed.
pub const OK: i32 = 0;
/// Unreadable or invalid case file, or any other error.
pub const INVALID: i32 = 1;
/// `min3 check` found at least one failing case.
pub const FAILED: i32 = 3;
