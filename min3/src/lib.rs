//! Minimum of three integers, plus a small harness that checks it.
//!
//! - **[`core`]**: the pure [`min3`](core::min::min3) function and the contract
//!   checks applied to its results. No I/O.
//! - **[`io`]**: loading TOML case files.
//!
//! [`check`] ties the two together for the `min3 check` command.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::min::min3;
