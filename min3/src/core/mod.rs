//! Pure comparison logic.
//!
//! Nothing in here touches the filesystem or the process environment. Every
//! function is total and deterministic, so it can be tested in isolation.

pub mod min;
pub mod postcondition;
