//! Side-effecting operations: reading case files from disk.

pub mod case_file;
