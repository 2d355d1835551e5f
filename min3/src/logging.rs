//! Diagnostic tracing for the `min3` CLI.
//!
//! `min3 check` emits an `info` event when a run starts, a `debug` event per
//! evaluated case, and a `warn` event when `fail_fast` stops the run early.
//! `min3 eval` emits one `debug` event with its inputs. Events go to stderr, so
//! stdout carries only results.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// # Example
/// ```bash
/// # per-case results alongside the report
/// RUST_LOG=min3::check=debug min3 check cases/boundary.toml
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr = fmt::layer().with_writer(std::io::stderr).compact();

    tracing_subscriber::registry().with(filter).with(stderr).init();
}
