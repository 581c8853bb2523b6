// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide logging configuration.
//!
//! Called exactly once by `main` before any command runs. The default
//! filter keeps the harness quiet so the runner's own output dominates;
//! test failures still surface through `error`-level lines on stderr.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the built-in directives. Safe to call more than
/// once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "sluice=debug" } else { "sluice=error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
