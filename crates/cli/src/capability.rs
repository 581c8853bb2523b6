// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Availability probes for the optional Python-side dependencies.
//!
//! The coverage package, pytest-xdist, and nbmake are all optional.
//! Each is probed once per invocation with an explicit subprocess
//! import instead of being discovered through runtime failures, so the
//! commands can report a missing dependency by name.

use std::process::Command;

/// Probe results for the three optional dependencies.
///
/// A probe error carries the interpreter's message (typically the
/// `ModuleNotFoundError` line) for use in fatal error reporting.
#[derive(Debug)]
pub struct Capabilities {
    pub coverage: Result<(), String>,
    pub xdist: Result<(), String>,
    pub nbmake: Result<(), String>,
}

impl Capabilities {
    /// Probe all three modules through the configured interpreter.
    pub fn probe(python: &str) -> Self {
        Self {
            coverage: probe_import(python, "coverage"),
            xdist: probe_import(python, "xdist"),
            nbmake: probe_import(python, "nbmake"),
        }
    }

    pub fn has_coverage(&self) -> bool {
        self.coverage.is_ok()
    }

    pub fn has_xdist(&self) -> bool {
        self.xdist.is_ok()
    }

    pub fn has_nbmake(&self) -> bool {
        self.nbmake.is_ok()
    }
}

/// Check whether `module` is importable by `python`.
///
/// On failure the returned message is the last non-empty stderr line,
/// which for CPython is the `ImportError` itself.
pub fn probe_import(python: &str, module: &str) -> Result<(), String> {
    let output = Command::new(python)
        .arg("-c")
        .arg(format!("import {module}"))
        .output()
        .map_err(|e| format!("failed to run {python}: {e}"))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let message = stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("import failed")
        .trim()
        .to_string();
    Err(message)
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
