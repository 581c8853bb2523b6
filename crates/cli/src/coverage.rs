// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage tracker lifecycle over the coverage subprocess tool.
//!
//! The run itself is measured by routing pytest through
//! `coverage run` (see [`crate::pytest::command`]); this module owns
//! the surrounding start/save/report steps. Report generation is
//! best-effort: failures there are logged and suppressed, never
//! propagated.

use std::process::{Command, Output};

use crate::error::Error;

/// Process-wide coverage tracker, scoped to one test-execution call.
#[derive(Debug)]
pub struct CoverageTracker {
    python: String,
}

impl CoverageTracker {
    pub fn new(python: &str) -> Self {
        Self {
            python: python.to_string(),
        }
    }

    /// Start tracking: clear data files left behind by earlier runs.
    pub fn start(&self) -> Result<(), Error> {
        let output = self
            .coverage(&["erase"])
            .map_err(|e| Error::CoverageStart(e.to_string()))?;
        if !output.status.success() {
            return Err(Error::CoverageStart(stderr_line(&output)));
        }
        Ok(())
    }

    /// Persist results: merge per-worker data files into `.coverage`.
    ///
    /// Serial runs write `.coverage` directly, so "nothing to combine"
    /// is expected and tolerated.
    pub fn save(&self) {
        match self.coverage(&["combine"]) {
            Ok(output) if !output.status.success() => {
                tracing::debug!("coverage combine: {}", stderr_line(&output));
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("coverage combine: {e}"),
        }
    }

    /// Generate the HTML report. Errors are suppressed.
    pub fn html_report(&self) {
        match self.coverage(&["html", "--ignore-errors"]) {
            Ok(output) if !output.status.success() => {
                tracing::warn!(
                    "failed to generate coverage html report: {}",
                    stderr_line(&output)
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("failed to generate coverage html report: {e}"),
        }
    }

    fn coverage(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(&self.python)
            .args(["-m", "coverage"])
            .args(args)
            .output()
    }
}

fn stderr_line(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("exited with a failure status")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
