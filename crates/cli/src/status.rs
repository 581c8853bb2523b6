// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tagged model of the runner's exit status.
//!
//! pytest communicates its outcome through an integer exit code. The
//! thresholds here mirror the harness this replaces: 4 means the usage
//! error produced by an unrecognized plugin flag, anything above 2 is a
//! general failure, and everything at or below 2 counts as success.
//! Codes 1 and 2 (tests failed, run interrupted) are deliberately left
//! on the success side of the line; callers must not "correct" this.

use std::process::ExitStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Exit code 0, 1, or 2.
    Success,
    /// Exit code above 2, other than 4.
    TestFailures,
    /// Exit code 4: the requested plugin never loaded.
    PluginMissing,
    /// The runner terminated without an exit code (killed by a signal).
    Unknown,
}

impl RunStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(4) => RunStatus::PluginMissing,
            Some(code) if code > 2 => RunStatus::TestFailures,
            Some(_) => RunStatus::Success,
            None => RunStatus::Unknown,
        }
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        RunStatus::from_code(status.code())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
