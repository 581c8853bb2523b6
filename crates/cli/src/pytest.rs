// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pytest invocation.
//!
//! Builds the argument lists for suite and notebook runs and waits
//! synchronously for the runner. Parallelism is entirely pytest-xdist's
//! business; the harness only picks the worker count. Runner stdio is
//! inherited so test output reaches the terminal unfiltered.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::config::RunnerConfig;
use crate::error::Error;
use crate::status::RunStatus;

/// Arguments for a test-suite run: stop on first failure, no output
/// capture, optional xdist worker count.
pub fn suite_args(test_dir: &Path, workers: Option<usize>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![test_dir.into(), "-x".into(), "-s".into()];
    if let Some(n) = workers {
        args.push("-n".into());
        args.push(n.to_string().into());
    }
    args
}

/// Arguments for a notebook run over a tutorials copy.
///
/// `workers` is passed through verbatim so the caller can request the
/// runner's own `auto` worker selection.
pub fn notebook_args(test_dir: &Path, workers: Option<&str>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["--nbmake".into()];
    if let Some(w) = workers {
        args.push(format!("-n={w}").into());
    }
    args.push(test_dir.into());
    args
}

/// Worker count used when a parallel run does not specify one.
pub fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

/// Run pytest and map its exit status.
///
/// With `under_coverage` the invocation is routed through the coverage
/// tool so measurement spans the whole run:
/// `python -m coverage run -m pytest <args…>`.
pub fn run(
    runner: &RunnerConfig,
    args: &[OsString],
    under_coverage: bool,
) -> Result<RunStatus, Error> {
    let mut cmd = command(runner, args, under_coverage);
    let program = cmd.get_program().to_string_lossy().into_owned();
    tracing::debug!("running {program} {:?}", cmd.get_args());

    let status = cmd
        .status()
        .map_err(|source| Error::Spawn { program, source })?;
    Ok(RunStatus::from(status))
}

/// Assemble the runner command without executing it.
pub(crate) fn command(runner: &RunnerConfig, args: &[OsString], under_coverage: bool) -> Command {
    let mut cmd = if under_coverage {
        let mut cmd = Command::new(&runner.python);
        cmd.args(["-m", "coverage", "run", "-m", "pytest"]);
        cmd
    } else {
        Command::new(&runner.pytest)
    };
    cmd.args(args);
    cmd
}

#[cfg(test)]
#[path = "pytest_tests.rs"]
mod tests;
