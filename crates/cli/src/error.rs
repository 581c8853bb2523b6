// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the harness.
//!
//! Configuration and availability problems are fatal and surface as
//! variants here. Test failures reported by the runner are not errors
//! of the harness; they only produce log output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A resolved test or tutorials path does not exist on disk.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The runner exited with the usage-error status during a parallel
    /// run, which means the distribution plugin never loaded.
    #[error(
        "parallel testing not possible; please make sure that pytest-xdist \
         is installed correctly"
    )]
    DistPluginMissing,

    /// The runner exited with the usage-error status during a serial
    /// notebook run, which means the --nbmake flag was not recognized.
    #[error(
        "notebook testing not possible; please make sure that nbmake \
         is installed correctly"
    )]
    NotebookPluginMissing,

    /// The nbmake import probe failed before tutorial execution.
    #[error(
        "testing of jupyter notebooks requires the pytest extension nbmake; \
         please make sure that nbmake is installed correctly\nerror message: {0}"
    )]
    NbmakeUnavailable(String),

    /// Coverage was requested but the coverage package is not importable.
    #[error(
        "coverage requested but the coverage package is not importable; \
         please make sure that coverage is installed correctly\nerror message: {0}"
    )]
    CoverageUnavailable(String),

    /// The coverage tracker could not be started.
    #[error("failed to start coverage tracking: {0}")]
    CoverageStart(String),

    /// An external program could not be spawned at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Recursive copy of the tutorials folder failed.
    #[error("failed to copy {} to {}: {source}", src.display(), dst.display())]
    CopyTree {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
