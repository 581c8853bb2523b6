// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tutorial-execution command.
//!
//! Notebooks are executed from a temporary copy of the tutorials folder
//! so their output files never land in the working tree. The copy lives
//! in a [`tempfile::TempDir`], which removes it on every exit path.

use std::path::Path;

use anyhow::Context;

use crate::capability::Capabilities;
use crate::cli::{Cli, TutorialsArgs};
use crate::config::Project;
use crate::error::Error;
use crate::pytest;
use crate::resolve;
use crate::status::RunStatus;

/// Run the tutorials command.
pub fn run(cli: &Cli, args: &TutorialsArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let project = Project::locate(cli.config.as_deref(), &cwd)?;
    run_in(&project, args)
}

/// Execute the notebook tutorials for an already-located project.
pub fn run_in(project: &Project, args: &TutorialsArgs) -> anyhow::Result<()> {
    let runner = &project.config.runner;
    let caps = Capabilities::probe(&runner.python);

    // The plugin check happens before any temporary directory exists.
    if let Err(message) = &caps.nbmake {
        return Err(Error::NbmakeUnavailable(message.clone()).into());
    }

    let tutorials_src = resolve::test_dir(&project.tutorials_root(), None)?;

    let tmp = tempfile::tempdir().context("failed to create temporary directory")?;
    copy_tree(&tutorials_src, &tmp.path().join("tutorials"))?;

    if args.parallel {
        let workers = match args.n_cpu {
            Some(n) => n.to_string(),
            None => "auto".to_string(),
        };
        let argv = pytest::notebook_args(tmp.path(), Some(&workers));
        match pytest::run(runner, &argv, false)? {
            RunStatus::PluginMissing => return Err(Error::DistPluginMissing.into()),
            RunStatus::TestFailures => tracing::error!("testing not successfully finished"),
            RunStatus::Unknown => tracing::error!("test runner terminated without an exit status"),
            RunStatus::Success => {}
        }
    } else {
        let argv = pytest::notebook_args(tmp.path(), None);
        match pytest::run(runner, &argv, false)? {
            // Serially, the usage-error status means --nbmake itself
            // was not recognized despite the import probe.
            RunStatus::PluginMissing => return Err(Error::NotebookPluginMissing.into()),
            RunStatus::TestFailures => tracing::error!("testing not successfully finished"),
            RunStatus::Unknown => tracing::error!("test runner terminated without an exit status"),
            RunStatus::Success => {}
        }
    }

    Ok(())
}

/// Recursively copy `src` into `dst`, creating `dst`.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> Result<(), Error> {
    copy_tree_inner(src, dst).map_err(|source| Error::CopyTree {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })
}

fn copy_tree_inner(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree_inner(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cmd_tutorials_tests.rs"]
mod tests;
