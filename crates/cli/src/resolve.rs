// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test directory resolution.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Resolve the directory to hand to the runner.
///
/// With a module name, resolves the matching subdirectory of the test
/// root; otherwise the root itself. Fails before any runner invocation
/// when the resolved path is not an existing directory.
pub fn test_dir(tests_root: &Path, module: Option<&str>) -> Result<PathBuf, Error> {
    let dir = match module {
        Some(module) => tests_root.join(module),
        None => tests_root.to_path_buf(),
    };

    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir));
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
