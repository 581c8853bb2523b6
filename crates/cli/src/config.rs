// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from sluice.toml.
//!
//! Every field has a default, so a missing config file yields a usable
//! project rooted at the working directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::discovery;

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project-relative paths to the fixed roots.
    pub paths: PathsConfig,

    /// External program selection.
    pub runner: RunnerConfig,
}

/// Locations of the test and tutorials roots, relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root test directory.
    #[serde(default = "PathsConfig::default_tests")]
    pub tests: String,

    /// Tutorials directory copied before notebook execution.
    #[serde(default = "PathsConfig::default_tutorials")]
    pub tutorials: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tests: Self::default_tests(),
            tutorials: Self::default_tutorials(),
        }
    }
}

impl PathsConfig {
    fn default_tests() -> String {
        "test".to_string()
    }

    fn default_tutorials() -> String {
        "tutorials".to_string()
    }
}

/// Programs the harness shells out to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// The pytest executable.
    #[serde(default = "RunnerConfig::default_pytest")]
    pub pytest: String,

    /// Interpreter used for import probes and the coverage tool.
    #[serde(default = "RunnerConfig::default_python")]
    pub python: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            pytest: Self::default_pytest(),
            python: Self::default_python(),
        }
    }
}

impl RunnerConfig {
    fn default_pytest() -> String {
        "pytest".to_string()
    }

    fn default_python() -> String {
        "python3".to_string()
    }
}

/// Parse a config file from disk.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// A located project: its root directory and parsed configuration.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Locate the project for an invocation.
    ///
    /// An explicit config path wins; otherwise discovery walks up from
    /// `cwd`. Without a config file the project is rooted at `cwd` with
    /// defaults.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => discovery::find_config(cwd),
        };

        match config_path {
            Some(path) => {
                let config = load(&path)?;
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                Ok(Self { root, config })
            }
            None => Ok(Self {
                root: cwd.to_path_buf(),
                config: Config::default(),
            }),
        }
    }

    /// Absolute-ish path to the root test directory.
    pub fn tests_root(&self) -> PathBuf {
        self.root.join(&self.config.paths.tests)
    }

    /// Absolute-ish path to the tutorials directory.
    pub fn tutorials_root(&self) -> PathBuf {
        self.root.join(&self.config.paths.tutorials)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
