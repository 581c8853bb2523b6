//! Test helpers for behavioral specifications.
//!
//! Provides a scratch-project DSL plus stand-in pytest/python scripts
//! whose exit codes and argv recordings drive the specs.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)] // helpers are shared unevenly across spec modules

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the sluice binary
pub fn sluice_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sluice"))
}

/// A scratch project in a temporary directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project. The `.git` marker pins config discovery inside
    /// the temporary directory.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with a `test/` directory and a stand-in pytest that
    /// exits with `code`.
    pub fn with_pytest(code: i32) -> Self {
        let project = Self::empty();
        project.dir("test");
        let pytest = project.fake_tool("pytest", &format!("exit {code}"));
        project.config(&format!("[runner]\npytest = '{}'\n", pytest.display()));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write sluice.toml at the project root.
    pub fn config(&self, contents: &str) {
        std::fs::write(self.path().join("sluice.toml"), contents).unwrap();
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Create a directory, with parents.
    pub fn dir(&self, rel: &str) {
        std::fs::create_dir_all(self.path().join(rel)).unwrap();
    }

    /// Write an executable stand-in tool. Every invocation appends its
    /// argv to `<name>-args.txt` before `body` runs.
    pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
        let log = self.path().join(format!("{name}-args.txt"));
        let path = self.path().join(name);
        std::fs::write(
            &path,
            format!("#!/bin/sh\necho \"$@\" >> '{}'\n{body}\n", log.display()),
        )
        .unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// Recorded argv lines for a stand-in tool, one line per call.
    pub fn recorded(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(format!("{name}-args.txt"))).unwrap_or_default()
    }

    /// True if the stand-in tool was invoked at least once.
    pub fn was_invoked(&self, name: &str) -> bool {
        self.path().join(format!("{name}-args.txt")).exists()
    }

    /// Returns the sluice command with cwd set to the project root.
    pub fn cmd(&self) -> Command {
        let mut cmd = sluice_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

/// Stand-in python body: import probes and coverage bookkeeping
/// succeed; a run under coverage exits with `pytest_code`.
pub fn python_body(pytest_code: i32) -> String {
    format!(
        r#"case "$*" in
  -c*) exit 0 ;;
  "-m coverage run"*) exit {pytest_code} ;;
  "-m coverage"*) exit 0 ;;
  *) exit 0 ;;
esac"#
    )
}

/// Stand-in python body where importing `module` fails the way CPython
/// reports it; everything else succeeds.
pub fn python_body_missing(module: &str) -> String {
    format!(
        r#"case "$*" in
  "-c import {module}") echo "ModuleNotFoundError: No module named '{module}'" >&2; exit 1 ;;
  *) exit 0 ;;
esac"#
    )
}
