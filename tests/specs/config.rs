//! Behavioral specs for config loading and discovery.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > [paths] tests relocates the test root
#[test]
fn custom_tests_path_is_respected() {
    let project = Project::empty();
    project.dir("checks");
    let pytest = project.fake_tool("pytest", "exit 0");
    project.config(&format!(
        "[paths]\ntests = 'checks'\n\n[runner]\npytest = '{}'\n",
        pytest.display()
    ));

    project.cmd().arg("tests").assert().success();
    let expected = format!("{} -x -s\n", project.path().join("checks").display());
    assert_eq!(project.recorded("pytest"), expected);
}

/// > Discovery walks up from the working directory to the config file,
/// > and paths stay rooted at the config file's directory
#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::with_pytest(0);
    project.dir("sub/deeper");

    let mut cmd = sluice_cmd();
    cmd.current_dir(project.path().join("sub/deeper"));
    cmd.arg("tests").assert().success();

    let expected = format!("{} -x -s\n", project.path().join("test").display());
    assert_eq!(project.recorded("pytest"), expected);
}

/// > -C points at an explicit config file
#[test]
fn explicit_config_flag_wins() {
    let project = Project::empty();
    project.dir("conf");
    project.dir("test");
    let pytest = project.fake_tool("pytest", "exit 0");
    project.file(
        "conf/alt.toml",
        &format!("[paths]\ntests = '../test'\n\n[runner]\npytest = '{}'\n", pytest.display()),
    );

    project
        .cmd()
        .args(["tests", "-C", "conf/alt.toml"])
        .assert()
        .success();
    assert!(project.was_invoked("pytest"));
}

/// > Without a config file the defaults apply, so a project without a
/// > test directory fails directory resolution
#[test]
fn defaults_apply_without_config_file() {
    let project = Project::empty();
    project
        .cmd()
        .arg("tests")
        .assert()
        .failure()
        .stderr(predicates::str::contains("is not a directory"));
}

/// > Malformed config is a fatal parse error naming the file
#[test]
fn malformed_config_is_fatal() {
    let project = Project::empty();
    project.config("[paths\ntests = 1");
    project
        .cmd()
        .arg("tests")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to parse"));
}
