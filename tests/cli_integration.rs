//! Integration tests for the rig binary.
//!
//! These tests run the real executable against temporary project
//! directories. Builds use `RIG_WEBPACK` to stand in a trivial program for
//! webpack.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get a command for running rig in `dir`.
fn rig(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rig").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RIG_LOG")
        .env_remove("RIG_WEBPACK");
    cmd
}

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    dir.child("rig.config.toml").write_str(config).unwrap();
    dir
}

// =============================================================================
// Meta commands
// =============================================================================

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "v{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn version_beats_unknown_command() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .args(["deploy", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("v"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn help_command_lists_commands() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: rig (run|build|serve) [options]",
        ))
        .stdout(predicate::str::contains("rig run <entry> [options]"))
        .stdout(predicate::str::contains(
            "rig build [entry] [dist_dir] [options]",
        ))
        .stdout(predicate::str::contains("rig serve [entry] [options]"));
}

#[test]
fn help_flag_succeeds() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rig"));
}

#[test]
fn bare_invocation_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: rig"));
}

#[test]
fn unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .arg("deploy")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("rig: unknown command: deploy\n");
}

// =============================================================================
// Configuration errors
// =============================================================================

#[test]
fn serve_without_config_is_user_error() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .arg("serve")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "rig: couldn't find a config file",
        ))
        .stderr(predicate::str::contains("error running command").not());
}

#[test]
fn unknown_type_is_user_error() {
    let dir = project("type = \"vue-app\"\n");
    rig(&dir)
        .arg("build")
        .assert()
        .code(1)
        .stderr("rig: unable to build anything in the current directory\n");
}

#[test]
fn invalid_config_is_user_error() {
    let dir = project("type = \"react-app\"\n[dev_server]\nport = 0\n");
    rig(&dir)
        .arg("serve")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("rig: "))
        .stderr(predicate::str::contains("error running command").not());
}

#[test]
fn config_flag_without_path_is_user_error() {
    let dir = project("type = \"react-app\"\n");
    rig(&dir)
        .args(["serve", "-c"])
        .assert()
        .code(1)
        .stderr("rig: --config requires a value\n");
}

#[test]
fn repeated_and_clustered_globals_still_answer_version() {
    let dir = TempDir::new().unwrap();
    for args in [&["-v", "-v"][..], &["-vc"], &["-c", "--version"]] {
        rig(&dir)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("v"));
    }
}

#[test]
fn run_requires_entry() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .arg("run")
        .assert()
        .code(1)
        .stderr("rig: an entry module must be specified\n");
}

// =============================================================================
// Bundler delegation
// =============================================================================

#[test]
fn missing_bundler_is_user_error() {
    let dir = project("type = \"web-app\"\n");
    rig(&dir)
        .env("RIG_WEBPACK", "rig-test-no-such-bundler")
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "could not run 'rig-test-no-such-bundler', is it installed?",
        ));
}

#[cfg(unix)]
#[test]
fn build_succeeds_when_bundler_succeeds() {
    let dir = project("type = \"react-app\"\n");
    rig(&dir)
        .env("RIG_WEBPACK", "true")
        .args(["build", "src/index.js", "public", "--vendor"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn build_fails_when_bundler_fails() {
    let dir = project("type = \"react-component\"\n");
    rig(&dir)
        .env("RIG_WEBPACK", "false")
        .arg("build")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'false' exited with"));
}

#[cfg(unix)]
#[test]
fn run_works_without_config() {
    let dir = TempDir::new().unwrap();
    rig(&dir)
        .env("RIG_WEBPACK", "true")
        .args(["run", "app.js", "--port", "4000"])
        .assert()
        .success();
}
