use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_harlog_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("harlog")
}

/// Test that bash completions are generated for harlog
#[test]
fn test_completion_bash_generates_script() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_harlog()"))
        .stdout(predicate::str::contains("complete -F _harlog"));
}

/// Test that zsh completions are generated for harlog
#[test]
fn test_completion_zsh_generates_script() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("completion").arg("--shell").arg("zsh");

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef harlog"));
}

/// Test that the completion command needs a shell
#[test]
fn test_completion_requires_shell() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("completion");

    // Act & Assert
    cmd.assert().failure();
}
