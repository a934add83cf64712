use assert_cmd::Command;
use harlog_cli::commands::redirects::collect_redirects;
use harlog_cli::reader_options;
use predicates::prelude::*;
use std::path::PathBuf;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[allow(deprecated)]
fn get_harlog_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("harlog")
}

/// Test that only entries with a redirect are listed, already resolved
#[test]
fn test_collect_redirects_lists_resolved_targets() {
    // Act
    let rows = collect_redirects(&fixture_path("sample.har"), &reader_options(false, false)).unwrap();

    // Assert
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].status, 301);
    assert_eq!(rows[0].redirect_url, "http://example.com:8080/new/path");
    assert_eq!(rows[1].index, 1);
    assert_eq!(rows[1].redirect_url, "https://other.example/target");
}

/// Test that the legacy flag prefixes the request authority
#[test]
fn test_collect_redirects_legacy_protocol_relative() {
    // Act
    let rows = collect_redirects(&fixture_path("sparse.har"), &reader_options(true, false)).unwrap();

    // Assert
    assert_eq!(
        rows[0].redirect_url,
        "https://api.example.com//accounts.example.com/welcome"
    );
}

/// Test the redirects command with JSON output
#[test]
fn test_redirects_command_json_output() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("redirects")
        .arg(fixture_path("sample.har"))
        .arg("--format")
        .arg("json");

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "\"redirect_url\": \"http://example.com:8080/new/path\"",
        ))
        .stdout(predicate::str::contains("\"status\": 301"));
}

/// Test the redirects command with pretty output
#[test]
fn test_redirects_command_pretty_output() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("redirects").arg(fixture_path("sparse.har"));

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://accounts.example.com/welcome"))
        .stdout(predicate::str::contains(
            "https://api.example.com:9443/v2/me?fields=id%2Cname",
        ));
}

/// Test that a malformed HAR makes the command fail
#[test]
fn test_redirects_command_reports_schema_error() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("redirects").arg(fixture_path("missing-request.har"));

    // Act & Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse HAR content"));
}

/// Test that a missing file makes the command fail
#[test]
fn test_stats_command_missing_file() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("stats").arg("/nonexistent/path.har");

    // Act & Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read HAR file"));
}

/// Test the stats command with JSON output and hosts
#[test]
fn test_stats_command_json_output() {
    // Arrange
    let mut cmd = Command::new(get_harlog_bin());
    cmd.arg("--format")
        .arg("json")
        .arg("stats")
        .arg(fixture_path("sample.har"))
        .arg("--hosts");

    // Act & Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_entries\": 3"))
        .stdout(predicate::str::contains("\"authority\": \"http://example.com:8080\""));
}
