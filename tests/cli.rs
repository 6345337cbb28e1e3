use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// The binary, isolated from the user's own configuration.
fn precis(home: &tempfile::TempDir) -> Command {
    let mut command = Command::cargo_bin("precis").unwrap();
    command
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("PRECIS_LENGTH")
        .env_remove("PRECIS_ELLIPSIS")
        .env_remove("PRECIS_INPUT_LIMIT")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn truncates_stdin() {
    let home = tempfile::tempdir().unwrap();
    precis(&home)
        .args(["-n", "5"])
        .write_stdin("<p>Hello world</p>")
        .assert()
        .success()
        .stdout("<p>Hello...</p>\n");
}

#[test]
fn truncates_file() {
    let home = tempfile::tempdir().unwrap();
    let mut input = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
    input.write_all(b"<div><p>One</p><p>Two</p></div>").unwrap();
    precis(&home)
        .arg(input.path())
        .args(["--length", "3"])
        .assert()
        .success()
        .stdout("<div><p>One...</p></div>\n");
}

#[test]
fn reads_config_file() {
    let home = tempfile::tempdir().unwrap();
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    config.write_all("length = 5\nellipsis = \"…\"\n".as_bytes()).unwrap();
    precis(&home)
        .arg("--config")
        .arg(config.path())
        .write_stdin("<p>Hello world</p>")
        .assert()
        .success()
        .stdout("<p>Hello…</p>\n");
}

#[test]
fn environment_sets_length() {
    let home = tempfile::tempdir().unwrap();
    precis(&home)
        .env("PRECIS_LENGTH", "2")
        .write_stdin("<p>Hi</p><p>there</p>")
        .assert()
        .success()
        .stdout("<p>Hi...</p>\n");
}

#[test]
fn invalid_ellipsis_fails() {
    let home = tempfile::tempdir().unwrap();
    precis(&home)
        .args(["--ellipsis", "<b>"])
        .write_stdin("<p>Hello world</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn missing_input_file_fails() {
    let home = tempfile::tempdir().unwrap();
    precis(&home)
        .arg(home.path().join("missing.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
