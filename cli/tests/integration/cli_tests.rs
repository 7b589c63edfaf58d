//! Integration tests for argument parsing and configuration handling.

#![allow(clippy::expect_used)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `css-doctor` command isolated from the real home directory.
fn css_doctor(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("css-doctor"));
    cmd.env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env_remove("CSS_DOCTOR_CONFIG")
        .env_remove("CSS_DOCTOR_LOG");
    cmd
}

#[test]
fn test_cli_help_flag_shows_help() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("diagnose"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("css-doctor 0.1.0"));
}

#[test]
fn test_cli_unknown_subcommand_fails() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_config_path_defaults_to_home() {
    let home = TempDir::new().expect("tempdir");
    let expected = home.path().join(".css-doctor").join("config.yaml");
    css_doctor(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_path_honours_flag() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("doctor.yaml");
    fs::write(&file, "root: /srv/shop\n").expect("write");

    css_doctor(&home)
        .args(["config", "path", "--config"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(file.display().to_string()));
}

#[test]
fn test_config_path_honours_env() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("from-env.yaml");
    fs::write(&file, "root: /srv/shop\n").expect("write");

    css_doctor(&home)
        .env("CSS_DOCTOR_CONFIG", &file)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.yaml"));
}

#[test]
fn test_config_show_without_file_prints_defaults() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found, defaults)"))
        .stdout(predicate::str::contains("/home/deptrujillob2c/public_html"))
        .stdout(predicate::str::contains(
            "/home/deptrujillob2c/public_html/pub/static/frontend/Olegnax/athlete2/*/en_US/css/styles-*.css",
        ));
}

#[test]
fn test_config_show_reflects_file_overrides() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("doctor.yaml");
    fs::write(
        &file,
        "root: /srv/shop\ntheme:\n  vendor: Acme\n  name: sport\n  locale: es_CO\n",
    )
    .expect("write");

    css_doctor(&home)
        .args(["--config"])
        .arg(&file)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/srv/shop/app/design/frontend/Acme/sport/web/css",
        ))
        .stdout(predicate::str::contains(
            "/srv/shop/pub/static/frontend/Acme/sport/*/es_CO/css/styles-*.css",
        ));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .args(["--config", "/nonexistent/css-doctor.yaml", "config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/css-doctor.yaml"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("broken.yaml");
    fs::write(&file, "root: [unterminated\n").expect("write");

    css_doctor(&home)
        .arg("--config")
        .arg(&file)
        .arg("diagnose")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_invalid_config_values_are_rejected() {
    let home = TempDir::new().expect("tempdir");
    let file = home.path().join("relative.yaml");
    fs::write(&file, "root: public_html\n").expect("write");

    css_doctor(&home)
        .arg("--config")
        .arg(&file)
        .arg("diagnose")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"))
        .stderr(predicate::str::contains("absolute path"));
}

// --- Colour flags ---

/// Config rooted in the temp home so `diagnose` never touches a real storefront.
fn isolated_config(home: &TempDir) -> std::path::PathBuf {
    let file = home.path().join("doctor.yaml");
    fs::write(
        &file,
        format!(
            "root: {}\ncompiler:\n  program: /nonexistent/lessc\nstatus_command:\n  program: /nonexistent/php\n",
            home.path().display()
        ),
    )
    .expect("write");
    file
}

#[test]
fn test_no_color_env_set_to_one_runs_diagnosis_without_ansi() {
    let home = TempDir::new().expect("tempdir");
    let config = isolated_config(&home);
    css_doctor(&home)
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("diagnose")
        .assert()
        .success()
        .stdout(predicate::str::contains("DIAGNOSIS COMPLETE"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_no_color_env_set_but_empty_is_accepted() {
    let home = TempDir::new().expect("tempdir");
    css_doctor(&home)
        .env("NO_COLOR", "")
        .args(["config", "path"])
        .assert()
        .success();
}

#[test]
fn test_no_color_flag_runs_diagnosis_without_ansi() {
    let home = TempDir::new().expect("tempdir");
    let config = isolated_config(&home);
    css_doctor(&home)
        .env_remove("NO_COLOR")
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 5: Proposed Fix"))
        .stdout(predicate::str::contains("\x1b[").not());
}
