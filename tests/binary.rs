//! Runs the built `haydn` binary to check exit codes and what lands on stderr.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Project dir with both manifests, plus private `bin/` and `tmp/` dirs.
fn project(base: &str, modifier: &str) -> TempDir {
    let root = tempfile::tempdir().expect("tempdir should be created");
    for dir in ["bin", "tmp"] {
        fs::create_dir(root.path().join(dir)).unwrap();
    }
    fs::write(root.path().join("composer.json"), base).unwrap();
    fs::write(root.path().join("haydn.json"), modifier).unwrap();
    root
}

fn install_composer(root: &Path, body: &str) {
    let path = root.join("bin/composer");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn run_haydn(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_haydn"))
        .args(args)
        .current_dir(root)
        .env("PATH", root.join("bin"))
        .env("TMPDIR", root.join("tmp"))
        .env_remove("RUST_LOG")
        .output()
        .expect("haydn should start")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn failing_composer_output_passes_through_untouched() {
    let root = project(r#"{"require":{}}"#, "{}");
    install_composer(root.path(), "echo child-out\necho child-err >&2\nexit 1");

    let output = run_haydn(root.path(), &["validate"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "child-out\n");
    assert_eq!(stderr(&output), "child-err\n");
}

#[test]
fn leading_double_dash_reaches_composer() {
    let root = project("{}", "{}");
    install_composer(root.path(), "printf '%s|' \"$@\"");

    let output = run_haydn(root.path(), &["--", "x"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "--|x|");
}

#[test]
fn malformed_modifier_exits_102_with_one_line() {
    let root = project(r#"{"require":{}}"#, r#"{"override-require": ]}"#);
    install_composer(root.path(), "echo should-not-run");

    let output = run_haydn(root.path(), &["install"]);

    assert_eq!(output.status.code(), Some(102));
    assert_eq!(stderr(&output), "JSON error in haydn.json: syntax error\n");
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_composer_exits_103_with_one_line() {
    let root = project("{}", "{}");

    let output = run_haydn(root.path(), &[]);

    assert_eq!(output.status.code(), Some(103));
    assert_eq!(
        stderr(&output),
        "Unable to determine composer command, tried [composer, composer.phar]\n"
    );
}

#[test]
fn missing_base_manifest_exits_101() {
    let root = project("{}", "{}");
    fs::remove_file(root.path().join("composer.json")).unwrap();

    let output = run_haydn(root.path(), &[]);

    assert_eq!(output.status.code(), Some(101));
    assert_eq!(stderr(&output), "File composer.json cannot be read\n");
}
