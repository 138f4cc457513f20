//! End-to-end tests against stub backend executables.
//!
//! Each test builds a directory of fake `brew`/`mas`/`code`/`sw_vers`/`uname`
//! shell scripts, points the binary's PATH at it, and asserts on the lockfile
//! it writes (or refuses to write). Stubs only answer the exact queries the
//! engine is expected to issue; anything else exits non-zero, so an
//! over-eager adapter fails the test.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn write_stub(bin_dir: &Path, name: &str, script: &str) {
    let path = bin_dir.join(name);
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

/// Stubs for host introspection, needed by every successful run.
fn write_host_stubs(bin_dir: &Path) {
    write_stub(
        bin_dir,
        "sw_vers",
        r#"#!/bin/sh
case "$1" in
  -productVersion) echo "14.5" ;;
  -buildVersion) echo "23F79" ;;
  *) exit 1 ;;
esac
"#,
    );
    write_stub(
        bin_dir,
        "uname",
        r#"#!/bin/sh
echo "arm64"
"#,
    );
}

fn write_brew_stub(bin_dir: &Path) {
    write_stub(
        bin_dir,
        "brew",
        r#"#!/bin/sh
case "$*" in
  "tap-info --json x/y")
    printf '%s\n' '[{"name":"x/y","HEAD":"abc123"}]'
    ;;
  "info --json=v2 --installed")
    printf '%s\n' '{"formulae":[{"name":"git","full_name":"git","aliases":[],"tap":"homebrew/core","installed":[{"version":"2.44.0","time":100}]}]}'
    ;;
  "info --json=v2 --cask --installed")
    printf '%s\n' '{"casks":[{"token":"iterm2","tap":"homebrew/cask","version":"3.6.0","installed":["3.4.0","3.5.0"]}]}'
    ;;
  *)
    exit 1
    ;;
esac
"#,
    );
}

fn write_mas_stub(bin_dir: &Path) {
    write_stub(
        bin_dir,
        "mas",
        r#"#!/bin/sh
case "$1" in
  list) printf '%s\n' '12345  Example App  (1.2)' ;;
  *) exit 1 ;;
esac
"#,
    );
}

fn write_code_stub(bin_dir: &Path) {
    write_stub(
        bin_dir,
        "code",
        r#"#!/bin/sh
case "$*" in
  "--list-extensions --show-versions")
    printf '%s\n' 'rust-lang.rust-analyzer@0.3.1950'
    ;;
  *)
    exit 1
    ;;
esac
"#,
    );
}

/// Run `brewlock lock` inside `work` with PATH pointing at `bin_dir` only.
fn brewlock(work: &Path, bin_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("brewlock"));
    cmd.current_dir(work);
    cmd.env("PATH", bin_dir);
    cmd
}

fn read_lockfile(work: &Path) -> Value {
    let raw = fs::read_to_string(work.join("Brewfile.lock.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn full_run_locks_every_declared_kind() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);
    write_mas_stub(&bin_dir);
    write_code_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(
        work.join("Brewfile"),
        "tap \"x/y\"\nbrew \"git\"\ncask \"iterm2\"\nmas \"Example App\", id: 12345\nvscode \"rust-lang.rust-analyzer\"\n",
    )
    .unwrap();

    brewlock(&work, &bin_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Brewfile.lock.json"));

    let lock = read_lockfile(&work);

    assert_eq!(lock["system"]["macos"]["product"], "14.5");
    assert_eq!(lock["system"]["macos"]["build"], "23F79");
    assert_eq!(lock["system"]["architecture"], "arm64");
    assert!(lock["generated_at"].is_string());

    assert_eq!(lock["entries"]["tap"]["x/y"]["revision"], "abc123");
    assert_eq!(lock["entries"]["brew"]["git"]["version"], "2.44.0");
    assert_eq!(lock["entries"]["brew"]["git"]["tap"], "homebrew/core");
    // Most recent installed-version list entry wins over the nominal version.
    assert_eq!(lock["entries"]["cask"]["iterm2"]["version"], "3.5.0");
    assert_eq!(lock["entries"]["cask"]["iterm2"]["tap"], "homebrew/cask");
    assert_eq!(lock["entries"]["mas"]["Example App"]["id"], "12345");
    assert_eq!(lock["entries"]["mas"]["Example App"]["version"], "1.2");
    assert_eq!(
        lock["entries"]["vscode"]["rust-lang.rust-analyzer"]["version"],
        "0.3.1950"
    );
}

#[test]
fn unresolved_formula_fails_and_preserves_existing_lockfile() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "brew \"nonexistent-formula\"\n").unwrap();
    fs::write(work.join("Brewfile.lock.json"), "{\"sentinel\": true}\n").unwrap();

    brewlock(&work, &bin_dir).assert().failure().stderr(
        predicate::str::contains("Missing formula info for: nonexistent-formula"),
    );

    // The previous lockfile is untouched.
    let existing = fs::read_to_string(work.join("Brewfile.lock.json")).unwrap();
    assert_eq!(existing, "{\"sentinel\": true}\n");
}

#[test]
fn failed_run_writes_no_lockfile() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    // The cask backend knows nothing about this token.
    fs::write(work.join("Brewfile"), "cask \"ghost-cask\"\n").unwrap();

    brewlock(&work, &bin_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing cask info for: ghost-cask"));
    assert!(!work.join("Brewfile.lock.json").exists());
}

#[test]
fn undeclared_kinds_are_never_queried() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    // No mas or code stubs: querying either would fail the run.
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "tap \"x/y\"\nbrew \"git\"\ncask \"iterm2\"\n").unwrap();

    brewlock(&work, &bin_dir).assert().success();

    let lock = read_lockfile(&work);
    assert_eq!(lock["entries"]["mas"], serde_json::json!({}));
    assert_eq!(lock["entries"]["vscode"], serde_json::json!({}));
}

#[test]
fn empty_manifest_locks_empty_entries_without_backends() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    // Only host stubs exist; no backend may be touched.
    write_host_stubs(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "# nothing declared\n").unwrap();

    brewlock(&work, &bin_dir).assert().success();

    let lock = read_lockfile(&work);
    for kind in ["tap", "brew", "cask", "mas", "vscode"] {
        assert_eq!(lock["entries"][kind], serde_json::json!({}), "kind {kind}");
    }
}

#[test]
fn unrecognized_manifest_lines_are_ignored_not_fatal() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(
        work.join("Brewfile"),
        "cask_args appdir: \"/Applications\"\nbrew \"git\"\nwhalebrew \"whalebrew/wget\"\n",
    )
    .unwrap();

    brewlock(&work, &bin_dir).assert().success();

    let lock = read_lockfile(&work);
    assert_eq!(lock["entries"]["brew"]["git"]["version"], "2.44.0");
    assert_eq!(lock["entries"]["brew"].as_object().unwrap().len(), 1);
}

#[test]
fn repeated_runs_differ_only_in_generated_at() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "tap \"x/y\"\nbrew \"git\"\n").unwrap();

    brewlock(&work, &bin_dir).assert().success();
    let mut first = read_lockfile(&work);

    brewlock(&work, &bin_dir).assert().success();
    let mut second = read_lockfile(&work);

    first.as_object_mut().unwrap().remove("generated_at");
    second.as_object_mut().unwrap().remove("generated_at");
    assert_eq!(first, second);
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_brew_stub(&bin_dir);

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "brew \"git\"\n").unwrap();

    let mut cmd = brewlock(&work, &bin_dir);
    cmd.arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn broken_backend_output_is_a_query_failure() {
    let temp = TempDir::new().unwrap();
    let bin_dir = temp.path().join("bin");
    fs::create_dir(&bin_dir).unwrap();
    write_host_stubs(&bin_dir);
    write_stub(
        &bin_dir,
        "brew",
        r#"#!/bin/sh
printf '%s\n' 'this is not json'
"#,
    );

    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("Brewfile"), "brew \"git\"\n").unwrap();

    brewlock(&work, &bin_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed response"));
    assert!(!work.join("Brewfile.lock.json").exists());
}
