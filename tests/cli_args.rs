use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_describes_the_viewer() {
    let mut cmd = cargo_bin_cmd!("docSpy");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scrollspy"))
        .stdout(predicate::str::contains("--theme"));
}

#[test]
fn version_prints_the_package_version() {
    let mut cmd = cargo_bin_cmd!("docSpy");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn a_missing_file_fails_before_the_tui_starts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let mut cmd = cargo_bin_cmd!("docSpy");
    cmd.arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading"));
}
