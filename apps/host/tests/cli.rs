use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn host_builds_the_default_registry() {
    let mut cmd = Command::cargo_bin("bindery-host").expect("binary exists");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Package registry built"))
        .stdout(predicate::str::contains("Capability index ready"));
}
