//! Binary-level argument handling. These never touch the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_targets_is_a_usage_error() {
    Command::cargo_bin("netrecon")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_documents_the_flag_surface() {
    Command::cargo_bin("netrecon")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dns-server"))
        .stdout(predicate::str::contains("--shodan-key"))
        .stdout(predicate::str::contains("--secondary"));
}

#[test]
fn malformed_dns_server_is_rejected() {
    Command::cargo_bin("netrecon")
        .unwrap()
        .args(["-d", "not-an-ip", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
