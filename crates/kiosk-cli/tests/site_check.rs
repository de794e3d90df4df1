use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

const VALID_SITE: &str = r#"
[header]
title = "Marble & Stone"
tagline = "Custom countertops"

[[gallery]]
image = "photos/kitchen.jpg"
title = "Kitchen island"

[[gallery]]
image = "photos/bath.jpg"

[[services]]
name = "Countertops"
image = "photos/counter.jpg"
description = "Granite and quartz surfaces."
alt = "polished countertop"

[contact]
action = "https://formspree.io/f/abc123"
"#;

#[test]
fn test_check_accepts_valid_site() {
    let dir = tempdir().unwrap();
    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, VALID_SITE).unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .args(["check", site_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"))
        .stdout(predicate::str::contains("Marble & Stone"))
        .stdout(predicate::str::contains("gallery:  2 item(s)"))
        .stdout(predicate::str::contains("https://formspree.io/f/abc123"));
}

#[test]
fn test_check_uses_default_site_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("site.toml"), VALID_SITE).unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"));
}

#[test]
fn test_check_warns_on_missing_images() {
    let dir = tempdir().unwrap();
    let site_path = dir.path().join("site.toml");
    fs::write(&site_path, VALID_SITE).unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .args(["check", site_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: missing image"));
}

#[test]
fn test_check_rejects_invalid_action_url() {
    let dir = tempdir().unwrap();
    let site_path = dir.path().join("site.toml");
    let bad = VALID_SITE.replace("https://formspree.io/f/abc123", "not a url");
    fs::write(&site_path, bad).unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .args(["check", site_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("action"));
}

#[test]
fn test_check_rejects_missing_file() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .args(["check", "/nonexistent/site.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("site.toml"));
}

#[test]
fn test_viewer_refuses_without_a_terminal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("site.toml"), VALID_SITE).unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
