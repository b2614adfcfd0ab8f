//! Tests for CryptGet.

#![cfg(unix)]

use crate::support::*;
use std::fs;

#[test]
fn test_get_opens_window_without_suffix() {
    let t = Test::with_fake_gpg();
    t.acme.prepare_new(7);
    fs::write(t.path("notes.gpg"), armored("meet at noon\n")).unwrap();

    let output = t.get().arg("notes.gpg").output().unwrap();
    assert_success(&output);

    let name = t.path("notes");
    assert_eq!(t.acme.read("7/ctl"), format!("name {}\n", name.display()));
    assert_eq!(t.acme.read("7/tag"), " CryptPut");
    assert_eq!(t.acme.read("7/body"), "meet at noon\n");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_get_accepts_absolute_path_and_other_suffixes() {
    let t = Test::with_fake_gpg();
    t.acme.prepare_new(3);
    let file = t.path("Letter.ASC");
    fs::write(&file, armored("dear glenda")).unwrap();

    let output = t.get().arg(&file).output().unwrap();
    assert_success(&output);

    assert_eq!(
        t.acme.read("3/ctl"),
        format!("name {}\n", t.path("Letter").display())
    );
    assert_eq!(t.acme.read("3/body"), "dear glenda");
}

#[test]
fn test_get_missing_file() {
    let t = Test::with_fake_gpg();
    t.acme.prepare_new(7);

    let output = t.get().arg("nope.gpg").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "file does not exist");
    assert_stderr_contains(&output, "nope.gpg");
    assert_eq!(t.acme.read("7/ctl"), "");
}

#[test]
fn test_get_decrypt_failure_creates_no_window() {
    let t = Test::with_fake_gpg();
    t.acme.prepare_new(7);
    fs::write(t.path("notes.gpg"), armored("x")).unwrap();

    let output = t
        .get()
        .arg("notes.gpg")
        .env("FAKE_GPG_FAIL", "decryption failed: no secret key")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "no secret key");
    assert_eq!(t.acme.read("7/ctl"), "");
    assert_eq!(t.acme.read("7/body"), "");
    assert!(!t.path("notes").exists());
}

#[test]
fn test_get_deletes_window_when_tag_write_fails() {
    let t = Test::with_fake_gpg();
    t.acme.prepare_new(7);
    t.acme.break_file("7/tag");
    fs::write(t.path("notes.gpg"), armored("secret")).unwrap();

    let output = t.get().arg("notes.gpg").output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to append CryptPut to tag");
    assert!(t.acme.read("7/ctl").ends_with("delete\n"));
    assert_eq!(t.acme.read("7/body"), "");
}

#[test]
fn test_get_without_acme() {
    let t = Test::with_fake_gpg();
    fs::write(t.path("notes.gpg"), armored("x")).unwrap();

    let output = t.get().arg("notes.gpg").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to create acme window");
}

#[test]
fn test_get_unsupported_backend() {
    let t = Test::with_fake_gpg();
    fs::write(t.path("notes.gpg"), armored("x")).unwrap();

    let output = t
        .get()
        .arg("notes.gpg")
        .env("ACME_CRYPT_BACKEND", "rot13")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unsupported backend: rot13");
}

#[test]
fn test_get_requires_recipient() {
    let t = Test::with_fake_gpg();
    fs::write(t.path("notes.gpg"), armored("x")).unwrap();

    let output = t
        .get()
        .arg("notes.gpg")
        .env_remove("ACME_CRYPT_RCPT")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "ACME_CRYPT_RCPT environment variable not set");
    assert_stderr_contains(&output, "→ export ACME_CRYPT_RCPT");
}

#[test]
fn test_get_missing_gpg_program() {
    let t = Test::new();
    fs::write(t.path("notes.gpg"), armored("x")).unwrap();

    let output = t.get().arg("notes.gpg").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not found in PATH");
}
