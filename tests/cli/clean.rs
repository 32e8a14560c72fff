//! Tests for `heysops clean`.

use crate::support::*;

#[test]
fn test_clean_removes_plaintext() {
    let t = Test::with_files(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    t.write("a.txt", "updated");

    let output = t.clean();
    assert_success(&output);
    assert_stdout_contains(&output, "removed a.txt");

    assert!(!t.path("a.txt").exists());
    assert!(!t.path("b.txt").exists());
    assert_eq!(t.read("a.txt.sops"), "ENC:updated");
    assert_eq!(t.tracked(), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_clean_failure_keeps_plaintext() {
    let t = Test::with_files(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    t.write("b.txt", "FAIL");

    let output = t.clean();
    assert_failure(&output);
    assert!(t.path("a.txt").exists());
    assert!(t.path("b.txt").exists());
}

#[test]
fn test_clean_with_nothing_tracked() {
    let t = Test::init();
    let output = t.clean();
    assert_success(&output);
    assert_stdout_contains(&output, "no tracked files");
}
