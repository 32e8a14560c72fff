//! Tests for `heysops encrypt`.

use crate::skip_if_ancestor_gitignore;
use crate::support::*;

#[test]
fn test_encrypt_tracks_and_ignores() {
    let t = Test::init();
    t.write("a.txt", "alpha");
    t.write("b.txt", "beta");

    let output = t.encrypt(&["a.txt", "b.txt"]);
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted a.txt → a.txt.sops");

    assert_eq!(t.read("a.txt.sops"), "ENC:alpha");
    assert_eq!(t.read("b.txt.sops"), "ENC:beta");
    assert_eq!(t.tracked(), vec!["a.txt", "b.txt"]);
    assert_eq!(t.gitignore(), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_encrypt_twice_keeps_one_entry_each() {
    let t = Test::init();
    t.write("a.txt", "alpha");
    t.write("b.txt", "beta");

    assert_success(&t.encrypt(&["a.txt", "b.txt"]));
    assert_success(&t.encrypt(&["a.txt", "b.txt"]));

    assert_eq!(t.tracked().len(), 2);
    assert_eq!(t.gitignore(), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_encrypt_preserves_gitignore_content() {
    let t = Test::init();
    t.write(".gitignore", EXISTING_GITIGNORE);
    t.write(".env", SAMPLE_ENV);

    assert_success(&t.encrypt(&[".env"]));

    let gitignore = t.read(".gitignore");
    assert!(gitignore.starts_with(EXISTING_GITIGNORE));
    assert!(gitignore.ends_with(".env\n"));
}

#[test]
fn test_encrypt_all_reencrypts_tracked() {
    let t = Test::with_files(&[("a.txt", "one"), ("b.txt", "two")]);
    t.write("a.txt", "uno");

    let output = t.encrypt(&["-"]);
    assert_success(&output);
    assert_eq!(t.read("a.txt.sops"), "ENC:uno");
    let calls = t.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with("encrypt ") && calls[0].ends_with("/a.txt"));
    assert!(calls[1].starts_with("encrypt ") && calls[1].ends_with("/b.txt"));
}

#[test]
fn test_encrypt_no_args_with_nothing_tracked() {
    let t = Test::init();
    let output = t.encrypt(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to encrypt");
    assert!(t.calls().is_empty());
}

#[test]
fn test_encrypt_missing_source_drops_entry() {
    let t = Test::with_files(&[("a.txt", "one"), ("b.txt", "two")]);
    std::fs::remove_file(t.path("a.txt")).unwrap();

    let output = t.encrypt(&[]);
    assert_success(&output);
    assert_stderr_contains(&output, "no longer present");
    assert_eq!(t.tracked(), vec!["b.txt"]);
    assert_eq!(t.calls().len(), 1);
}

#[test]
fn test_encrypt_with_type_and_output() {
    let t = Test::init();
    t.write("creds", SAMPLE_JSON);

    let output = t
        .cmd()
        .args(["encrypt", "-t", "json", "-o", "secrets/creds.enc", "creds"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.read("secrets/creds.enc").starts_with("ENC:"));
    let list = t.list_json();
    assert_eq!(list[0]["encrypted_path"], "secrets/creds.enc");
    assert_eq!(list[0]["type"], "json");
}

#[test]
fn test_encrypt_output_with_many_files_is_usage_error() {
    let t = Test::init();
    t.write("a.txt", "a");
    t.write("b.txt", "b");

    let output = t
        .cmd()
        .args(["encrypt", "-o", "x.sops", "a.txt", "b.txt"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--output can only be used with a single file");
    assert!(t.calls().is_empty());
}

#[test]
fn test_encrypt_failure_keeps_finished_entries() {
    let t = Test::init();
    t.write("a.txt", "fine");
    t.write("b.txt", "FAIL");

    let output = t.encrypt(&["a.txt", "b.txt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot process");
    assert_eq!(t.tracked(), vec!["a.txt"]);
}

#[test]
fn test_encrypt_from_subdirectory_uses_config_dir() {
    let t = Test::init();
    t.write("a.txt", "alpha");
    std::fs::create_dir(t.path("nested")).unwrap();

    let output = t
        .cmd()
        .current_dir(t.path("nested"))
        .args(["encrypt", "a.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("a.txt.sops"), "ENC:alpha");
}

#[test]
fn test_encrypt_creates_gitignore_next_to_config() {
    let t = Test::new();
    skip_if_ancestor_gitignore!(t.dir.path());
    assert_success(&t.init_cmd());
    t.write("a.txt", "alpha");

    let output = t.encrypt(&["a.txt"]);
    assert_success(&output);
    assert_stderr_contains(&output, ".gitignore not found");
    assert_eq!(t.gitignore(), vec!["a.txt"]);
    let config = t.read(".heysops.yaml");
    assert!(config.contains(".gitignore"));
    assert!(!config.contains("gitignore_path: null"));
}

#[test]
fn test_encrypt_warns_when_gitignore_is_elsewhere() {
    let t = Test::init();
    t.write("nested/.gitignore", "");
    t.write("a.txt", "alpha");

    let output = t
        .cmd()
        .current_dir(t.path("nested"))
        .args(["encrypt", "a.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "tracked paths are relative to");
    assert_eq!(t.read("nested/.gitignore"), "a.txt\n");
}
