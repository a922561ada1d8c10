//! Integration tests driving the invidx binary end to end.
//!
//! Documents come from `tests/fixtures/animals`, indexed relative to
//! `tests/fixtures` so the stored paths are stable:
//!
//! - `animals/a.txt`     - fox, dog (and other words)
//! - `animals/b.txt`     - fox, cat
//! - `animals/den/c.txt` - dog x3, cat

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Run invidx from the fixtures directory, feeding `stdin`.
///
/// A config path inside `scratch` that never exists keeps the user's own
/// configuration out of the tests.
fn run_invidx(args: &[&str], scratch: &Path, stdin: &str) -> (String, String, bool) {
    let config = scratch.join("no-config.json");
    let mut child = Command::new(env!("CARGO_BIN_EXE_invidx"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .current_dir(fixtures_dir())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run invidx");

    // The child may exit before reading everything (e.g. a bad index)
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    let output = child.wait_with_output().expect("Failed to wait for invidx");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Index the animals fixture into a fresh scratch directory
fn indexed() -> (TempDir, PathBuf) {
    let scratch = TempDir::new().unwrap();
    let out = scratch.path().join("animals.idx");
    let (_, stderr, ok) = run_invidx(
        &["index", out.to_str().unwrap(), "animals", "--quiet"],
        scratch.path(),
        "",
    );
    assert!(ok, "index should succeed: {stderr}");
    (scratch, out)
}

#[test]
fn test_index_file_layout() {
    let (_scratch, out) = indexed();
    let text = fs::read_to_string(&out).unwrap();

    assert!(text.starts_with("<list> brown\nanimals/a.txt 1\n</list>\n"));
    assert!(text.contains("<list> cat\nanimals/b.txt 1 animals/den/c.txt 1\n</list>\n"));
    // Most-referenced document first
    assert!(text.contains("<list> dog\nanimals/den/c.txt 3 animals/a.txt 1\n</list>\n"));
    assert!(text.contains("<list> the\nanimals/a.txt 2\n</list>\n"));
    assert!(text.ends_with("</list>\n"));
}

#[test]
fn test_legacy_order_keeps_first_seen() {
    let scratch = TempDir::new().unwrap();
    let out = scratch.path().join("legacy.idx");
    let (_, _, ok) = run_invidx(
        &["index", out.to_str().unwrap(), "animals", "--quiet", "--legacy-order"],
        scratch.path(),
        "",
    );
    assert!(ok);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("<list> dog\nanimals/a.txt 1 animals/den/c.txt 3\n</list>\n"));
}

#[test]
fn test_search_session() {
    let (scratch, out) = indexed();
    let (stdout, stderr, ok) = run_invidx(
        &["search", out.to_str().unwrap(), "--color", "never"],
        scratch.path(),
        "so dog fox\nsa fox dog\nsa cat dog\nSA FOX CAT\nsa fox zebra\nfind fox\nq\nso fox\n",
    );

    assert!(ok, "search should succeed: {stderr}");
    assert_eq!(
        stdout,
        "[animals/den/c.txt], [animals/a.txt], [animals/b.txt]\n\
         [animals/a.txt]\n\
         [animals/den/c.txt]\n\
         [animals/b.txt]\n\
         \n\
         \n"
    );
    assert_eq!(stderr.matches("Error: Invalid command.").count(), 1);
}

#[test]
fn test_search_case_sensitive() {
    let (scratch, out) = indexed();
    let (stdout, stderr, ok) = run_invidx(
        &["search", out.to_str().unwrap(), "--case-sensitive", "--color", "never"],
        scratch.path(),
        "so Fox\nSO fox\n",
    );

    assert!(ok);
    assert_eq!(stdout, "\n\n");
    assert!(stderr.contains("Error: Invalid command."));
}

#[test]
fn test_search_loads_handwritten_index() {
    let scratch = TempDir::new().unwrap();
    let (stdout, _, ok) = run_invidx(
        &["search", "sample.idx", "--color", "never"],
        scratch.path(),
        "so dog\nsa cat dog\n",
    );

    assert!(ok);
    assert_eq!(stdout, "[animals/den/c.txt], [animals/a.txt]\n[animals/den/c.txt]\n");
}

#[test]
fn test_rejects_same_input_and_output() {
    let scratch = TempDir::new().unwrap();
    let (_, stderr, ok) = run_invidx(&["index", "sample.idx", "sample.idx"], scratch.path(), "");

    assert!(!ok);
    assert!(stderr.contains("are the same"));
}

#[test]
fn test_missing_input_writes_nothing() {
    let scratch = TempDir::new().unwrap();
    let out = scratch.path().join("missing.idx");
    let (_, stderr, ok) = run_invidx(
        &["index", out.to_str().unwrap(), "no-such-dir", "--quiet"],
        scratch.path(),
        "",
    );

    assert!(!ok);
    assert!(stderr.contains("Could not index"));
    assert!(!out.exists(), "no index file should be created");
}

#[test]
fn test_existing_output_prompt() {
    let (scratch, out) = indexed();
    let before = fs::read_to_string(&out).unwrap();
    let out_arg = out.to_str().unwrap();

    // Cancel leaves the file alone and still exits successfully
    let (stdout, _, ok) = run_invidx(&["index", out_arg, "animals", "--quiet"], scratch.path(), "3\n");
    assert!(ok);
    assert!(stdout.contains("File already exists."));
    assert_eq!(fs::read_to_string(&out).unwrap(), before);

    // An unrecognized answer asks again
    let (stdout, _, ok) = run_invidx(&["index", out_arg, "animals", "--quiet"], scratch.path(), "x\n2\n");
    assert!(ok);
    assert_eq!(stdout.matches("File already exists.").count(), 2);
    assert_eq!(fs::read_to_string(&out).unwrap(), format!("{before}{before}"));

    // End of input cancels
    let (_, _, ok) = run_invidx(&["index", out_arg, "animals", "--quiet"], scratch.path(), "");
    assert!(ok);
    assert_eq!(fs::read_to_string(&out).unwrap(), format!("{before}{before}"));

    let (_, _, ok) = run_invidx(&["index", out_arg, "animals", "--quiet"], scratch.path(), "1\n");
    assert!(ok);
    assert_eq!(fs::read_to_string(&out).unwrap(), before);
}

#[test]
fn test_append_mode_still_loads() {
    let (scratch, out) = indexed();
    let out_arg = out.to_str().unwrap();
    let (_, _, ok) = run_invidx(
        &["index", out_arg, "animals", "--quiet", "--mode", "append"],
        scratch.path(),
        "",
    );
    assert!(ok);

    // Reopened entries overwrite counts instead of duplicating records
    let (stdout, _, ok) = run_invidx(&["search", out_arg, "--color", "never"], scratch.path(), "so cat\n");
    assert!(ok);
    assert_eq!(stdout, "[animals/b.txt], [animals/den/c.txt]\n");
}

#[test]
fn test_records_per_line() {
    let scratch = TempDir::new().unwrap();
    let out = scratch.path().join("narrow.idx");
    let (_, _, ok) = run_invidx(
        &["index", out.to_str().unwrap(), "animals", "--quiet", "--records-per-line", "1"],
        scratch.path(),
        "",
    );
    assert!(ok);

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("<list> cat\nanimals/b.txt 1\nanimals/den/c.txt 1\n</list>\n"));

    let (_, stderr, ok) = run_invidx(
        &["index", out.to_str().unwrap(), "animals", "--mode", "overwrite", "--records-per-line", "0"],
        scratch.path(),
        "",
    );
    assert!(!ok);
    assert!(stderr.contains("at least 1"));
}

#[test]
fn test_malformed_index_fails() {
    let scratch = TempDir::new().unwrap();
    let bad = scratch.path().join("bad.idx");
    fs::write(&bad, "animals/a.txt 1\n").unwrap();

    let (stdout, stderr, ok) = run_invidx(&["search", bad.to_str().unwrap()], scratch.path(), "so fox\n");
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("line 1"), "stderr was: {stderr}");
}

#[test]
fn test_config_file_applies() {
    let scratch = TempDir::new().unwrap();
    let config = scratch.path().join("config.json");
    fs::write(&config, r#"{ "record_order": "legacy", "records_per_line": 1 }"#).unwrap();
    let out = scratch.path().join("configured.idx");

    let output = Command::new(env!("CARGO_BIN_EXE_invidx"))
        .arg("--config")
        .arg(&config)
        .args(["index", out.to_str().unwrap(), "animals", "--quiet"])
        .current_dir(fixtures_dir())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run invidx");
    assert!(output.status.success());

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("<list> dog\nanimals/a.txt 1\nanimals/den/c.txt 3\n</list>\n"));
}
