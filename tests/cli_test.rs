//! End-to-end tests for the `wordlist-generator` binary

use std::fs::{self, File};
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::tempdir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordlist-generator"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_exits_successfully() {
    let output = bin().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("~/.wordlist-generator"));
}

#[test]
fn test_existing_file_fails_without_modification() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("053-XXX-XXXX.txt");
    {
        let mut f = File::create(&path).unwrap();
        f.write_all(b"do not touch\n").unwrap();
    }

    let output = bin()
        .args(["--prefix", "053", "--output"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert_eq!(fs::read(&path).unwrap(), b"do not touch\n");
}

#[test]
fn test_invalid_prefix_from_stdin() {
    let dir = tempdir().unwrap();
    let mut child = bin()
        .arg("--output")
        .arg(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"bad:prefix\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter prefix: "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid character"), "stderr: {}", stderr);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_overlong_prefix_flag() {
    let dir = tempdir().unwrap();
    let output = bin()
        .args(["--prefix", &"a".repeat(51), "--output"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too long"), "stderr: {}", stderr);
}

#[test]
fn test_bad_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("wordlist.toml");
    fs::write(&config, "[generation\n").unwrap();

    let output = bin()
        .args(["--prefix", "x", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TOML"), "stderr: {}", stderr);
}
