//! Process-level tests for the `fib` binary
//!
//! Spawn the real executable, feed stdin, and check stdout, stderr and
//! the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn fib_with_args(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn fib");

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).ok();

    child.wait_with_output().unwrap()
}

fn fib(stdin: &str) -> Output {
    fib_with_args(&[], stdin)
}

#[test]
fn test_prints_fibonacci_number() {
    for (input, expected) in [("10\n", "55\n"), ("0\n", "0\n"), ("1\n", "1\n")] {
        let output = fib(input);
        assert!(output.status.success(), "input {:?}", input);
        assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn test_input_without_newline() {
    let output = fib("20");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "6765\n");
}

#[test]
fn test_non_integer_input_fails() {
    let output = fib("abc\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was: {}", stderr);
    assert!(stderr.contains("abc"));
}

#[test]
fn test_empty_input_fails() {
    let output = fib("");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no input"));
}

#[test]
fn test_overflowing_index_fails() {
    let output = fib("100\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Error: fib(100) overflows a 64-bit integer")
    );
}

#[test]
fn test_prompt_flag() {
    let output = fib_with_args(&["--prompt", "Enter the position-> "], "7\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Enter the position-> \n13\n"
    );
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.toml");
    std::fs::write(&path, "prompt = \"n?\"\nmax_index = 5\n").unwrap();
    let path = path.to_str().unwrap();

    let output = fib_with_args(&["--config", path], "5\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "n?\n5\n");

    let output = fib_with_args(&["--config", path], "6\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Error: index 6 is above the configured limit 5")
    );

    // The flag wins over the file
    let output = fib_with_args(&["--config", path, "--prompt", "index:"], "3\n");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "index:\n2\n");
}

#[test]
fn test_bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.toml");
    std::fs::write(&path, "not toml at all = = =\n").unwrap();

    let output = fib_with_args(&["--config", path.to_str().unwrap()], "3\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = fib_with_args(&["--verbose"], "10\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "55\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("computed"));
}

#[test]
fn test_completions() {
    let output = fib_with_args(&["completions", "bash"], "");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fib"));
}
