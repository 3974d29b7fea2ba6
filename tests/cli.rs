//! End-to-end tests for the `tally` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_tally(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tally");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("write input");
    child.wait_with_output().expect("tally exits")
}

#[test]
fn test_stdout_holds_only_digits() {
    let output = run_tally(&[], b"hello");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"101");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_empty_input_prints_nothing() {
    let output = run_tally(&[], b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stats_go_to_stderr() {
    let output = run_tally(&["--stats"], b"hello");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"101");
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf-8");
    assert!(stderr.contains("count=5"), "{stderr}");
    assert!(stderr.contains("steps=36"), "{stderr}");
    assert!(stderr.contains("final_index=3"), "{stderr}");
}

#[test]
fn test_step_limit_fails_the_process() {
    let output = run_tally(&["--max-steps", "3"], b"hello");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr is utf-8");
    assert!(stderr.contains("did not halt within 3 steps"), "{stderr}");
}

#[test]
fn test_reads_input_file() {
    let path = std::env::temp_dir().join(format!("tally-cli-{}.txt", std::process::id()));
    std::fs::write(&path, vec![b'x'; 12]).expect("write input file");
    let output = run_tally(&[path.to_str().expect("utf-8 path")], b"");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"1100");
}
