use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn spawn_quodigious() -> Child {
    Command::new(env!("CARGO_BIN_EXE_quodigious"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("QUODIGIOUS_LOG")
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn quodigious: {e}"))
}

fn run_quodigious(input: &str) -> Output {
    let mut child = spawn_quodigious();

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .unwrap_or_else(|e| panic!("failed to write {input:?} to stdin: {e}"));

    child
        .wait_with_output()
        .unwrap_or_else(|e| panic!("failed to wait for quodigious: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn two_lengths_produce_two_blocks_in_order() {
    let output = run_quodigious("1 2\n");

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output), "2\n3\n4\n5\n6\n7\n8\n9\n\n24\n36\n\n");
}

#[test]
fn input_order_is_kept_even_when_descending() {
    let output = run_quodigious("2 1");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "24\n36\n\n2\n3\n4\n5\n6\n7\n8\n9\n\n");
}

#[test]
fn repeated_length_repeats_block() {
    let output = run_quodigious("3 3");

    assert_eq!(stdout(&output), "224\n432\n624\n735\n\n".repeat(2));
}

#[test]
fn lengths_may_span_several_lines() {
    let output = run_quodigious("2\n\n3\t\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "24\n36\n\n224\n432\n624\n735\n\n");
}

#[test]
fn empty_input_prints_nothing_and_succeeds() {
    let output = run_quodigious("");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn malformed_token_aborts_with_diagnostic() {
    let output = run_quodigious("2 abc 3");
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "24\n36\n\n", "length after the bad token must not run");
    assert!(err.contains("invalid digit length `abc`"), "stderr:\n{err}");
    assert!(err.contains("--> stdin:1:3"), "stderr:\n{err}");
}

#[test]
fn out_of_range_length_fails_before_scanning() {
    for bad in ["0", "20"] {
        let output = run_quodigious(bad);
        let err = stderr(&output);

        assert_eq!(output.status.code(), Some(1), "input {bad}");
        assert!(output.stdout.is_empty(), "input {bad}");
        assert!(err.contains("unsupported digit length"), "stderr:\n{err}");
        assert!(err.contains("supported: 1..=19"), "stderr:\n{err}");
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let first = run_quodigious("4 1 5");
    let second = run_quodigious("4 1 5");

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn debug_logging_stays_on_stderr() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_quodigious"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("QUODIGIOUS_LOG", "debug")
        .env("NO_COLOR", "1")
        .spawn()
        .expect("spawn quodigious");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"2")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for quodigious");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "24\n36\n\n");
    let err = stderr(&output);
    assert!(err.contains("block finished"), "stderr:\n{err}");
    assert!(err.contains("elapsed"), "stderr:\n{err}");
}

#[test]
fn each_line_is_answered_while_stdin_stays_open() {
    let mut child = spawn_quodigious();
    let mut stdin = child.stdin.take().expect("stdin is piped");
    stdin.write_all(b"2\n").expect("write stdin");
    stdin.flush().expect("flush stdin");

    let stdout = child.stdout.take().expect("stdout is piped");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut reader = BufReader::new(stdout);
        let mut block = String::new();
        for _ in 0..3 {
            if reader.read_line(&mut block).unwrap_or(0) == 0 {
                break;
            }
        }
        let _ = tx.send(block);
    });

    let block = rx.recv_timeout(Duration::from_secs(10));
    let _ = child.kill();
    let _ = child.wait();
    drop(stdin);

    assert_eq!(
        block.as_deref(),
        Ok("24\n36\n\n"),
        "first line should be answered before EOF"
    );
}

#[test]
fn closed_stdout_ends_quietly() {
    let mut child = spawn_quodigious();
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"5 7\n")
        .expect("write stdin");

    let stdout = child.stdout.take().expect("stdout is piped");
    let mut reader = BufReader::new(stdout);
    let mut first = String::new();
    reader.read_line(&mut first).expect("read first match");
    assert_eq!(first, "23328\n");
    drop(reader);

    let output = child.wait_with_output().expect("wait for quodigious");
    assert!(output.status.success(), "status: {:?}", output.status);
    assert!(
        output.stderr.is_empty(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
