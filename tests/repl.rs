use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_lsh(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lsh"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start lsh");

    // lsh may exit before reading everything, e.g. after `exit`.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes());

    child.wait_with_output().expect("failed to wait for lsh")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn end_of_input_exits_successfully() {
    let output = run_lsh(&[], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "lsh> \n");
}

#[test]
fn exit_ignores_remaining_input() {
    let output = run_lsh(&[], "exit 7\nhelp\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "lsh> ");
}

#[test]
fn prompt_changes_next_prompt() {
    let output = run_lsh(&[], "prompt foo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "lsh> foo \n");
}

#[test]
fn missing_program_is_reported_and_loop_continues() {
    let output = run_lsh(&[], "nonexistent-binary-xyz\nquit\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "lsh> lsh> ");
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("lsh: nonexistent-binary-xyz: "), "{stderr}");
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn history_lists_and_replays() {
    let output = run_lsh(&[], "help\nhistory\nhistory 0\n");
    let stdout = stdout_of(&output);
    assert!(stdout.contains("0: help\n1: history\n"), "{stdout}");
    assert_eq!(stdout.matches("The following are built in:\n").count(), 2);
    assert!(stderr_of(&output).is_empty());
}

#[test]
#[cfg(unix)]
fn external_output_is_ordered_with_builtin_output() {
    let output = run_lsh(&[], "history\necho from-child\nhistory\n");
    let stdout = stdout_of(&output);
    let child_at = stdout.find("from-child\n").expect("echo output");
    let first = stdout.find("0: history\n").expect("first listing");
    let second = stdout.find("2: history\n").expect("second listing");
    assert!(first < child_at && child_at < second, "{stdout}");
}

#[test]
#[cfg(unix)]
fn cd_is_observed_by_child_processes() {
    let output = run_lsh(&[], "cd /\npwd\ncd\npwd\n");
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("/\n").count(), 2, "{stdout}");
    assert_eq!(stderr_of(&output), "lsh: expected argument to \"cd\"\n");
}

#[test]
fn options_configure_prompt_and_capacity() {
    let output = run_lsh(
        &["--prompt", "%", "--history-capacity", "2"],
        "prompt a\nprompt b\nhistory\n",
    );
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("% a b "), "{stdout}");
    assert!(stdout.contains("1: prompt b\n2: history\n"), "{stdout}");
    assert!(!stdout.contains("0: prompt a"));
}

#[test]
fn zero_history_capacity_is_rejected() {
    let output = run_lsh(&["--history-capacity", "0"], "");
    assert!(!output.status.success());
}
