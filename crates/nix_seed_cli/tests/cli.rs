use std::io::Write;
use std::process::{Command, Output, Stdio};

const GREETING_LINE: &str = "Hello from Nix Seed!\n";

fn nix_seed() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nix-seed"))
}

fn run(cmd: &mut Command) -> Output {
    cmd.stdin(Stdio::null()).output().expect("run nix-seed")
}

fn stdout_of(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("stdout is utf-8")
}

#[test]
fn prints_greeting_and_exits_successfully() {
    let output = run(&mut nix_seed());

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), GREETING_LINE);
}

#[test]
fn repeated_runs_are_identical() {
    let first = run(&mut nix_seed());
    let second = run(&mut nix_seed());

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn arguments_are_ignored() {
    let output = run(nix_seed().args(["--help", "World", "-v"]));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), GREETING_LINE);
}

#[test]
fn stdin_is_ignored() {
    let mut child = nix_seed()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn nix-seed");
    if let Some(mut stdin) = child.stdin.take() {
        // The process never reads stdin and may already be gone.
        let _ = stdin.write_all(b"Hello from somewhere else\n");
    }
    let output = child.wait_with_output().expect("wait for nix-seed");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), GREETING_LINE);
}

#[test]
fn environment_does_not_change_stdout() {
    let output = run(nix_seed()
        .env("RUST_LOG", "trace")
        .env("NIX_SEED_SUBJECT", "World")
        .env("LANG", "de_DE.UTF-8"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), GREETING_LINE);
}

#[test]
fn logs_stay_off_stdout_at_trace_level() {
    let output = run(nix_seed().env("RUST_LOG", "trace"));

    assert_eq!(stdout_of(&output), GREETING_LINE);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rendered greeting"));
}

#[test]
fn nothing_on_stderr_by_default() {
    let output = run(nix_seed().env_remove("RUST_LOG"));

    assert!(output.stderr.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_with_status_1() {
    let full = std::fs::File::create("/dev/full").expect("open /dev/full");
    let output = nix_seed()
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::from(full))
        .output()
        .expect("run nix-seed");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: I/O error: "));
    assert!(stderr.contains("Failed to write to stdout"));
    assert_eq!(stderr.matches("Failed to write to stdout").count(), 1);
}
