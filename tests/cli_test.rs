//! Binary flags that print and exit before the TUI starts.

use std::process::Command;

fn run(arg: &str) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_healthhub"))
        .arg(arg)
        .output()
        .expect("Failed to execute binary");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn test_version_flag() {
    for flag in ["--version", "-V"] {
        let (ok, stdout) = run(flag);
        assert!(ok, "{} should exit with code 0", flag);
        assert_eq!(
            stdout.trim(),
            format!("healthhub {}", env!("CARGO_PKG_VERSION"))
        );
    }
}

#[test]
fn test_help_flag() {
    let (ok, stdout) = run("--help");
    assert!(ok);
    assert!(stdout.contains("Usage: healthhub"));
    assert!(stdout.contains("--data-dir"));
    assert!(stdout.contains("HEALTHHUB_VIEW"));
}
