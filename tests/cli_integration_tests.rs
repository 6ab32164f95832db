use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs the binary with `input` on stdin, isolated from the user's home.
fn run_binary(home: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_base27"))
        .args(args)
        .env("HOME", home)
        .env_remove("BASE27_PROMPT")
        .env_remove("BASE27_LOG_FILE")
        .env_remove("BASE27_LOG_LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("stdin write");

    child.wait_with_output().expect("binary should exit")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_default_prompt_and_clean_eof() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(home.path(), &[], "27\nab\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\t\t>>> ab\n\t\t>>> 27\n\t\t>>> \n");
}

#[test]
fn test_prompt_flag() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(home.path(), &["--prompt", "? "], "26\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "? /\n? \n");
}

#[test]
fn test_negative_number_does_not_hang() {
    let home = tempfile::tempdir().unwrap();
    let output = run_binary(home.path(), &["--prompt", ""], "-1\n1\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "error: cannot encode negative number -1\nb\n\n"
    );
}

#[test]
fn test_config_file_prompt_and_log_file() {
    let home = tempfile::tempdir().unwrap();
    let log_path = home.path().join("base27.log");
    let config_path = home.path().join("custom.toml");
    std::fs::write(
        &config_path,
        format!(
            "[general]\nprompt = \"cfg> \"\n\n[logging]\nfile = {:?}\nlevel = \"debug\"\n",
            log_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run_binary(
        home.path(),
        &["--config", config_path.to_str().unwrap()],
        "b\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "cfg> 1\ncfg> \n");

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("base27 starting up"));
    assert!(log.contains("shutting down"));
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config_path = home.path().join("broken.toml");
    std::fs::write(&config_path, "[general\nprompt = ").unwrap();

    let output = run_binary(
        home.path(),
        &["--config", config_path.to_str().unwrap()],
        "ab\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\t\t>>> 27\n\t\t>>> \n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("config parse error"));
}
