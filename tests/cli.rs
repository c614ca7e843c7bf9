#![cfg(feature = "cli")]

use std::process::Command;

fn brownian() -> Command {
    Command::new(env!("CARGO_BIN_EXE_brownian"))
}

#[test]
fn test_writes_file_and_reports_completion() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cli.wav");

    let result = brownian()
        .args(["8000", "1"])
        .arg(&output)
        .args(["-c", "1000", "-o", "4", "--seed", "9"])
        .output()
        .unwrap();

    assert!(result.status.success(), "{:?}", result);
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("saved to"), "stdout: {}", stdout);

    let reader = hound::WavReader::open(&output).unwrap();
    assert_eq!(reader.spec().sample_rate, 8000);
    assert_eq!(reader.len(), 8000);
}

#[test]
fn test_cutoff_above_nyquist_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cli.wav");

    let result = brownian()
        .args(["8000", "1"])
        .arg(&output)
        .args(["--cutoff", "4000"])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Nyquist"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_path_fails_with_save_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("cli.wav");

    let result = brownian()
        .args(["8000", "1"])
        .arg(&output)
        .args(["-c", "1000"])
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to save file"), "stderr: {}", stderr);
}

#[test]
fn test_zero_duration_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = brownian()
        .args(["44100", "0"])
        .arg(dir.path().join("cli.wav"))
        .output()
        .unwrap();

    assert!(!result.status.success());
}
