#![cfg(feature = "cli")]

use std::{fs, process::Command};

use tempfile::tempdir;

fn dos2unix() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dos2unix"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_argument_prints_usage() {
    let output = dos2unix().output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: dos2unix <filename>\n"
    );
}

#[test]
fn converts_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.txt");
    fs::write(&input, b"a\r\nb\r\nc").unwrap();

    let output = dos2unix().arg(&input).output().unwrap();
    assert!(output.status.success());

    let converted = dir.path().join("report.unix.txt");
    assert_eq!(fs::read(&converted).unwrap(), b"a\nb\nc");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(&format!(
        "Reformatting file {}.. This may take a while\n",
        input.display()
    )));
    assert!(stdout.contains("\rProgress: 100%"));
    assert!(stdout.ends_with(&format!(
        "\nFile {} successfully converted to UNIX EOL and saved as {}\n",
        input.display(),
        converted.display()
    )));
}

#[test]
fn quiet_hides_progress() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data");
    fs::write(&input, b"x\r\n").unwrap();

    let output = dos2unix().arg("--quiet").arg(&input).output().unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read(dir.path().join("data.unix")).unwrap(), b"x\n");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Progress"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");

    let output = dos2unix().arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\nError: failed to open input file"),
        "got: {stdout}"
    );
    assert!(!dir.path().join("missing.unix.txt").exists());
}

#[test]
fn zero_buffer_size_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, b"x\r\n").unwrap();

    let output = dos2unix()
        .args(["--buffer-size", "0"])
        .arg(&input)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid configuration"), "got: {stdout}");
    assert!(!stdout.contains("Checking file size"), "got: {stdout}");
}
