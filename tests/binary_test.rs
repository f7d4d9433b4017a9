use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(binary: &str, workspace: &Path, args: &[&str]) -> Output {
    Command::new(binary)
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .unwrap()
}

fn workspace_with_template(makefile: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    fs::create_dir_all(&template).unwrap();
    fs::write(template.join("Makefile"), makefile).unwrap();
    temp_dir
}

#[test]
fn test_gen_c_cpp_props_supported_platform() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_gen-c-cpp-props"),
        temp_dir.path(),
        &["--platform", "Linux"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Wrote "));
    assert!(stdout.trim_end().ends_with("for Linux"));
    assert!(temp_dir.path().join(".vscode/c_cpp_properties.json").is_file());
}

#[test]
fn test_gen_c_cpp_props_unsupported_platform() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_gen-c-cpp-props"),
        temp_dir.path(),
        &["--platform", "FreeBSD"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported platform: FreeBSD"));
    assert!(!temp_dir.path().join(".vscode").exists());
}

#[test]
fn test_new_project_success() {
    let temp_dir = workspace_with_template("DEVICE = attiny85\n");
    let output = run(
        env!("CARGO_BIN_EXE_new-project"),
        temp_dir.path(),
        &["blink", "--device", "atmega328p"],
    );

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Created "));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("blink/Makefile")).unwrap(),
        "DEVICE = atmega328p\n"
    );
}

#[test]
fn test_new_project_existing_target() {
    let temp_dir = workspace_with_template("DEVICE = attiny85\n");
    fs::create_dir(temp_dir.path().join("blink")).unwrap();

    let output = run(env!("CARGO_BIN_EXE_new-project"), temp_dir.path(), &["blink"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn test_new_project_missing_key() {
    let temp_dir = workspace_with_template("DEVICE = attiny85\n");
    let output = run(
        env!("CARGO_BIN_EXE_new-project"),
        temp_dir.path(),
        &["blink", "--clock", "16000000"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CLOCK not found in"));
}

#[test]
fn test_new_project_missing_name() {
    let temp_dir = workspace_with_template("DEVICE = attiny85\n");
    let output = run(env!("CARGO_BIN_EXE_new-project"), temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}
