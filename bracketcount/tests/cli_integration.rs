//! Integration tests for the bracketcount CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_bracketcount(args: &[&str], cwd: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_bracketcount"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_project(root: &Path) {
    let src = root.join("src/main/java");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("Test.java"),
        r#"class Test {
    public static void main(String[] args) {
        System.out.println("Hello World!");
    }
}"#,
    )
    .unwrap();
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_bracketcount(&["--help"], temp.path());

    assert!(success);
    assert!(stdout.contains("bracketcount"));
    assert!(stdout.contains("--output-file-name"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_bracketcount(&["--version"], temp.path());

    assert!(success);
    assert!(stdout.contains("bracketcount"));
}

#[test]
fn test_writes_report_to_build_dir() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_bracketcount(&[], temp.path());

    assert!(success, "stderr: {stderr}");
    assert!(stdout.is_empty());
    assert!(stderr.contains("5 brackets in 1 file"));

    let report = fs::read_to_string(temp.path().join("build/brackets_count.txt")).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Brackets count");
    assert!(lines.contains(&"main/java/Test.java"));
    assert!(lines.contains(&"Total parentheses: 2"));
    assert!(lines.contains(&"Total square: 1"));
    assert!(lines.contains(&"Total curly: 2"));
    assert!(lines.contains(&"Total angle: 0"));
    assert!(lines.contains(&"Total brackets: 5"));
}

#[test]
fn test_print_matches_written_report() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_bracketcount(&[".", "--print"], temp.path());

    assert!(success);
    let report = fs::read_to_string(temp.path().join("build/brackets_count.txt")).unwrap();
    assert_eq!(stdout, report);
}

#[test]
fn test_output_file_name_option() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (_, _, success) = run_bracketcount(&["--output-file-name", "counts.txt"], temp.path());

    assert!(success);
    assert!(temp.path().join("build/counts.txt").exists());
    assert!(!temp.path().join("build/brackets_count.txt").exists());
}

#[test]
fn test_config_file() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    fs::write(
        temp.path().join("brackets.json"),
        r#"{"outputFileName": "from_config.txt"}"#,
    )
    .unwrap();

    let (_, _, success) = run_bracketcount(&["--config", "brackets.json"], temp.path());

    assert!(success);
    assert!(temp.path().join("build/from_config.txt").exists());
}

#[test]
fn test_empty_source_root() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    let (_, _, success) = run_bracketcount(&[], temp.path());

    assert!(success);
    let report = fs::read_to_string(temp.path().join("build/brackets_count.txt")).unwrap();
    assert!(report.ends_with("Total brackets: 0\n"));
}

#[test]
fn test_missing_source_root() {
    let temp = tempdir().unwrap();

    let (_, stderr, success) = run_bracketcount(&[], temp.path());

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("scan root does not exist"));
    assert!(!temp.path().join("build").exists());
}

#[test]
fn test_build_dir_inside_scanned_tree() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (_, _, first_ok) = run_bracketcount(&["--src", "."], temp.path());
    let first = fs::read_to_string(temp.path().join("build/brackets_count.txt")).unwrap();
    let (_, _, second_ok) = run_bracketcount(&["--src", "."], temp.path());
    let second = fs::read_to_string(temp.path().join("build/brackets_count.txt")).unwrap();

    assert!(first_ok && second_ok);
    assert_eq!(first, second);
    assert!(!second.contains("build/brackets_count.txt"));
    assert!(second.contains("Total brackets: 5\n"));
}
