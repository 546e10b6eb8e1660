use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempdir::TempDir;

fn mergeit(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mergeit"))
        .current_dir(dir)
        .args(args)
        .env_remove("MERGEIT_JOBS")
        .output()
        .expect("failed to spawn mergeit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn setup(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new("mergeit-cli").unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

#[test]
fn ascending_integers() {
    let dir = setup(&[("out.txt", ""), ("file1.txt", "1\n3\n5\n"), ("file2.txt", "2\n2\n4\n")]);
    let output = mergeit(dir.path(), &["-i", "out.txt", "file1.txt", "file2.txt"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Operation completed successfully!\n");
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "1\n2\n2\n3\n4\n5\n");
}

#[test]
fn invalid_and_unsorted_lines_are_reported() {
    let dir = setup(&[("out.txt", ""), ("a.txt", "3\nabc\n5\n"), ("b.txt", "5\n2\n8\n")]);
    let output = mergeit(dir.path(), &["-a", "-i", "out.txt", "a.txt", "b.txt"]);
    let text = stdout(&output);
    assert!(text.contains("Invalid element: abc in file: a.txt!"), "{}", text);
    assert!(text.contains("Unsorted element: 2 in file: b.txt!"), "{}", text);
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "3\n5\n5\n8\n");
}

#[test]
fn descending_strings_by_length() {
    let dir = setup(&[("out.txt", ""), ("file1.txt", "abcde\nab\n"), ("file2.txt", "abc\n")]);
    let output = mergeit(dir.path(), &["--jobs", "2", "-d", "-s", "out.txt", "file1.txt", "file2.txt"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "abcde\nabc\nab\n");
}

#[test]
fn missing_inputs_are_skipped() {
    let dir = setup(&[("out.txt", "old\n"), ("a.txt", "1\n")]);
    let output = mergeit(dir.path(), &["-i", "out.txt", "nope.txt", "a.txt"]);
    let text = stdout(&output);
    assert!(text.starts_with("File not found! Path: nope.txt!\n"), "{}", text);
    assert!(text.ends_with("Operation completed successfully!\n"), "{}", text);
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "1\n");
}

#[test]
fn all_inputs_empty_truncates_output() {
    let dir = setup(&[("out.txt", "old\n"), ("a.txt", ""), ("b.txt", "x y\n")]);
    let output = mergeit(dir.path(), &["-s", "out.txt", "a.txt", "b.txt"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "");
}

#[test]
fn empty_arguments() {
    let dir = setup(&[]);
    let output = mergeit(dir.path(), &[]);
    assert_eq!(stdout(&output), "The argument list is empty!\n");
}

#[test]
fn missing_output_file() {
    let dir = setup(&[("in1.txt", "1\n")]);
    let output = mergeit(dir.path(), &["-d", "out.txt", "in1.txt"]);
    assert_eq!(stdout(&output), "Output file not found! Path: out.txt\n");
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn usage_errors_do_not_touch_output() {
    let dir = setup(&[("out.txt", "keep\n"), ("in.txt", "1\n")]);
    let cases: &[(&[&str], &str)] = &[
        (&["-a"], "The input data type is not specified!\n"),
        (&["-q", "out.txt", "in.txt"], "Invalid arguments!\n"),
        (&["-h", "out.txt", "in.txt"], "Invalid arguments!\n"),
        (&["-V", "out.txt", "in.txt"], "Invalid arguments!\n"),
        (&["-d", "-i"], "The output and input files are not specified!\n"),
        (&["-i", "out.txt"], "No input files are specified!\n"),
        (&["-d", "out.txt", "in.txt"], "The input data type is not specified!\n")
    ];
    for (args, message) in cases {
        let output = mergeit(dir.path(), args);
        assert_eq!(stdout(&output), *message, "{:?}", args);
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "keep\n");
    }
}
