// バイナリを実行して標準出力の内容を確認するテスト
use std::process::Command;

const EXPECTED_TRANSCRIPT: [&str; 11] = [
    "Printer instance created",
    "printer1 and printer2 are the same.",
    "Conducting Math Exam",
    "Evaluating Math Exam",
    "Publishing Math Exam Results",
    "Conducting Science Exam",
    "Evaluating Science Exam",
    "Publishing Science Exam Results",
    "Conducting Programming Exam",
    "Evaluating Programming Exam",
    "Publishing Programming Exam Results",
];

fn binary() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_exam_patterns"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_transcript_and_exit_code() {
    let output = binary().output().expect("Failed to execute binary");

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, EXPECTED_TRANSCRIPT);
}

#[test]
fn test_logging_does_not_touch_stdout() {
    let output = binary()
        .env("RUST_LOG", "trace")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), EXPECTED_TRANSCRIPT);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("shared printer initialised"));
}

#[test]
fn test_cli_version() {
    let output = binary()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("exam_patterns"));
}

#[test]
fn test_cli_rejects_arguments() {
    let output = binary()
        .arg("unexpected")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
