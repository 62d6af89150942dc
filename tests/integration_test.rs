use std::io::Write;
use std::process::{Command, Stdio};

const DETERMINISTIC: [&str; 2] = ["--color=never", "--no-timing"];

#[test]
fn interactive_session() {
    testcase("session", &DETERMINISTIC);
}

#[test]
fn word_list_without_defaults() {
    testcase("word-list", &[&DETERMINISTIC[..], &["-n", "tests/inputs/extra-words.txt"][..]].concat());
}

#[test]
fn empty_dictionary() {
    testcase("empty-dictionary", &[&DETERMINISTIC[..], &["--no-defaults"][..]].concat());
}

#[test]
fn missing_word_list() {
    let output = Command::new(env!("CARGO_BIN_EXE_ts"))
        .args(DETERMINISTIC)
        .arg("tests/inputs/does-not-exist.txt")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does-not-exist.txt"), "stderr:\n{stderr}");
}

/// Runs the binary with `options`, feeds `tests/inputs/<name>.txt` as the user's input, and
/// compares the output with `tests/expected_outputs/<name>.txt`.
fn testcase(name: &str, options: &[&str]) {
    let input = std::fs::read(format!("tests/inputs/{name}.txt")).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_ts"))
        .args(options)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&input).unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        output.status.success(),
        "\nstdout:\n{stdout}stderr:\n{stderr}"
    );

    let expected = std::fs::read_to_string(format!("tests/expected_outputs/{name}.txt")).unwrap();

    // Ignore line ending differences, i.e., LF vs CRLF.
    let mut output_lines = stdout.lines();
    let mut expected_lines = expected.lines();
    loop {
        let output_line = output_lines.next();
        let expected_line = expected_lines.next();
        match (output_line, expected_line) {
            (None, None) => break,
            (output_line, expected_line) => assert_eq!(
                output_line, expected_line,
                "\noutput:\n{stdout}\nexpected:\n{expected}"
            ),
        }
    }
}
