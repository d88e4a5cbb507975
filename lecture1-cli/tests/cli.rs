use assert_cmd::Command;
use predicates::prelude::*;

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

const CALCULATOR_PROMPTS: &str = "Welcome to the calculator app!\
Select an operation: 1. Add 2. Subtract 3. Multiply 4. Divide: \
Enter number 1: Enter number 2: ";

#[test]
fn calculator_adds() {
    bin("calculator")
        .write_stdin("1\n2.0\n3.0\n")
        .assert()
        .success()
        .stdout(format!("{CALCULATOR_PROMPTS}Result: 5.000000\n"))
        .stderr("");
}

#[test]
fn calculator_divides() {
    bin("calculator")
        .write_stdin("4 7 2")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Result: 3.500000\n"));
}

#[test]
fn calculator_rejects_unknown_operation() {
    bin("calculator")
        .write_stdin("9\n1\n1\n")
        .assert()
        .success()
        .stdout(format!("{CALCULATOR_PROMPTS}Invalid operation!\n"));
}

#[test]
fn calculator_refuses_division_by_zero() {
    bin("calculator")
        .write_stdin("4\n5.0\n0.0\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Cannot divide by zero!\n"));
}

#[test]
fn calculator_fails_on_malformed_number() {
    bin("calculator")
        .write_stdin("1\nfive\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Expected a number, got `five`."));
}

#[test]
fn repeat_prints_word_count_times() {
    bin("repeat")
        .write_stdin("hi\n3\n")
        .assert()
        .success()
        .stdout("Enter a word: Enter a number:hihihi");
}

#[test]
fn repeat_rejects_long_word() {
    bin("repeat")
        .write_stdin("abcdefghij\n2\n")
        .assert()
        .failure()
        .code(1)
        .stdout("Enter a word: ")
        .stderr(predicate::str::contains("at most 9 fit"));
}

#[test]
fn repeat_rejects_negative_count() {
    bin("repeat")
        .write_stdin("hi\n-1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn hello_greets_with_newline() {
    bin("hello")
        .write_stdin("Ada\n")
        .assert()
        .success()
        .stdout("Please enter your name: Hello, Ada\n!\n");
}

#[test]
fn hello_on_empty_input() {
    bin("hello")
        .write_stdin("")
        .assert()
        .success()
        .stdout("Please enter your name: Hello, !\n");
}

#[test]
fn hello_replaces_invalid_utf8() {
    bin("hello")
        .write_stdin(&b"Ad\xffa\n"[..])
        .assert()
        .success()
        .stdout("Please enter your name: Hello, Ad\u{FFFD}a\n!\n");
}

#[test]
fn calculator_huge_selector_is_invalid() {
    bin("calculator")
        .write_stdin("99999999999999999999\n2\n3\n")
        .assert()
        .success()
        .stdout(format!("{CALCULATOR_PROMPTS}Invalid operation!\n"));
}

#[test]
fn calculator_rejects_nan() {
    bin("calculator")
        .write_stdin("1 nan 2")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Expected a number, got `nan`."));
}

#[test]
fn homework_prints_rectangle() {
    bin("homework")
        .assert()
        .success()
        .stdout("__________\n|        |\n|        |\n|        |\n__________\n");
}

#[test]
fn help_is_available() {
    bin("homework")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("homework rectangle"));
}

#[test]
fn unexpected_arguments_fail() {
    bin("hello").arg("Ada").assert().failure();
}
