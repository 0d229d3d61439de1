//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibmark() -> Command {
    Command::cargo_bin("fibmark").expect("binary not found")
}

#[test]
fn help_flag() {
    fibmark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibmark()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibmark"));
}

#[test]
fn index_from_stdin() {
    fibmark()
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Computing F_10 in "))
        .stdout(predicate::str::contains("Result: 55"));
}

#[test]
fn index_from_flag() {
    fibmark()
        .args(["-n", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 6765"));
}

#[test]
fn full_flag_expands_truncated_result() {
    fibmark()
        .args(["-n", "100", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 3.542248481e+20"))
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn truncated_result_prompts_and_accepts_no() {
    fibmark()
        .args(["-n", "100"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fully expand? [y/n]"))
        .stdout(predicate::str::contains("354224848179261915075").not());
}

#[test]
fn truncated_result_prompt_accepts_yes() {
    fibmark()
        .args(["-n", "100"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("354224848179261915075"));
}

#[test]
fn check_mode_prints_hex_digits() {
    fibmark()
        .args(["-n", "10", "--check"])
        .assert()
        .success()
        .stdout("37\n");
}

#[test]
fn check_mode_f0_prints_empty_line() {
    fibmark()
        .args(["-n", "0", "--check"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn perf_mode_prints_only_duration() {
    fibmark()
        .args(["-n", "100", "--perf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result").not())
        .stdout(predicate::str::is_match(r"^[0-9.]+[µnm]?s\n$").unwrap());
}

#[test]
fn all_combinations_agree_on_f200() {
    let expected = "280571172992510140037611932413038677189525";
    for algo in ["linear", "matrix", "strassen", "golden"] {
        for mul in ["schoolbook", "karatsuba", "dft", "fft"] {
            fibmark()
                .args(["-n", "200", "--algo", algo, "--mul", mul, "--full"])
                .assert()
                .success()
                .stdout(predicate::str::contains(expected));
        }
    }
}

#[test]
fn invalid_algorithm_fails() {
    fibmark()
        .args(["-n", "10", "--algo", "quantum"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn invalid_backend_fails() {
    fibmark()
        .args(["-n", "10", "--mul", "toomcook"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn malformed_index_fails() {
    fibmark()
        .args(["-n", "12x4"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid Fibonacci index"));
}

#[test]
fn empty_stdin_fails() {
    fibmark()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Fibonacci index"));
}
