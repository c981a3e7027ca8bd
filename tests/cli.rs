use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("columna").unwrap()
}

#[test]
fn help_describes_the_form() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Spinal risk analysis form"));
}

#[test]
fn version_reports_the_binary_name() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("columna"));
}

#[test]
fn unknown_arguments_are_rejected() {
    cmd().arg("--bogus").assert().failure();
}

#[test]
fn refuses_to_run_without_a_terminal() {
    // assert_cmd pipes stdout, so the binary must bail before touching
    // raw mode.
    cmd().assert().failure().stderr(contains("terminal"));
}
