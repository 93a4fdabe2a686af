use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn pricebot() -> Command {
    cargo_bin_cmd!("pricebot")
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

const CONFIG: &str = r#"
[logging]
level = "error"

[back_office]
enabled = true

[back_office.inventory]
FB = 1000
GOOG = 100

[[triggers]]
instrument = "FB"
quantity = 100
threshold = "200.0"

[[triggers]]
instrument = "GOOG"
quantity = 200
threshold = "160.0"
"#;

#[test]
fn test_help() {
    pricebot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_lists_triggers() {
    let config = temp_file(CONFIG);

    pricebot()
        .args(["check", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("FB x100 below 200.0"))
        .stdout(predicate::str::contains("GOOG x200 below 160.0"));
}

#[test]
fn check_fails_on_invalid_config() {
    let config = temp_file("[logging]\nformat = \"xml\"\n\n[[triggers]]\ninstrument = \"FB\"\nquantity = 1\nthreshold = \"1\"\n");

    pricebot()
        .args(["check", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for format"));
}

#[test]
fn run_writes_json_notices_for_qualifying_ticks() {
    let config = temp_file(CONFIG);
    let ticks = temp_file(concat!(
        "{\"instrument\":\"FB\",\"price\":\"199.9\"}\n",
        "{\"instrument\":\"FB\",\"price\":\"200.0\"}\n",
        "{\"instrument\":\"GOOG\",\"price\":\"159.9\"}\n",
        "{\"instrument\":\"MSFT\",\"price\":\"1.0\"}\n",
    ));

    let output = pricebot()
        .args(["run", "--json", "--config"])
        .arg(config.path())
        .arg("--ticks")
        .arg(ticks.path())
        .output()
        .expect("run pricebot");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let notices: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("json notice"))
        .collect();

    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0]["event"], "completion");
    assert_eq!(notices[0]["instrument"], "FB");
    assert_eq!(notices[0]["execution_price"], "199.9");
    assert_eq!(notices[1]["event"], "failure");
    assert_eq!(notices[1]["kind"], "execution");
    assert_eq!(
        notices[1]["error"],
        "not enough stock available for GOOG: requested 200, available 100"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("4 ticks, 1 completed, 1 failed"), "stderr: {stderr}");
}

#[test]
fn run_reads_ticks_from_stdin() {
    let config = temp_file(
        "[logging]\nlevel = \"error\"\n\n[[triggers]]\ninstrument = \"GOOG\"\nquantity = 200\nthreshold = \"160.0\"\n",
    );

    pricebot()
        .args(["run", "--json", "--config"])
        .arg(config.path())
        .write_stdin("{\"instrument\":\"GOOG\",\"price\":\"159.9\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BackOffice is not initialized"))
        .stdout(predicate::str::contains("\"kind\":\"unconfigured\""));
}

#[test]
fn run_fails_on_malformed_tick() {
    let config = temp_file(CONFIG);

    pricebot()
        .args(["run", "--config"])
        .arg(config.path())
        .write_stdin("{\"instrument\":\"FB\",\"price\":\"250\"}\n{oops}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tick on line 2"));
}
