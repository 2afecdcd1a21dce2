use assert_cmd::Command;
use predicates::prelude::*;

fn subtrack() -> Command {
    Command::cargo_bin("subtrack").expect("binary should build")
}

#[test]
fn describe_prints_a_compact_phrase() {
    subtrack()
        .args(["describe", "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every month on day 1"));
}

#[test]
fn describe_detailed_uses_ordinals() {
    subtrack()
        .args(["describe", "--detailed", "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every month on the 1st"));
}

#[test]
fn describe_degrades_gracefully_on_garbage() {
    subtrack()
        .args(["describe", "not a rule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid recurrence rule"));
}

#[test]
fn next_reports_the_upcoming_occurrence() {
    subtrack()
        .args([
            "next",
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=15",
            "--from",
            "2025-01-20",
            "--anchor",
            "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-15"));
}

#[test]
fn next_fails_on_invalid_rules() {
    subtrack()
        .args(["next", "FREQ=DAILY;INTERVAL=abc", "--from", "2025-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn preview_lists_the_requested_number_of_dates() {
    subtrack()
        .args([
            "preview",
            "FREQ=DAILY;INTERVAL=1",
            "--from",
            "2025-06-01",
            "--count",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01"))
        .stdout(predicate::str::contains("2025-06-03"))
        .stdout(predicate::str::contains("next 3 occurrences"));
}

#[test]
fn between_respects_the_anchor_phase() {
    subtrack()
        .args([
            "between",
            "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO",
            "--from",
            "2025-01-06",
            "--to",
            "2025-02-02",
            "--anchor",
            "2025-01-06",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-06"))
        .stdout(predicate::str::contains("2025-01-20"))
        .stdout(predicate::str::contains("2025-01-13").not());
}

#[test]
fn build_emits_rule_string_and_description() {
    subtrack()
        .args([
            "build",
            "--freq",
            "monthly",
            "--nth",
            "first",
            "--weekday",
            "mon",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("BYSETPOS=1"))
        .stdout(predicate::str::contains("first Monday"));
}

#[test]
fn build_supports_presets() {
    subtrack()
        .args(["build", "--preset", "weekdays"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FREQ=WEEKLY"))
        .stdout(predicate::str::contains("BYDAY=MO,TU,WE,TH,FR"));
}

#[test]
fn build_reports_validation_failures() {
    subtrack()
        .args(["build", "--freq", "monthly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("specific date or a pattern"));
}

#[test]
fn spend_projects_renewal_costs() {
    subtrack()
        .args([
            "spend",
            "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=1",
            "--amount",
            "9.99",
            "--from",
            "2025-01-01",
            "--to",
            "2025-12-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renewals: 12"))
        .stdout(predicate::str::contains("$119.88"));
}
