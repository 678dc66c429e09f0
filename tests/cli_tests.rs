mod common;
use common::Sandbox;
use predicates::prelude::*;
use serde_json::json;
use std::fs;

#[test]
fn init_creates_config_and_empty_documents() {
    let sb = Sandbox::new();

    sb.cmd().arg("init").assert().success();

    assert!(sb.home().join(".rollcall").join("rollcall.conf").exists());
    assert_eq!(sb.students_json(), json!([]));
    assert_eq!(sb.history_json(), json!([]));
}

#[test]
fn import_txt_then_list_keeps_source_order() {
    let sb = Sandbox::new();
    let roster = sb.file("class.txt", "  Alice\n\nBob\nAlice\n");

    sb.cmd()
        .arg("import")
        .arg(&roster)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 students"));

    assert_eq!(
        sb.students_json(),
        json!([
            {"name": "Alice", "count": 0},
            {"name": "Bob", "count": 0},
            {"name": "Alice", "count": 0}
        ])
    );

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("Bob")));
}

#[test]
fn import_csv_skips_header_and_blank_names() {
    let sb = Sandbox::new();
    let roster = sb.file("class.csv", "name,group\nDora,1\n,2\nEli,2\n");

    sb.cmd().arg("import").arg(&roster).assert().success();

    assert_eq!(
        sb.students_json(),
        json!([{"name": "Dora", "count": 0}, {"name": "Eli", "count": 0}])
    );
}

#[test]
fn failed_import_keeps_previous_roster() {
    let sb = Sandbox::new();
    sb.with_class();
    let before = sb.students_json();

    let bad = sb.file("class.pdf", "%PDF-1.4");
    sb.cmd()
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));

    let broken = sb.file("broken.xlsx", "not a workbook");
    sb.cmd().arg("import").arg(&broken).assert().failure();

    assert_eq!(sb.students_json(), before);
}

#[test]
fn call_updates_one_count_and_appends_history() {
    let sb = Sandbox::new();
    sb.with_class();

    sb.cmd()
        .args(["call", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("called 1 time"));

    let students = sb.students_json();
    let counts: Vec<u64> = students
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["count"].as_u64().unwrap())
        .collect();
    assert_eq!(counts.iter().sum::<u64>(), 1);

    let history = sb.history_json();
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);

    let called = students
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["count"] == 1)
        .unwrap();
    assert_eq!(history[0]["name"], called["name"]);
    assert_eq!(history[0]["time"].as_str().unwrap().len(), 19);
}

#[test]
fn call_on_empty_roster_fails() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("call")
        .assert()
        .failure()
        .stderr(predicate::str::contains("roster empty"));

    assert_eq!(sb.history_json(), json!([]));
}

#[test]
fn history_and_stats_reflect_calls() {
    let sb = Sandbox::new();
    sb.with_class();

    for seed in 0..4 {
        sb.cmd()
            .args(["call", "--seed", &seed.to_string()])
            .assert()
            .success();
    }

    assert_eq!(sb.history_json().as_array().unwrap().len(), 4);

    sb.cmd()
        .args(["history", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time"));

    sb.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calls:").and(predicate::str::contains("4")));
}

#[test]
fn clear_with_force_empties_both_documents() {
    let sb = Sandbox::new();
    sb.with_class();
    sb.cmd().arg("call").assert().success();

    sb.cmd().args(["clear", "--force"]).assert().success();

    assert_eq!(sb.students_json(), json!([]));
    assert_eq!(sb.history_json(), json!([]));
}

#[test]
fn clear_without_confirmation_keeps_data() {
    let sb = Sandbox::new();
    sb.with_class();

    sb.cmd().arg("clear").write_stdin("n\n").assert().success();

    assert_eq!(sb.students_json().as_array().unwrap().len(), 3);
}

#[test]
fn export_csv_writes_ranked_rows() {
    let sb = Sandbox::new();
    sb.with_class();
    sb.cmd().args(["call", "--seed", "1"]).assert().success();

    let out = sb.home().join("stats.csv");
    sb.cmd()
        .args(["export", "--format", "csv", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "rank,name,count,percentage");
    assert!(lines[1].starts_with("1,") && lines[1].ends_with(",1,100.00"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn compressed_backup_creates_zip() {
    let sb = Sandbox::new();
    sb.with_class();

    let dest = sb.home().join("backups").join("class");
    sb.cmd()
        .args(["backup", "--compress", "--dest"])
        .arg(&dest)
        .assert()
        .success();

    assert!(sb.home().join("backups").join("class.zip").exists());
}

#[test]
fn activity_log_records_operations() {
    let sb = Sandbox::new();
    sb.with_class();
    sb.cmd().arg("call").assert().success();

    sb.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import").and(predicate::str::contains("call")));
}

#[test]
fn config_print_shows_overridden_data_dir() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history_limit: 50"))
        .stdout(predicate::str::contains(
            sb.data_dir().to_string_lossy().to_string(),
        ));
}
