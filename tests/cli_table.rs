use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn creature(id: u32, name: &str, types: &[&str], power: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": types,
        "hp": power,
        "attack": 0,
        "defense": 0,
        "special_attack": 0,
        "special_defense": 0,
        "speed": 0,
    })
}

/// Twelve records, id N with power 100 * N, plus a few named ones.
fn write_dataset(dir: &Path) -> PathBuf {
    let mut records: Vec<Value> = (1..=12)
        .map(|id| creature(id, &format!("Creature {}", id), &["Normal"], 100 * id))
        .collect();
    records.push(creature(13, "Charmander", &["Fire"], 309));
    records.push(creature(14, "Charizard", &["Fire", "Flying"], 534));

    let path = dir.join("pokemon.json");
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
    path
}

fn statdex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("statdex").unwrap();
    cmd.env("STATDEX_HOME", home.path())
        .env_remove("STATDEX_LOG")
        .current_dir(home.path())
        .arg("--no-color");
    cmd
}

fn list_json(home: &TempDir, args: &[&str]) -> Value {
    let output = statdex(home)
        .arg("list")
        .arg("--json")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn default_command_lists_first_page_from_working_directory() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    statdex(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Creature 1"))
        .stdout(predicate::str::contains("1-5 of 14"))
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("Min Power: 100"))
        .stdout(predicate::str::contains("Max Power: 500"));
}

#[test]
fn search_is_case_insensitive() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    let view = list_json(&home, &["--search", "CHAR"]);
    let names: Vec<&str> = view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Charmander", "Charizard"]);
    assert_eq!(view["power_range"], json!({"min": 309, "max": 534}));
}

#[test]
fn last_page_reports_padding() {
    let home = tempfile::tempdir().unwrap();
    let data = write_dataset(home.path());

    let view = list_json(
        &home,
        &["--data", data.to_str().unwrap(), "--min-power", "100", "--page", "3"],
    );
    assert_eq!(view["total_filtered"], 14);
    assert_eq!(view["rows"].as_array().unwrap().len(), 4);
    assert_eq!(view["empty_row_count"], 1);
    assert_eq!(view["page_index"], 2);
}

#[test]
fn page_past_the_end_is_clamped() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    let view = list_json(&home, &["--page", "99"]);
    assert_eq!(view["page_index"], 2);
    assert_eq!(view["page_count"], 3);
}

#[test]
fn page_size_all_shows_everything() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    let view = list_json(&home, &["--page-size", "all"]);
    assert_eq!(view["rows"].as_array().unwrap().len(), 14);
    assert_eq!(view["empty_row_count"], 0);
    assert_eq!(view["page_count"], 1);
    assert_eq!(view["page_size"], "all");
}

#[test]
fn empty_result_has_no_power_range() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    let view = list_json(&home, &["--min-power", "100000"]);
    assert_eq!(view["power_range"], Value::Null);
    assert_eq!(view["page_count"], 0);

    statdex(&home)
        .args(["list", "--min-power", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Min Power: -"))
        .stdout(predicate::str::contains("No records match."));
}

#[test]
fn non_numeric_threshold_warns_and_shows_all() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    statdex(&home)
        .args(["list", "--json", "--min-power", "lots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_filtered\": 14"))
        .stderr(predicate::str::contains("'lots' is not a number"));
}

#[test]
fn missing_data_file_gives_empty_table() {
    let home = tempfile::tempdir().unwrap();

    statdex(&home)
        .args(["list", "--data", "nowhere.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load records"))
        .stdout(predicate::str::contains("0-0 of 0"));
}

#[test]
fn malformed_records_are_skipped() {
    let home = tempfile::tempdir().unwrap();
    let records = json!([
        creature(1, "Bulbasaur", &["Grass"], 318),
        {"id": 2, "name": "Ivysaur", "type": ["Grass"]},
        creature(1, "Bulbasaur again", &["Grass"], 1),
    ]);
    std::fs::write(home.path().join("pokemon.json"), records.to_string()).unwrap();

    statdex(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped 2 malformed record(s)"))
        .stdout(predicate::str::contains("1-1 of 1"))
        .stdout(predicate::str::contains("Bulbasaur again").not());
}

#[test]
fn config_set_and_get() {
    let home = tempfile::tempdir().unwrap();

    statdex(&home)
        .args(["config", "page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 10"));

    statdex(&home)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::diff("10\n"));

    statdex(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 10"))
        .stdout(predicate::str::contains("data-file = pokemon.json"));

    write_dataset(home.path());
    let view = list_json(&home, &[]);
    assert_eq!(view["rows"].as_array().unwrap().len(), 10);
}

#[test]
fn config_rejects_bad_input() {
    let home = tempfile::tempdir().unwrap();

    statdex(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid page size"));

    statdex(&home)
        .args(["config", "colour", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));

    assert!(!home.path().join("config.json").exists());
}

#[test]
fn browse_reads_events_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    write_dataset(home.path());

    statdex(&home)
        .arg("browse")
        .write_stdin("next\nnext\nnext\nsearch char\nsize all\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("6-10 of 14"))
        .stdout(predicate::str::contains("11-14 of 14"))
        .stdout(predicate::str::contains("Page 3 of 3"))
        .stdout(predicate::str::contains("1-2 of 2"))
        .stdout(predicate::str::contains("Rows per page: all"));
}

#[test]
fn invalid_page_size_flag_fails() {
    let home = tempfile::tempdir().unwrap();

    statdex(&home)
        .args(["list", "--page-size", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page size"));
}
