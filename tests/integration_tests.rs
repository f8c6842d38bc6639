use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{bmi, init_db_with_data, populate_many_records, setup_test_db};

#[test]
fn test_add_and_list_end_to_end() {
    let db_path = setup_test_db("add_list_e2e");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "add", "70", "175", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("22.86"))
        .stdout(contains("Normal weight"));

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("22.86"))
        .stdout(contains("Normal weight"));
}

#[test]
fn test_add_without_name_uses_placeholder() {
    let db_path = setup_test_db("placeholder_name");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "add", "70", "175"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Unnamed"));
}

#[test]
fn test_add_trims_blank_name_to_placeholder() {
    let db_path = setup_test_db("blank_name");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "add", "70", "175", "--name", "   "])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Unnamed"));
}

#[test]
fn test_add_rejects_nonpositive_weight() {
    let db_path = setup_test_db("bad_weight");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "add", "0", "175"])
        .assert()
        .failure()
        .stderr(contains("Invalid weight"));
}

#[test]
fn test_add_rejects_unrealistic_height() {
    let db_path = setup_test_db("bad_height");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "add", "70", "40"])
        .assert()
        .failure()
        .stderr(contains("Invalid height"));

    bmi()
        .args(["--db", &db_path, "add", "70", "320"])
        .assert()
        .failure()
        .stderr(contains("Invalid height"));
}

#[test]
fn test_obese_classification_is_colored_red_band() {
    let db_path = setup_test_db("obese_band");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 120 kg / 1.70 m² = 41.52 → Obese III
    bmi()
        .args(["--db", &db_path, "add", "120", "170", "--name", "Carl"])
        .assert()
        .success()
        .stdout(contains("41.52"))
        .stdout(contains("Obese III"));
}

#[test]
fn test_del_existing_record() {
    let db_path = setup_test_db("del_existing");
    init_db_with_data(&db_path);

    // Alice was inserted first → id 1
    bmi()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_del_nonexistent_record_reports_not_found() {
    let db_path = setup_test_db("del_missing");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "del", "999"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("not found"));
}

#[test]
fn test_del_can_be_cancelled() {
    let db_path = setup_test_db("del_cancel");
    init_db_with_data(&db_path);

    bmi()
        .args(["--db", &db_path, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"));
}

#[test]
fn test_del_rejects_nonpositive_id() {
    let db_path = setup_test_db("del_bad_id");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "del", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid record id"));
}

#[test]
fn test_list_truncates_to_default_limit() {
    let db_path = setup_test_db("list_limit");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    populate_many_records(&db_path, 15);

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("latest 10 records"))
        .stdout(contains("older record(s) not shown"));

    bmi()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("all 15 records"));
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("list_empty");

    bmi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bmi()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No measurements recorded"));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    bmi()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    bmi()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("add"));
}
