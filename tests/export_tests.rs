use predicates::str::contains;
use std::fs;

mod common;
use common::{bmi, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    bmi()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,timestamp,name,weight_kg,height_cm,bmi,category"));
    assert!(content.contains("Alice"));
    assert!(content.contains("22.86"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    bmi()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r["name"] == "Alice"));
    assert!(rows.iter().any(|r| r["category"] == "Obese II"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    let out = temp_out("export_no_overwrite", "csv");
    init_db_with_data(&db_path);

    fs::write(&out, "already here").expect("pre-create output");

    bmi()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // unchanged
    assert_eq!(fs::read_to_string(&out).expect("read"), "already here");

    bmi()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).expect("read").contains("Alice"));
}
