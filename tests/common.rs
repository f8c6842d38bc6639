#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bmi() -> Command {
    cargo_bin_cmd!("bmitracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bmitracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    bmi()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    // add a couple of measurements via CLI
    bmi()
        .args(["--db", db_path, "add", "70", "175", "--name", "Alice"])
        .assert()
        .success();

    bmi()
        .args(["--db", db_path, "add", "90", "170", "--name", "Bob"])
        .assert()
        .success();
}

/// Helper to populate many records directly via the library DB API
pub fn populate_many_records(db_path: &str, n: usize) {
    use bmitracker::core::bmi::{classify_bmi, compute_bmi};
    use bmitracker::db::queries::insert_record;
    use bmitracker::models::record::NewMeasurement;

    let conn = rusqlite::Connection::open(db_path).expect("open db");
    // ensure initialized
    bmitracker::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let weight = 55.0 + (i % 40) as f64;
        let height = 170.0;
        let bmi_value = compute_bmi(weight, height);
        insert_record(
            &conn,
            &NewMeasurement {
                name: &format!("person{}", i),
                weight_kg: weight,
                height_cm: height,
                bmi: bmi_value,
                category: classify_bmi(bmi_value),
            },
        )
        .expect("insert record");
    }
}
