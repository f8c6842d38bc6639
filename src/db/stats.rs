use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!(
        "{}• Total records:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TIMESTAMP RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM records ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM records ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Measurement range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE BMI
    //
    if count > 0 {
        let avg_bmi: f64 = pool
            .conn
            .query_row("SELECT AVG(bmi) FROM records", [], |row| row.get(0))?;
        println!("{}• Average BMI:{} {:.2}", CYAN, RESET, avg_bmi);
    }

    println!();
    Ok(())
}
