use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::record::{MeasurementRecord, NewMeasurement};
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<MeasurementRecord> {
    let category_str: String = row.get("category")?;
    let category = Category::from_db_str(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(category_str.clone())),
        )
    })?;

    Ok(MeasurementRecord {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        name: row.get("name")?,
        weight_kg: row.get("weight")?,
        height_cm: row.get("height")?,
        bmi: row.get("bmi")?,
        category,
    })
}

/// Insert a new measurement. The store stamps the timestamp (local clock,
/// second precision) and returns the assigned id. Existing rows are never
/// overwritten.
pub fn insert_record(conn: &Connection, rec: &NewMeasurement) -> AppResult<i64> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO records (timestamp, name, weight, height, bmi, category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            timestamp,
            rec.name,
            rec.weight_kg,
            rec.height_cm,
            rec.bmi,
            rec.category.to_db_str(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Return every saved measurement, most recent first.
/// The id tie-break keeps same-second saves in insertion order (newest
/// first). No pagination: callers truncate for display.
pub fn list_records(conn: &Connection) -> AppResult<Vec<MeasurementRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, timestamp, name, weight, height, bmi, category
         FROM records
         ORDER BY timestamp DESC, id DESC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Retrieve a single measurement by id.
pub fn get_record(conn: &Connection, id: i64) -> AppResult<Option<MeasurementRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, timestamp, name, weight, height, bmi, category
         FROM records
         WHERE id = ?1",
    )?;

    match stmt.query_row([id], map_row) {
        Ok(rec) => Ok(Some(rec)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a measurement by id. Returns the number of rows actually removed
/// (0 or 1) so the caller can distinguish "not found" from "deleted".
pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM records WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM records")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}
