use super::category::Category;
use serde::Serialize;

/// Name stored when the user leaves the name field blank.
/// Also the NOT NULL default applied by the schema migration.
pub const PLACEHOLDER_NAME: &str = "Unnamed";

/// A single persisted BMI measurement.
///
/// Records are immutable after creation: there is no update operation,
/// only insert and delete-by-id. `bmi` and `category` are always derived
/// from the weight/height that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementRecord {
    pub id: i64,
    pub timestamp: String, // ⇔ records.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub name: String,      // ⇔ records.name (TEXT NOT NULL)
    pub weight_kg: f64,    // ⇔ records.weight (REAL, > 0)
    pub height_cm: f64,    // ⇔ records.height (REAL, caller-validated 50..=300)
    pub bmi: f64,          // ⇔ records.bmi (REAL, 2 decimals)
    pub category: Category, // ⇔ records.category (TEXT, stable identifier)
}

/// Field set for a not-yet-persisted measurement. The store stamps the
/// timestamp and assigns the id at insert time.
pub struct NewMeasurement<'a> {
    pub name: &'a str,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: Category,
}
