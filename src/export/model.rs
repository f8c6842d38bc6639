use crate::models::record::MeasurementRecord;
use serde::Serialize;

/// Flat row shape shared by the CSV and JSON writers.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    pub id: i64,
    pub timestamp: String,
    pub name: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub bmi: f64,
    pub category: &'static str,
}

impl From<&MeasurementRecord> for RecordExport {
    fn from(rec: &MeasurementRecord) -> Self {
        Self {
            id: rec.id,
            timestamp: rec.timestamp.clone(),
            name: rec.name.clone(),
            weight_kg: rec.weight_kg,
            height_cm: rec.height_cm,
            bmi: rec.bmi,
            category: rec.category.as_str(),
        }
    }
}
