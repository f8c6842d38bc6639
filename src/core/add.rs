use crate::core::bmi::{classify_bmi, compute_bmi};
use crate::db::pool::DbPool;
use crate::db::queries::{get_record, insert_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::{MeasurementRecord, NewMeasurement};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Compute BMI and category for already-validated inputs, persist the
    /// measurement, and return the stored row.
    ///
    /// Input validation (weight > 0, height in range, name fallback) is the
    /// CLI layer's job; nothing is re-checked here.
    pub fn apply(
        pool: &mut DbPool,
        name: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<MeasurementRecord> {
        let bmi = compute_bmi(weight_kg, height_cm);
        let category = classify_bmi(bmi);

        let id = insert_record(
            &pool.conn,
            &NewMeasurement {
                name,
                weight_kg,
                height_cm,
                bmi,
                category,
            },
        )?;

        get_record(&pool.conn, id)?
            .ok_or_else(|| AppError::Other(format!("record {} vanished after insert", id)))
    }
}
