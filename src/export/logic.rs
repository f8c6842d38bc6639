use crate::db::pool::DbPool;
use crate::db::queries::list_records;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, RecordExport};
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the full measurement history to `file`. Refuses to overwrite
    /// an existing file unless `force` is set.
    pub fn run(pool: &mut DbPool, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "Output file {} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let records = list_records(&pool.conn)?;
        if records.is_empty() {
            warning("No records to export.");
        }

        let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
