use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use crate::utils::colors::RESET;
use crate::utils::describe_category;
use crate::utils::formatting::format_bmi;

/// Record a new measurement.
///
/// All input validation lives here, before the core is invoked: the store
/// and the BMI engine trust their inputs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        weight,
        height,
        name,
    } = cmd
    {
        //
        // 1. Validate weight (> 0)
        //
        if *weight <= 0.0 {
            return Err(AppError::InvalidWeight(*weight));
        }

        //
        // 2. Validate height (> 0 and realistic)
        //
        if !(50.0..=300.0).contains(height) {
            return Err(AppError::InvalidHeight(*height));
        }

        //
        // 3. Resolve name (trimmed, placeholder when blank)
        //
        let name_final = match name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => cfg.default_name.clone(),
        };

        //
        // 4. Open DB and ensure schema
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        //
        // 5. Execute logic
        //
        let rec = AddLogic::apply(&mut pool, &name_final, *weight, *height)?;

        let (label, color) = describe_category(&rec.category);
        println!("{}BMI Result: {}{}", color, format_bmi(rec.bmi), RESET);
        println!("{}Category:   {}{}", color, label, RESET);
        success(format!("Record #{} saved for {}", rec.id, rec.name));

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            "Save measurement",
            &format!("id={} name={} bmi={}", rec.id, rec.name, format_bmi(rec.bmi)),
        ) {
            error(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
