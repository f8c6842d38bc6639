use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::list_records;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::{format_bmi, truncate_name};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let records = list_records(&pool.conn)?;

        if records.is_empty() {
            warning("No measurements recorded");
            return Ok(());
        }

        let shown = if *all {
            records.len()
        } else {
            limit.unwrap_or(cfg.history_limit)
        };

        if *all {
            println!("📅 Measurement history (all {} records):", records.len());
        } else {
            println!("📅 Measurement history (latest {} records):", shown);
        }
        println!();

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                width: 4,
            },
            Column {
                header: "Date/Time".into(),
                width: 19,
            },
            Column {
                header: "Name".into(),
                width: 18,
            },
            Column {
                header: "Weight (kg)".into(),
                width: 11,
            },
            Column {
                header: "Height (cm)".into(),
                width: 11,
            },
            Column {
                header: "BMI".into(),
                width: 6,
            },
            Column {
                header: "Category".into(),
                width: 13,
            },
        ]);

        for rec in records.iter().take(shown) {
            table.add_row(vec![
                rec.id.to_string(),
                rec.timestamp.clone(),
                truncate_name(&rec.name, 18),
                format!("{:.2}", rec.weight_kg),
                format!("{:.2}", rec.height_cm),
                format_bmi(rec.bmi),
                rec.category.as_str().to_string(),
            ]);
        }

        print!("{}", table.render());

        if records.len() > shown {
            println!();
            println!(
                "... {} older record(s) not shown (use --all)",
                records.len() - shown
            );
        }
    }
    Ok(())
}
