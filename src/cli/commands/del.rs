use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        //
        // Validate id (> 0) before touching the store
        //
        if *id <= 0 {
            return Err(AppError::InvalidRecordId(*id));
        }

        //
        // Confirmation prompt
        //
        let prompt = format!("Delete record #{}? This action is irreversible.", id);
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let deleted = DeleteLogic::apply(&mut pool, *id)?;

        if deleted > 0 {
            success(format!("Record #{} has been deleted.", id));
            let _ = ttlog(
                &pool.conn,
                "del",
                "Delete measurement",
                &format!("id={} rows={}", id, deleted),
            );
        } else {
            warning(format!("Record #{} not found. Nothing deleted.", id));
        }
    }

    Ok(())
}
