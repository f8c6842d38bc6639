use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::record::PLACEHOLDER_NAME;
use crate::ui::messages::{error, warning};
use rusqlite::{Connection, Result};

/// One schema upgrade step. Steps are applied in `version` order; each
/// successful step bumps `PRAGMA user_version` so it never reruns.
struct Migration {
    version: i32,
    name: &'static str,
    /// A fatal step aborts startup on failure. A non-fatal one is
    /// reported and retried on the next start (version not bumped).
    fatal: bool,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "20240112_0001_create_records_table",
        fatal: true,
        apply: create_records_table,
    },
    Migration {
        version: 2,
        name: "20240530_0002_add_name_to_records",
        fatal: false,
        apply: migrate_add_name_to_records,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// Create the `records` table with the modern schema (including `name`).
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,   -- YYYY-MM-DD HH:MM:SS
            name      TEXT NOT NULL,
            weight    REAL NOT NULL,
            height    REAL NOT NULL,
            bmi       REAL NOT NULL,
            category  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_records_timestamp ON records(timestamp);
        "#,
    )?;
    Ok(())
}

/// Check if the `records` table has a `name` column.
fn records_has_name_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "name" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate a `records` table created before the `name` column existed.
/// Existing rows are backfilled with the NOT NULL default; every other
/// column and row is left untouched.
fn migrate_add_name_to_records(conn: &Connection) -> Result<()> {
    if records_has_name_column(conn)? {
        return Ok(()); // already present → nothing to migrate
    }

    warning("Adding 'name' column to existing records table...");

    conn.execute_batch(&format!(
        "ALTER TABLE records ADD COLUMN name TEXT NOT NULL DEFAULT '{}';",
        PLACEHOLDER_NAME
    ))?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Calling it on an up-to-date
/// store is a no-op.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table (migration audit rows land here)
    ensure_log_table(conn)?;

    // 2) Apply pending steps in order
    let current = schema_version(conn)?;

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        match (m.apply)(conn) {
            Ok(()) => {
                set_schema_version(conn, m.version)?;
                let _ = ttlog(
                    conn,
                    "migration_applied",
                    m.name,
                    &format!("Schema upgraded to version {}", m.version),
                );
            }
            Err(e) if !m.fatal => {
                error(format!(
                    "Migration '{}' failed: {} (will be retried on next start)",
                    m.name, e
                ));
                let _ = ttlog(conn, "migration_failed", m.name, &e.to_string());
                // later steps build on this one; stop here, keep the store usable
                break;
            }
            Err(e) => {
                return Err(AppError::Migration(format!("{}: {}", m.name, e)));
            }
        }
    }

    Ok(())
}
