use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 2;

fn user_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_user_version(conn: &Connection, version: i64) -> Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
}

/// Check if the `calendar_items` table exists.
fn calendar_items_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='calendar_items'",
    )?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `calendar_items` has the given column.
fn calendar_items_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('calendar_items')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// v1: one row per calendar entry.
///
/// Columns are nullable on purpose: the reader reports incomplete rows
/// instead of the store silently rejecting them.
fn create_calendar_items_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS calendar_items (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject      TEXT,
            start_time   TEXT,
            end_time     TEXT,
            duration     INTEGER,
            busy_status  INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_calendar_items_start ON calendar_items(start_time);
        "#,
    )?;
    Ok(())
}

/// v2: recurring masters (`rrule`) and the zone they expand in.
fn migrate_add_recurrence_columns(conn: &Connection) -> Result<()> {
    if !calendar_items_has_column(conn, "rrule")? {
        conn.execute_batch("ALTER TABLE calendar_items ADD COLUMN rrule TEXT;")?;
        success("Added 'rrule' column to calendar_items.");
    }

    if !calendar_items_has_column(conn, "timezone")? {
        conn.execute_batch("ALTER TABLE calendar_items ADD COLUMN timezone TEXT;")?;
        success("Added 'timezone' column to calendar_items.");
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_calendar_items_rrule ON calendar_items(rrule);",
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = user_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "calendar store schema v{current} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    if current == SCHEMA_VERSION {
        return Ok(());
    }

    if current < 1 {
        if calendar_items_table_exists(conn)? {
            warning("Unversioned calendar_items table found, adopting it as schema v1.");
        } else {
            create_calendar_items_table(conn)?;
            success("Created calendar_items table.");
        }
        set_user_version(conn, 1)?;
    }

    if current < 2 {
        migrate_add_recurrence_columns(conn)?;
        set_user_version(conn, 2)?;
    }

    Ok(())
}
