#![forbid(unsafe_code)]

mod sql;

use super::super::StoreError;
use ic_core::catalog::MODEL_CATALOG;
use rusqlite::{Connection, ErrorCode, params};

const SCHEMA_VERSION: &str = "v1";

pub(in crate::store) fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(&sql::full_schema_sql())?;
    seed_agent_models(conn)?;
    conn.execute(
        "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
        params!["schema_version", SCHEMA_VERSION],
    )?;
    tracing::debug!(schema_version = SCHEMA_VERSION, "schema installed");
    Ok(())
}

fn seed_agent_models(conn: &Connection) -> Result<(), StoreError> {
    let mut stmt = conn.prepare(
        "INSERT INTO agent_models(id, name, provider) VALUES (?1, ?2, ?3) \
         ON CONFLICT(id) DO UPDATE SET name=excluded.name, provider=excluded.provider",
    )?;
    for entry in MODEL_CATALOG {
        stmt.execute(params![entry.id, entry.name, entry.vendor.as_str()])?;
    }
    Ok(())
}

pub(in crate::store) fn table_names(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub(in crate::store) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(code, message) => {
            code.code == ErrorCode::ConstraintViolation
                || message.as_deref().is_some_and(|value| {
                    value.contains("UNIQUE constraint failed")
                        || value.contains("PRIMARY KEY constraint failed")
                })
        }
        _ => false,
    }
}
