#![forbid(unsafe_code)]

mod agent_models;
mod agents;
mod error;
mod master_agents;
mod masters;
mod requests;
mod support;
mod types;
mod users;

pub use error::StoreError;
pub use requests::*;
pub use types::*;

use ic_core::ids::UserId;
use ic_core::model::{Access, Caller};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DB_FILE_NAME: &str = "incontext.db";

/// Single-connection store. Every mutating call runs in its own transaction and
/// commits at the end; an early return drops the transaction, which rolls it back.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    storage_dir: PathBuf,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;

        let db_path = storage_dir.join(DB_FILE_NAME);
        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        support::install_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "store opened");

        Ok(Self { conn, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.storage_dir.join(DB_FILE_NAME)
    }

    pub fn table_names(&self) -> Result<Vec<String>, StoreError> {
        support::table_names(&self.conn)
    }
}

/// NotFound wins over Forbidden; both are decided before any child row is read.
fn check_access(caller: &Caller, creator_id: UserId, access: Access) -> Result<(), StoreError> {
    match access {
        Access::Internal => Ok(()),
        Access::Creator if caller.owns(creator_id) => Ok(()),
        Access::Creator => Err(StoreError::Forbidden),
    }
}
