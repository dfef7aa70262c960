#![forbid(unsafe_code)]

use crate::cli::Command;
use ic_core::ids::{MasterId, UserId};
use ic_core::model::{Access, Caller};
use ic_storage::{SqliteStore, StoreError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("output: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging: {0}")]
    Logging(String),
    #[error("user {0} does not exist")]
    UnknownUser(i64),
}

#[derive(Serialize)]
struct InitReport {
    db_path: PathBuf,
    tables: Vec<String>,
}

fn emit<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), AdminError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn caller(store: &SqliteStore, user_id: i64) -> Result<Caller, AdminError> {
    let user = store
        .user_by_id(UserId::new(user_id))?
        .ok_or(AdminError::UnknownUser(user_id))?;
    Ok(Caller::new(user.id))
}

pub fn run(storage_dir: &Path, command: Command, out: &mut impl Write) -> Result<(), AdminError> {
    let mut store = SqliteStore::open(storage_dir)?;
    match command {
        Command::InitDb => {
            let report = InitReport {
                db_path: store.db_path(),
                tables: store.table_names()?,
            };
            tracing::info!(path = %report.db_path.display(), tables = report.tables.len(), "database ready");
            emit(out, &report)
        }
        Command::Models => emit(out, &store.list_agent_models()?),
        Command::AddUser { username } => emit(out, &store.create_user(&username)?),
        Command::Masters {
            user_id,
            master_type,
        } => {
            let caller = caller(&store, user_id)?;
            emit(out, &store.list_masters(&caller, master_type.into())?)
        }
        Command::ShowMaster { user_id, master_id } => {
            let caller = caller(&store, user_id)?;
            let master = store.get_master(&caller, MasterId::new(master_id), Access::Creator)?;
            emit(out, &master)
        }
    }
}
