#![forbid(unsafe_code)]

mod create;
mod delete;
mod details;
mod hydrate;
mod items;
mod update;

use super::support::master_type_column;
use super::{ListMaster, Master, MasterBase, MasterSummary, SqliteStore, StoreError, check_access};
use ic_core::ids::{MasterId, UserId};
use ic_core::model::{Access, Caller, MasterType};
use rusqlite::{Connection, OptionalExtension, params};

const LIST_ONLY: &str = "Items and details belong to list masters.";

fn fetch_base(
    conn: &Connection,
    id: MasterId,
) -> Result<Option<(MasterType, MasterBase)>, StoreError> {
    Ok(conn
        .query_row(
            r#"
            SELECT m.id, m.creator_id, u.username, m.created_at_ms, m.master_type, m.name, m.description
            FROM masters m
            JOIN users u ON u.id = m.creator_id
            WHERE m.id = ?1
            "#,
            params![id.get()],
            |row| {
                Ok((
                    master_type_column(row, 4)?,
                    MasterBase {
                        id: MasterId::new(row.get(0)?),
                        creator_id: UserId::new(row.get(1)?),
                        username: row.get(2)?,
                        created_at_ms: row.get(3)?,
                        name: row.get(5)?,
                        description: row.get(6)?,
                    },
                ))
            },
        )
        .optional()?)
}

/// Base row first, then the access decision, then the type-specific children.
fn load_master(
    conn: &Connection,
    caller: &Caller,
    id: MasterId,
    access: Access,
) -> Result<Master, StoreError> {
    let (master_type, base) = fetch_base(conn, id)?.ok_or(StoreError::NotFound)?;
    check_access(caller, base.creator_id, access)?;
    match master_type {
        MasterType::List => Ok(Master::List(hydrate::list_master(conn, base)?)),
        MasterType::Agent => Ok(Master::Agent(hydrate::agent_master(conn, base)?)),
    }
}

/// Children are only ever reached through their owning list master, as its creator.
fn load_list_master(
    conn: &Connection,
    caller: &Caller,
    id: MasterId,
) -> Result<ListMaster, StoreError> {
    match load_master(conn, caller, id, Access::Creator)? {
        Master::List(list) => Ok(list),
        Master::Agent(_) => Err(StoreError::Validation(LIST_ONLY.to_string())),
    }
}

impl SqliteStore {
    /// The caller's masters of one type, oldest first.
    pub fn list_masters(
        &self,
        caller: &Caller,
        master_type: MasterType,
    ) -> Result<Vec<MasterSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, master_type, name, description, created_at_ms
            FROM masters
            WHERE creator_id = ?1 AND master_type = ?2
            ORDER BY id ASC
            "#,
        )?;
        let rows = stmt.query_map(params![caller.user_id.get(), master_type.as_str()], |row| {
            Ok(MasterSummary {
                id: MasterId::new(row.get(0)?),
                master_type: master_type_column(row, 1)?,
                name: row.get(2)?,
                description: row.get(3)?,
                created_at_ms: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get_master(
        &self,
        caller: &Caller,
        id: MasterId,
        access: Access,
    ) -> Result<Master, StoreError> {
        load_master(&self.conn, caller, id, access)
    }
}
