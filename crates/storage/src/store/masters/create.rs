#![forbid(unsafe_code)]

use super::load_master;
use crate::store::master_agents::insert_master_agent_tx;
use crate::store::support::now_ms;
use crate::store::{Master, NewMaster, SqliteStore, StoreError};
use ic_core::fields::{AGENT_MASTER_FIELDS_REQUIRED, require_name};
use ic_core::ids::{MasterId, UserId};
use ic_core::model::{Access, Caller, MasterType};
use rusqlite::{Connection, params};

fn insert_master_tx(
    conn: &Connection,
    creator_id: UserId,
    master_type: MasterType,
    name: &str,
    description: &str,
) -> Result<MasterId, StoreError> {
    conn.execute(
        r#"
        INSERT INTO masters(creator_id, created_at_ms, master_type, name, description)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            creator_id.get(),
            now_ms(),
            master_type.as_str(),
            name,
            description
        ],
    )?;
    Ok(MasterId::new(conn.last_insert_rowid()))
}

impl SqliteStore {
    /// An agent master writes its master row, its master agent and the link
    /// between them in one transaction.
    pub fn create_master(
        &mut self,
        caller: &Caller,
        request: &NewMaster,
    ) -> Result<Master, StoreError> {
        let tx = self.conn.transaction()?;
        let id = match request {
            NewMaster::List(fields) => {
                require_name(&fields.name)?;
                insert_master_tx(
                    &tx,
                    caller.user_id,
                    MasterType::List,
                    &fields.name,
                    &fields.description,
                )?
            }
            NewMaster::Agent(fields) => {
                let vendor = fields.validate(AGENT_MASTER_FIELDS_REQUIRED)?;
                let id = insert_master_tx(
                    &tx,
                    caller.user_id,
                    MasterType::Agent,
                    &fields.name,
                    &fields.description,
                )?;
                let master_agent_id = insert_master_agent_tx(&tx, caller.user_id, fields, vendor)?;
                tx.execute(
                    "INSERT INTO master_agent_relations(master_id, master_agent_id) VALUES (?1, ?2)",
                    params![id.get(), master_agent_id.get()],
                )?;
                id
            }
        };
        let master = load_master(&tx, caller, id, Access::Creator)?;
        tx.commit()?;

        tracing::info!(master_id = %id, master_type = request.master_type().as_str(), "master created");
        Ok(master)
    }
}
