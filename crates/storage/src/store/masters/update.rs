#![forbid(unsafe_code)]

use super::load_master;
use crate::store::master_agents::update_master_agent_tx;
use crate::store::{Master, MasterUpdate, SqliteStore, StoreError};
use ic_core::fields::{AGENT_MASTER_FIELDS_REQUIRED, require_name};
use ic_core::ids::MasterId;
use ic_core::model::{Access, Caller};
use rusqlite::{Connection, params};

fn rename_master_tx(
    conn: &Connection,
    id: MasterId,
    name: &str,
    description: &str,
) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE masters SET name = ?2, description = ?3 WHERE id = ?1",
        params![id.get(), name, description],
    )?;
    Ok(())
}

impl SqliteStore {
    /// The type of a master never changes; an update of the other kind is rejected.
    pub fn update_master(
        &mut self,
        caller: &Caller,
        id: MasterId,
        update: &MasterUpdate,
    ) -> Result<Master, StoreError> {
        let tx = self.conn.transaction()?;
        let current = load_master(&tx, caller, id, Access::Creator)?;
        match (&current, update) {
            (Master::List(_), MasterUpdate::List(fields)) => {
                require_name(&fields.name)?;
                rename_master_tx(&tx, id, &fields.name, &fields.description)?;
            }
            (Master::Agent(agent), MasterUpdate::Agent(fields)) => {
                let vendor = fields.validate(AGENT_MASTER_FIELDS_REQUIRED)?;
                rename_master_tx(&tx, id, &fields.name, &fields.description)?;
                update_master_agent_tx(&tx, agent.master_agent_id, fields, vendor)?;
            }
            _ => {
                return Err(StoreError::Validation(format!(
                    "Master {id} has type {}.",
                    current.master_type().as_str()
                )));
            }
        }
        let master = load_master(&tx, caller, id, Access::Creator)?;
        tx.commit()?;

        tracing::debug!(master_id = %id, "master updated");
        Ok(master)
    }
}
