#![forbid(unsafe_code)]

use super::load_master;
use crate::store::{Master, SqliteStore, StoreError};
use ic_core::ids::MasterId;
use ic_core::model::{Access, Caller};
use rusqlite::params;

// Order matters: the relation rows are the only way back to the children.
const DELETE_LIST_CHILDREN: [&str; 5] = [
    "DELETE FROM master_details WHERE id IN \
       (SELECT master_detail_id FROM master_detail_relations WHERE master_id = ?1)",
    "DELETE FROM master_items WHERE id IN \
       (SELECT master_item_id FROM master_item_relations WHERE master_id = ?1)",
    "DELETE FROM master_item_detail_relations WHERE \
       master_item_id IN (SELECT master_item_id FROM master_item_relations WHERE master_id = ?1) \
       OR master_detail_id IN (SELECT master_detail_id FROM master_detail_relations WHERE master_id = ?1)",
    "DELETE FROM master_item_relations WHERE master_id = ?1",
    "DELETE FROM master_detail_relations WHERE master_id = ?1",
];

impl SqliteStore {
    /// Removes the master with everything it owns and nothing else.
    pub fn delete_master(&mut self, caller: &Caller, id: MasterId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        // Hydrating first refuses a cascade over details or items another master links to.
        let master = load_master(&tx, caller, id, Access::Creator)?;

        let mut removed = 0usize;
        match &master {
            Master::List(_) => {
                for sql in DELETE_LIST_CHILDREN {
                    removed += tx.execute(sql, params![id.get()])?;
                }
            }
            Master::Agent(agent) => {
                removed += tx.execute(
                    "DELETE FROM master_agents WHERE id = ?1",
                    params![agent.master_agent_id.get()],
                )?;
                removed += tx.execute(
                    "DELETE FROM master_agent_relations WHERE master_id = ?1",
                    params![id.get()],
                )?;
            }
        }
        tx.execute("DELETE FROM masters WHERE id = ?1", params![id.get()])?;
        tx.commit()?;

        tracing::info!(master_id = %id, master_type = master.master_type().as_str(), removed, "master deleted");
        Ok(())
    }
}
