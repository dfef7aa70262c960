#![forbid(unsafe_code)]

use super::load_list_master;
use crate::store::support::now_ms;
use crate::store::{DetailFields, MasterDetail, SqliteStore, StoreError};
use ic_core::fields::require_name;
use ic_core::ids::{DetailId, MasterId};
use ic_core::model::Caller;
use rusqlite::params;

impl SqliteStore {
    /// Every existing item gets an empty cell for the new detail.
    pub fn add_detail(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        fields: &DetailFields,
    ) -> Result<MasterDetail, StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        require_name(&fields.name)?;

        tx.execute(
            r#"
            INSERT INTO master_details(creator_id, created_at_ms, name, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![caller.user_id.get(), now_ms(), fields.name, fields.description],
        )?;
        let detail = DetailId::new(tx.last_insert_rowid());
        tx.execute(
            "INSERT INTO master_detail_relations(master_id, master_detail_id) VALUES (?1, ?2)",
            params![master_id.get(), detail.get()],
        )?;
        {
            let mut backfill = tx.prepare(
                "INSERT INTO master_item_detail_relations(master_item_id, master_detail_id, content) \
                 VALUES (?1, ?2, '')",
            )?;
            for item in &list.items {
                backfill.execute(params![item.id.get(), detail.get()])?;
            }
        }

        let created = load_list_master(&tx, caller, master_id)?
            .detail(detail)
            .cloned()
            .ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::info!(master_id = %master_id, detail_id = %detail, backfilled = list.items.len(), "detail added");
        Ok(created)
    }

    pub fn get_detail(
        &self,
        caller: &Caller,
        master_id: MasterId,
        detail: DetailId,
    ) -> Result<MasterDetail, StoreError> {
        load_list_master(&self.conn, caller, master_id)?
            .detail(detail)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn edit_detail(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        detail: DetailId,
        fields: &DetailFields,
    ) -> Result<MasterDetail, StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        if list.detail(detail).is_none() {
            return Err(StoreError::NotFound);
        }
        require_name(&fields.name)?;

        tx.execute(
            "UPDATE master_details SET name = ?2, description = ?3 WHERE id = ?1",
            params![detail.get(), fields.name, fields.description],
        )?;
        let edited = load_list_master(&tx, caller, master_id)?
            .detail(detail)
            .cloned()
            .ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::debug!(master_id = %master_id, detail_id = %detail, "detail edited");
        Ok(edited)
    }

    /// Drops the column: the detail, its cells in every item, and its link.
    pub fn delete_detail(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        detail: DetailId,
    ) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        if list.detail(detail).is_none() {
            return Err(StoreError::NotFound);
        }

        tx.execute("DELETE FROM master_details WHERE id = ?1", params![detail.get()])?;
        let cells = tx.execute(
            "DELETE FROM master_item_detail_relations WHERE master_detail_id = ?1",
            params![detail.get()],
        )?;
        tx.execute(
            "DELETE FROM master_detail_relations WHERE master_id = ?1 AND master_detail_id = ?2",
            params![master_id.get(), detail.get()],
        )?;
        tx.commit()?;

        tracing::info!(master_id = %master_id, detail_id = %detail, cells, "detail deleted");
        Ok(())
    }
}
