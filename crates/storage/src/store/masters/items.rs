#![forbid(unsafe_code)]

use super::load_list_master;
use crate::store::support::now_ms;
use crate::store::{ItemFields, ItemView, ListMaster, MasterDetail, SqliteStore, StoreError};
use ic_core::fields::{CONTENT_REQUIRED, FieldError, require_name};
use ic_core::ids::{DetailId, ItemId, MasterId};
use ic_core::model::Caller;
use rusqlite::{Connection, params};
use std::collections::BTreeMap;

/// One value per detail of the master. Keys for details outside the master are ignored.
fn cells_for<'a>(
    details: &[MasterDetail],
    contents: &'a BTreeMap<DetailId, String>,
) -> Result<Vec<(DetailId, &'a str)>, StoreError> {
    details
        .iter()
        .map(|detail| {
            contents
                .get(&detail.id)
                .map(|content| (detail.id, content.as_str()))
                .ok_or_else(|| StoreError::from(FieldError::Required(CONTENT_REQUIRED)))
        })
        .collect()
}

fn upsert_cells_tx(
    conn: &Connection,
    item: ItemId,
    cells: &[(DetailId, &str)],
) -> Result<(), StoreError> {
    let mut stmt = conn.prepare(
        r#"
        INSERT INTO master_item_detail_relations(master_item_id, master_detail_id, content)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(master_item_id, master_detail_id) DO UPDATE SET content = excluded.content
        "#,
    )?;
    for (detail, content) in cells {
        stmt.execute(params![item.get(), detail.get(), content])?;
    }
    Ok(())
}

fn view_of(list: ListMaster, item: ItemId) -> Result<ItemView, StoreError> {
    let ListMaster {
        base,
        details,
        items,
    } = list;
    let item = items
        .into_iter()
        .find(|candidate| candidate.id == item)
        .ok_or(StoreError::NotFound)?;
    Ok(ItemView {
        master_id: base.id,
        item,
        details,
    })
}

impl SqliteStore {
    pub fn add_item(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        fields: &ItemFields,
    ) -> Result<ItemView, StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        require_name(&fields.name)?;
        let cells = cells_for(&list.details, &fields.contents)?;

        tx.execute(
            "INSERT INTO master_items(creator_id, created_at_ms, name) VALUES (?1, ?2, ?3)",
            params![caller.user_id.get(), now_ms(), fields.name],
        )?;
        let item = ItemId::new(tx.last_insert_rowid());
        tx.execute(
            "INSERT INTO master_item_relations(master_id, master_item_id) VALUES (?1, ?2)",
            params![master_id.get(), item.get()],
        )?;
        upsert_cells_tx(&tx, item, &cells)?;

        let view = view_of(load_list_master(&tx, caller, master_id)?, item)?;
        tx.commit()?;

        tracing::info!(master_id = %master_id, item_id = %item, cells = cells.len(), "item added");
        Ok(view)
    }

    pub fn get_item(
        &self,
        caller: &Caller,
        master_id: MasterId,
        item: ItemId,
    ) -> Result<ItemView, StoreError> {
        view_of(load_list_master(&self.conn, caller, master_id)?, item)
    }

    /// Rewrites the name and every cell. A missing cell is recreated.
    pub fn edit_item(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        item: ItemId,
        fields: &ItemFields,
    ) -> Result<ItemView, StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        if list.item(item).is_none() {
            return Err(StoreError::NotFound);
        }
        require_name(&fields.name)?;
        let cells = cells_for(&list.details, &fields.contents)?;

        tx.execute(
            "UPDATE master_items SET name = ?2 WHERE id = ?1",
            params![item.get(), fields.name],
        )?;
        upsert_cells_tx(&tx, item, &cells)?;

        let view = view_of(load_list_master(&tx, caller, master_id)?, item)?;
        tx.commit()?;

        tracing::debug!(master_id = %master_id, item_id = %item, "item edited");
        Ok(view)
    }

    pub fn delete_item(
        &mut self,
        caller: &Caller,
        master_id: MasterId,
        item: ItemId,
    ) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let list = load_list_master(&tx, caller, master_id)?;
        if list.item(item).is_none() {
            return Err(StoreError::NotFound);
        }

        tx.execute("DELETE FROM master_items WHERE id = ?1", params![item.get()])?;
        let cells = tx.execute(
            "DELETE FROM master_item_detail_relations WHERE master_item_id = ?1",
            params![item.get()],
        )?;
        tx.execute(
            "DELETE FROM master_item_relations WHERE master_id = ?1 AND master_item_id = ?2",
            params![master_id.get(), item.get()],
        )?;
        tx.commit()?;

        tracing::info!(master_id = %master_id, item_id = %item, cells, "item deleted");
        Ok(())
    }
}
