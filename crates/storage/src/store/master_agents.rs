#![forbid(unsafe_code)]

use super::support::{now_ms, vendor_column};
use super::{MasterAgentRow, MasterAgentSummary, SqliteStore, StoreError, check_access};
use ic_core::catalog::Vendor;
use ic_core::fields::{AGENT_FIELDS_REQUIRED, ModelConfigFields};
use ic_core::ids::{MasterAgentId, UserId};
use ic_core::model::{Access, Caller};
use rusqlite::{Connection, OptionalExtension, Row, params};

const MASTER_AGENT_SELECT: &str = "SELECT m.id, m.creator_id, u.username, m.created_at_ms, m.name, m.description, \
     m.model, m.vendor, m.role, m.instructions \
     FROM master_agents m \
     JOIN users u ON u.id = m.creator_id";

fn master_agent_from_row(row: &Row<'_>) -> rusqlite::Result<MasterAgentRow> {
    Ok(MasterAgentRow {
        id: MasterAgentId::new(row.get(0)?),
        creator_id: UserId::new(row.get(1)?),
        username: row.get(2)?,
        created_at_ms: row.get(3)?,
        name: row.get(4)?,
        description: row.get(5)?,
        model: row.get(6)?,
        vendor: vendor_column(row, 7)?,
        role: row.get(8)?,
        instructions: row.get(9)?,
    })
}

pub(super) fn fetch_master_agent(
    conn: &Connection,
    id: MasterAgentId,
) -> Result<Option<MasterAgentRow>, StoreError> {
    Ok(conn
        .query_row(
            &format!("{MASTER_AGENT_SELECT} WHERE m.id = ?1"),
            params![id.get()],
            master_agent_from_row,
        )
        .optional()?)
}

pub(super) fn insert_master_agent_tx(
    conn: &Connection,
    creator_id: UserId,
    fields: &ModelConfigFields,
    vendor: Vendor,
) -> Result<MasterAgentId, StoreError> {
    conn.execute(
        r#"
        INSERT INTO master_agents(creator_id, created_at_ms, name, description, model, vendor, role, instructions)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            creator_id.get(),
            now_ms(),
            fields.name,
            fields.description,
            fields.model,
            vendor.as_str(),
            fields.role,
            fields.instructions
        ],
    )?;
    Ok(MasterAgentId::new(conn.last_insert_rowid()))
}

/// The vendor column is always rewritten from the submitted model.
pub(super) fn update_master_agent_tx(
    conn: &Connection,
    id: MasterAgentId,
    fields: &ModelConfigFields,
    vendor: Vendor,
) -> Result<(), StoreError> {
    conn.execute(
        r#"
        UPDATE master_agents
        SET name = ?2, description = ?3, model = ?4, vendor = ?5, role = ?6, instructions = ?7
        WHERE id = ?1
        "#,
        params![
            id.get(),
            fields.name,
            fields.description,
            fields.model,
            vendor.as_str(),
            fields.role,
            fields.instructions
        ],
    )?;
    Ok(())
}

impl SqliteStore {
    pub fn list_master_agents(
        &self,
        caller: &Caller,
    ) -> Result<Vec<MasterAgentSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, created_at_ms, name, description
            FROM master_agents
            WHERE creator_id = ?1
            ORDER BY id ASC
            "#,
        )?;
        let rows = stmt.query_map(params![caller.user_id.get()], |row| {
            Ok(MasterAgentSummary {
                id: MasterAgentId::new(row.get(0)?),
                created_at_ms: row.get(1)?,
                name: row.get(2)?,
                description: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn create_master_agent(
        &mut self,
        caller: &Caller,
        fields: &ModelConfigFields,
    ) -> Result<MasterAgentRow, StoreError> {
        let vendor = fields.validate(AGENT_FIELDS_REQUIRED)?;

        let tx = self.conn.transaction()?;
        let id = insert_master_agent_tx(&tx, caller.user_id, fields, vendor)?;
        let master_agent = fetch_master_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::info!(master_agent_id = %id, %vendor, "master agent created");
        Ok(master_agent)
    }

    /// Ownership is always enforced; there is no internal bypass for master agents.
    pub fn get_master_agent(
        &self,
        caller: &Caller,
        id: MasterAgentId,
    ) -> Result<MasterAgentRow, StoreError> {
        let master_agent = fetch_master_agent(&self.conn, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, master_agent.creator_id, Access::Creator)?;
        Ok(master_agent)
    }

    pub fn update_master_agent(
        &mut self,
        caller: &Caller,
        id: MasterAgentId,
        fields: &ModelConfigFields,
    ) -> Result<MasterAgentRow, StoreError> {
        let tx = self.conn.transaction()?;
        let current = fetch_master_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, current.creator_id, Access::Creator)?;
        let vendor = fields.validate(AGENT_FIELDS_REQUIRED)?;

        update_master_agent_tx(&tx, id, fields, vendor)?;
        let master_agent = fetch_master_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::debug!(master_agent_id = %id, %vendor, "master agent updated");
        Ok(master_agent)
    }

    pub fn delete_master_agent(
        &mut self,
        caller: &Caller,
        id: MasterAgentId,
    ) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let current = fetch_master_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, current.creator_id, Access::Creator)?;

        // The payload of an agent master goes away with its master, never on its own.
        let wrapped_by: Option<i64> = tx
            .query_row(
                "SELECT master_id FROM master_agent_relations WHERE master_agent_id = ?1",
                params![id.get()],
                |row| row.get(0),
            )
            .optional()?;
        if let Some(master_id) = wrapped_by {
            tracing::warn!(master_agent_id = %id, master_id, "master agent delete refused");
            return Err(StoreError::Conflict(format!(
                "Cannot delete this master agent as it belongs to master {master_id}."
            )));
        }

        tx.execute("DELETE FROM master_agents WHERE id = ?1", params![id.get()])?;
        tx.commit()?;

        tracing::info!(master_agent_id = %id, "master agent deleted");
        Ok(())
    }
}
