#![forbid(unsafe_code)]

use super::support::{now_ms, vendor_column};
use super::{AgentRow, SqliteStore, StoreError, check_access};
use ic_core::fields::AgentFields;
use ic_core::ids::{AgentId, ModelId, UserId};
use ic_core::model::{Access, Caller};
use rusqlite::{Connection, OptionalExtension, Row, params};

const AGENT_SELECT: &str = "SELECT a.id, a.creator_id, u.username, a.created_at_ms, a.name, a.description, \
     a.model_id, m.name, m.provider, a.role, a.instructions \
     FROM agents a \
     JOIN users u ON u.id = a.creator_id \
     JOIN agent_models m ON m.id = a.model_id";

fn agent_from_row(row: &Row<'_>) -> rusqlite::Result<AgentRow> {
    Ok(AgentRow {
        id: AgentId::new(row.get(0)?),
        creator_id: UserId::new(row.get(1)?),
        username: row.get(2)?,
        created_at_ms: row.get(3)?,
        name: row.get(4)?,
        description: row.get(5)?,
        model_id: ModelId::new(row.get(6)?),
        model: row.get(7)?,
        vendor: vendor_column(row, 8)?,
        role: row.get(9)?,
        instructions: row.get(10)?,
    })
}

fn fetch_agent(conn: &Connection, id: AgentId) -> Result<Option<AgentRow>, StoreError> {
    Ok(conn
        .query_row(
            &format!("{AGENT_SELECT} WHERE a.id = ?1"),
            params![id.get()],
            agent_from_row,
        )
        .optional()?)
}

fn conversation_link_count_tx(conn: &Connection, id: AgentId) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        "SELECT COUNT(id) FROM conversation_agent_relations WHERE agent_id = ?1",
        params![id.get()],
        |row| row.get(0),
    )?)
}

impl SqliteStore {
    /// Every agent with its creator's username, in insertion order.
    pub fn list_agents(&self) -> Result<Vec<AgentRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AGENT_SELECT} ORDER BY a.id ASC"))?;
        let rows = stmt.query_map([], agent_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn create_agent(
        &mut self,
        caller: &Caller,
        fields: &AgentFields,
    ) -> Result<AgentRow, StoreError> {
        let model = fields.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(
            r#"
            INSERT INTO agents(creator_id, created_at_ms, name, description, model_id, role, instructions)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                caller.user_id.get(),
                now_ms(),
                fields.name,
                fields.description,
                model.id,
                fields.role,
                fields.instructions
            ],
        )?;
        let id = AgentId::new(tx.last_insert_rowid());
        let agent = fetch_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::info!(agent_id = %id, model = model.name, "agent created");
        Ok(agent)
    }

    pub fn get_agent(
        &self,
        caller: &Caller,
        id: AgentId,
        access: Access,
    ) -> Result<AgentRow, StoreError> {
        let agent = fetch_agent(&self.conn, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, agent.creator_id, access)?;
        Ok(agent)
    }

    pub fn update_agent(
        &mut self,
        caller: &Caller,
        id: AgentId,
        fields: &AgentFields,
    ) -> Result<AgentRow, StoreError> {
        let tx = self.conn.transaction()?;
        let current = fetch_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, current.creator_id, Access::Creator)?;
        let model = fields.validate()?;

        tx.execute(
            r#"
            UPDATE agents
            SET name = ?2, description = ?3, model_id = ?4, role = ?5, instructions = ?6
            WHERE id = ?1
            "#,
            params![
                id.get(),
                fields.name,
                fields.description,
                model.id,
                fields.role,
                fields.instructions
            ],
        )?;
        let agent = fetch_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        tx.commit()?;

        tracing::debug!(agent_id = %id, "agent updated");
        Ok(agent)
    }

    /// Refused while any conversation still links the agent.
    pub fn delete_agent(&mut self, caller: &Caller, id: AgentId) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        let agent = fetch_agent(&tx, id)?.ok_or(StoreError::NotFound)?;
        check_access(caller, agent.creator_id, Access::Creator)?;

        let links = conversation_link_count_tx(&tx, id)?;
        if links > 0 {
            tracing::warn!(agent_id = %id, links, "agent delete refused");
            return Err(StoreError::Conflict(format!(
                "Cannot delete this agent as it is linked to {links} conversation(s)."
            )));
        }

        tx.execute("DELETE FROM agents WHERE id = ?1", params![id.get()])?;
        tx.commit()?;

        tracing::info!(agent_id = %id, "agent deleted");
        Ok(())
    }

    pub fn conversation_link_count(&self, id: AgentId) -> Result<i64, StoreError> {
        conversation_link_count_tx(&self.conn, id)
    }
}
