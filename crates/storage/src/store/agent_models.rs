#![forbid(unsafe_code)]

use super::support::vendor_column;
use super::{AgentModelRow, SqliteStore, StoreError};
use ic_core::ids::ModelId;

impl SqliteStore {
    /// Models offered on the agent form, in catalog order.
    pub fn list_agent_models(&self) -> Result<Vec<AgentModelRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, provider FROM agent_models ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(AgentModelRow {
                id: ModelId::new(row.get(0)?),
                name: row.get(1)?,
                vendor: vendor_column(row, 2)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
