#![forbid(unsafe_code)]

use crate::store::support::vendor_column;
use crate::store::{AgentMaster, ListMaster, MasterBase, MasterDetail, MasterItem, StoreError};
use ic_core::ids::{DetailId, ItemId, MasterAgentId};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;

/// Details or items linked to this master and to some other master too.
fn shared_children(conn: &Connection, base: &MasterBase) -> Result<i64, StoreError> {
    Ok(conn.query_row(
        r#"
        SELECT COUNT(*) FROM (
          SELECT master_detail_id FROM master_detail_relations
          WHERE master_id != ?1
            AND master_detail_id IN (SELECT master_detail_id FROM master_detail_relations WHERE master_id = ?1)
          UNION ALL
          SELECT master_item_id FROM master_item_relations
          WHERE master_id != ?1
            AND master_item_id IN (SELECT master_item_id FROM master_item_relations WHERE master_id = ?1)
        )
        "#,
        params![base.id.get()],
        |row| row.get(0),
    )?)
}

fn details_of(conn: &Connection, base: &MasterBase) -> Result<Vec<MasterDetail>, StoreError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT d.id, d.name, d.description, d.created_at_ms
        FROM master_details d
        JOIN master_detail_relations r ON r.master_detail_id = d.id
        WHERE r.master_id = ?1
        ORDER BY d.id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![base.id.get()], |row| {
        Ok(MasterDetail {
            id: DetailId::new(row.get(0)?),
            name: row.get(1)?,
            description: row.get(2)?,
            created_at_ms: row.get(3)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn items_of(
    conn: &Connection,
    base: &MasterBase,
) -> Result<Vec<(ItemId, String, String, i64)>, StoreError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT i.id, i.name, u.username, i.created_at_ms
        FROM master_items i
        JOIN master_item_relations r ON r.master_item_id = i.id
        JOIN users u ON u.id = i.creator_id
        WHERE r.master_id = ?1
        ORDER BY i.id ASC
        "#,
    )?;
    let rows = stmt.query_map(params![base.id.get()], |row| {
        Ok((
            ItemId::new(row.get(0)?),
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
        ))
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Details and items ascend by id; each item's contents follow the detail order.
pub(super) fn list_master(conn: &Connection, base: MasterBase) -> Result<ListMaster, StoreError> {
    let shared = shared_children(conn, &base)?;
    if shared > 0 {
        return Err(StoreError::Invariant(format!(
            "master {} shares {shared} detail or item link(s) with another master",
            base.id
        )));
    }

    let details = details_of(conn, &base)?;
    let item_rows = items_of(conn, &base)?;

    let columns: HashMap<DetailId, usize> = details
        .iter()
        .enumerate()
        .map(|(column, detail)| (detail.id, column))
        .collect();
    let lines: HashMap<ItemId, usize> = item_rows
        .iter()
        .enumerate()
        .map(|(line, (id, ..))| (*id, line))
        .collect();
    let mut grid: Vec<Vec<Option<String>>> = vec![vec![None; details.len()]; item_rows.len()];

    let mut stmt = conn.prepare(
        r#"
        SELECT c.master_item_id, c.master_detail_id, c.content
        FROM master_item_detail_relations c
        WHERE c.master_detail_id IN (
          SELECT master_detail_id FROM master_detail_relations WHERE master_id = ?1
        )
        "#,
    )?;
    let mut rows = stmt.query(params![base.id.get()])?;
    while let Some(row) = rows.next()? {
        let item = ItemId::new(row.get(0)?);
        let detail = DetailId::new(row.get(1)?);
        let content: String = row.get(2)?;
        match (lines.get(&item), columns.get(&detail)) {
            (Some(&line), Some(&column)) => grid[line][column] = Some(content),
            _ => {
                return Err(StoreError::Invariant(format!(
                    "content for item {item} under detail {detail} is outside master {}",
                    base.id
                )));
            }
        }
    }

    let mut items = Vec::with_capacity(item_rows.len());
    for ((id, name, username, created_at_ms), cells) in item_rows.into_iter().zip(grid) {
        let contents = cells
            .into_iter()
            .zip(&details)
            .map(|(cell, detail)| {
                cell.unwrap_or_else(|| {
                    tracing::warn!(master_id = %base.id, item_id = %id, detail_id = %detail.id, "missing content cell");
                    String::new()
                })
            })
            .collect();
        items.push(MasterItem {
            id,
            name,
            username,
            created_at_ms,
            contents,
        });
    }

    Ok(ListMaster {
        base,
        details,
        items,
    })
}

pub(super) fn agent_master(conn: &Connection, base: MasterBase) -> Result<AgentMaster, StoreError> {
    let payload = conn
        .query_row(
            r#"
            SELECT a.id, a.model, a.vendor, a.role, a.instructions
            FROM master_agent_relations r
            JOIN master_agents a ON a.id = r.master_agent_id
            WHERE r.master_id = ?1
            "#,
            params![base.id.get()],
            |row| {
                Ok((
                    MasterAgentId::new(row.get(0)?),
                    row.get::<_, String>(1)?,
                    vendor_column(row, 2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()?;
    let Some((master_agent_id, model, vendor, role, instructions)) = payload else {
        return Err(StoreError::Invariant(format!(
            "agent master {} has no master agent",
            base.id
        )));
    };
    Ok(AgentMaster {
        base,
        master_agent_id,
        model,
        vendor,
        role,
        instructions,
    })
}
