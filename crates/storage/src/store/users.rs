#![forbid(unsafe_code)]

use super::support::{is_constraint_violation, now_ms};
use super::{SqliteStore, StoreError, UserRow};
use ic_core::ids::UserId;
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Registration lives with the auth collaborator; the store only needs the row
    /// so creator joins resolve a username.
    pub fn create_user(&mut self, username: &str) -> Result<UserRow, StoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::Validation("Username is required.".to_string()));
        }

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;
        if let Err(err) = tx.execute(
            "INSERT INTO users(username, created_at_ms) VALUES (?1, ?2)",
            params![username, now_ms],
        ) {
            if is_constraint_violation(&err) {
                return Err(StoreError::Conflict(format!(
                    "User {username} is already registered."
                )));
            }
            return Err(err.into());
        }
        let id = UserId::new(tx.last_insert_rowid());
        tx.commit()?;

        tracing::info!(user_id = %id, "user created");
        Ok(UserRow {
            id,
            username: username.to_string(),
            created_at_ms: now_ms,
        })
    }

    pub fn user_by_id(&self, id: UserId) -> Result<Option<UserRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, username, created_at_ms FROM users WHERE id = ?1",
                params![id.get()],
                |row| {
                    Ok(UserRow {
                        id: UserId::new(row.get(0)?),
                        username: row.get(1)?,
                        created_at_ms: row.get(2)?,
                    })
                },
            )
            .optional()?)
    }
}
