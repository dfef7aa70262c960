#![forbid(unsafe_code)]

use ic_core::ids::UserId;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: UserId,
    pub username: String,
    pub created_at_ms: i64,
}
