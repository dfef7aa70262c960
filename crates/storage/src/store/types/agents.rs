#![forbid(unsafe_code)]

use ic_core::catalog::Vendor;
use ic_core::ids::{AgentId, MasterAgentId, ModelId, UserId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AgentModelRow {
    pub id: ModelId,
    pub name: String,
    pub vendor: Vendor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AgentRow {
    pub id: AgentId,
    pub creator_id: UserId,
    pub username: String,
    pub created_at_ms: i64,
    pub name: String,
    pub description: String,
    pub model_id: ModelId,
    pub model: String,
    pub vendor: Vendor,
    pub role: String,
    pub instructions: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterAgentRow {
    pub id: MasterAgentId,
    pub creator_id: UserId,
    pub username: String,
    pub created_at_ms: i64,
    pub name: String,
    pub description: String,
    pub model: String,
    pub vendor: Vendor,
    pub role: String,
    pub instructions: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterAgentSummary {
    pub id: MasterAgentId,
    pub created_at_ms: i64,
    pub name: String,
    pub description: String,
}
