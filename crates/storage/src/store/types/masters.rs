#![forbid(unsafe_code)]

use ic_core::catalog::Vendor;
use ic_core::ids::{DetailId, ItemId, MasterAgentId, MasterId, UserId};
use ic_core::model::MasterType;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterSummary {
    pub id: MasterId,
    pub master_type: MasterType,
    pub name: String,
    pub description: String,
    pub created_at_ms: i64,
}

/// Columns every master carries regardless of its type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterBase {
    pub id: MasterId,
    pub creator_id: UserId,
    pub username: String,
    pub created_at_ms: i64,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterDetail {
    pub id: DetailId,
    pub name: String,
    pub description: String,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MasterItem {
    pub id: ItemId,
    pub name: String,
    pub username: String,
    pub created_at_ms: i64,
    /// One cell per detail, in the order of `ListMaster::details`.
    pub contents: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListMaster {
    #[serde(flatten)]
    pub base: MasterBase,
    pub details: Vec<MasterDetail>,
    pub items: Vec<MasterItem>,
}

impl ListMaster {
    pub fn item(&self, id: ItemId) -> Option<&MasterItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn detail(&self, id: DetailId) -> Option<&MasterDetail> {
        self.details.iter().find(|detail| detail.id == id)
    }

    /// Content of one cell, addressed by item and detail.
    pub fn content(&self, item: ItemId, detail: DetailId) -> Option<&str> {
        let column = self.details.iter().position(|d| d.id == detail)?;
        self.item(item)?
            .contents
            .get(column)
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AgentMaster {
    #[serde(flatten)]
    pub base: MasterBase,
    pub master_agent_id: MasterAgentId,
    pub model: String,
    pub vendor: Vendor,
    pub role: String,
    pub instructions: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "master_type", rename_all = "lowercase")]
pub enum Master {
    List(ListMaster),
    Agent(AgentMaster),
}

impl Master {
    pub fn base(&self) -> &MasterBase {
        match self {
            Master::List(list) => &list.base,
            Master::Agent(agent) => &agent.base,
        }
    }

    pub fn id(&self) -> MasterId {
        self.base().id
    }

    pub fn master_type(&self) -> MasterType {
        match self {
            Master::List(_) => MasterType::List,
            Master::Agent(_) => MasterType::Agent,
        }
    }

    pub fn as_list(&self) -> Option<&ListMaster> {
        match self {
            Master::List(list) => Some(list),
            Master::Agent(_) => None,
        }
    }

    pub fn as_agent(&self) -> Option<&AgentMaster> {
        match self {
            Master::Agent(agent) => Some(agent),
            Master::List(_) => None,
        }
    }
}

/// A single item together with the column headers its contents line up with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub master_id: MasterId,
    pub item: MasterItem,
    pub details: Vec<MasterDetail>,
}
