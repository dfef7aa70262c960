#![forbid(unsafe_code)]

use ic_core::fields::ModelConfigFields;
use ic_core::ids::DetailId;
use ic_core::model::MasterType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewMaster {
    List(MasterFields),
    /// The master row takes name and description; the rest configures the wrapped agent.
    Agent(ModelConfigFields),
}

impl NewMaster {
    pub fn master_type(&self) -> MasterType {
        match self {
            NewMaster::List(_) => MasterType::List,
            NewMaster::Agent(_) => MasterType::Agent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MasterUpdate {
    List(MasterFields),
    Agent(ModelConfigFields),
}

impl MasterUpdate {
    pub fn master_type(&self) -> MasterType {
        match self {
            MasterUpdate::List(_) => MasterType::List,
            MasterUpdate::Agent(_) => MasterType::Agent,
        }
    }
}

/// Item form: a name plus one content value per detail of the master, keyed by detail id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    #[serde(default)]
    pub contents: BTreeMap<DetailId, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
