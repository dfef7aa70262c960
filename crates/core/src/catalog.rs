#![forbid(unsafe_code)]

//! Static registry of the language models agents may reference.

use crate::ids::ModelId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "google")]
    Google,
}

impl Vendor {
    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::OpenAi => "openai",
            Vendor::Anthropic => "anthropic",
            Vendor::Google => "google",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "openai" => Some(Vendor::OpenAi),
            "anthropic" => Some(Vendor::Anthropic),
            "google" => Some(Vendor::Google),
            _ => None,
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelEntry {
    pub id: i64,
    pub name: &'static str,
    pub vendor: Vendor,
}

impl ModelEntry {
    pub fn model_id(&self) -> ModelId {
        ModelId::new(self.id)
    }
}

/// Ids are persisted in `agent_models`; append new entries, never renumber.
pub const MODEL_CATALOG: &[ModelEntry] = &[
    ModelEntry { id: 1, name: "gpt-4.1-mini", vendor: Vendor::OpenAi },
    ModelEntry { id: 2, name: "gpt-4.1", vendor: Vendor::OpenAi },
    ModelEntry { id: 3, name: "claude-3-5-haiku-latest", vendor: Vendor::Anthropic },
    ModelEntry { id: 4, name: "claude-3-7-sonnet-latest", vendor: Vendor::Anthropic },
    ModelEntry { id: 5, name: "gemini-2.0-flash", vendor: Vendor::Google },
    ModelEntry { id: 6, name: "gemini-2.0-flash-lite", vendor: Vendor::Google },
    ModelEntry { id: 7, name: "gemini-1.5-flash", vendor: Vendor::Google },
    ModelEntry { id: 8, name: "gemini-1.5-flash-8b", vendor: Vendor::Google },
    ModelEntry { id: 9, name: "gemini-1.5-pro", vendor: Vendor::Google },
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Model not recognized as a supported model.")]
pub struct ModelNotRecognized {
    pub model: String,
}

/// Exact match only; identifiers are not normalized.
pub fn classify_model(model: &str) -> Result<Vendor, ModelNotRecognized> {
    model_by_name(model)
        .map(|entry| entry.vendor)
        .ok_or_else(|| ModelNotRecognized {
            model: model.to_string(),
        })
}

pub fn model_by_name(model: &str) -> Option<&'static ModelEntry> {
    MODEL_CATALOG.iter().find(|entry| entry.name == model)
}

pub fn model_by_id(id: ModelId) -> Option<&'static ModelEntry> {
    MODEL_CATALOG.iter().find(|entry| entry.id == id.get())
}
