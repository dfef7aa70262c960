#![forbid(unsafe_code)]

//! Submitted field sets and the validation rules that gate every write.
//!
//! Each rule reports a single combined message for the first field group that
//! fails; the message is shown to the user as-is.

use crate::catalog::{ModelEntry, ModelNotRecognized, Vendor, classify_model, model_by_id};
use crate::ids::ModelId;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required.";
pub const AGENT_FIELDS_REQUIRED: &str = "Name, model, role, and instructions are all required.";
pub const AGENT_MASTER_FIELDS_REQUIRED: &str =
    "Model, name, role, and instructions are all required.";
pub const CONTENT_REQUIRED: &str = "Content is required for every detail.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0}")]
    Required(&'static str),
    #[error(transparent)]
    Model(#[from] ModelNotRecognized),
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn require_name(name: &str) -> Result<(), FieldError> {
    if blank(name) {
        return Err(FieldError::Required(NAME_REQUIRED));
    }
    Ok(())
}

/// Standalone agent form. The model is picked from the catalog by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub model_id: Option<ModelId>,
    pub role: String,
    pub instructions: String,
}

impl AgentFields {
    pub fn validate(&self) -> Result<&'static ModelEntry, FieldError> {
        let model = self.model_id.and_then(model_by_id);
        match model {
            Some(model) if !blank(&self.name) && !blank(&self.role) && !blank(&self.instructions) => {
                Ok(model)
            }
            _ => Err(FieldError::Required(AGENT_FIELDS_REQUIRED)),
        }
    }
}

/// Name plus model configuration, shared by master agents and agent masters.
/// The model is a raw identifier that must classify through the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfigFields {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub model: String,
    pub role: String,
    pub instructions: String,
}

impl ModelConfigFields {
    /// Missing fields win over an unrecognized model.
    pub fn validate(&self, required_message: &'static str) -> Result<Vendor, FieldError> {
        if [&self.name, &self.model, &self.role, &self.instructions]
            .into_iter()
            .any(|value| blank(value))
        {
            return Err(FieldError::Required(required_message));
        }
        Ok(classify_model(&self.model)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(model: &str) -> ModelConfigFields {
        ModelConfigFields {
            name: "master name".to_string(),
            description: String::new(),
            model: model.to_string(),
            role: "Testing Agent".to_string(),
            instructions: "Reply with one word: 'Working'.".to_string(),
        }
    }

    #[test]
    fn name_is_required() {
        assert_eq!(
            require_name("  ").unwrap_err().to_string(),
            "Name is required."
        );
        assert!(require_name("I1").is_ok());
    }

    #[test]
    fn model_config_reports_vendor() {
        assert_eq!(
            config("gemini-1.5-pro").validate(AGENT_MASTER_FIELDS_REQUIRED),
            Ok(Vendor::Google)
        );
    }

    #[test]
    fn missing_fields_take_precedence_over_unknown_model() {
        let mut fields = config("blah");
        fields.role.clear();
        assert_eq!(
            fields.validate(AGENT_MASTER_FIELDS_REQUIRED).unwrap_err(),
            FieldError::Required(AGENT_MASTER_FIELDS_REQUIRED)
        );

        let err = config("blah")
            .validate(AGENT_MASTER_FIELDS_REQUIRED)
            .unwrap_err();
        assert_eq!(err.to_string(), "Model not recognized as a supported model.");

        let err = config("").validate(AGENT_FIELDS_REQUIRED).unwrap_err();
        assert_eq!(err.to_string(), AGENT_FIELDS_REQUIRED);
    }

    #[test]
    fn agent_fields_require_a_catalog_model() {
        let mut fields = AgentFields {
            name: "agent".to_string(),
            description: String::new(),
            model_id: Some(ModelId::new(3)),
            role: "role".to_string(),
            instructions: "do things".to_string(),
        };
        assert_eq!(fields.validate().map(|entry| entry.vendor), Ok(Vendor::Anthropic));

        fields.model_id = Some(ModelId::new(99));
        assert_eq!(
            fields.validate().unwrap_err(),
            FieldError::Required(AGENT_FIELDS_REQUIRED)
        );

        fields.model_id = Some(ModelId::new(1));
        fields.instructions = String::new();
        assert_eq!(
            fields.validate().unwrap_err(),
            FieldError::Required(AGENT_FIELDS_REQUIRED)
        );
    }
}
