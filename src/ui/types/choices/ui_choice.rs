use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Contract for any “choice enum”
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Default `params` JSON for a given kind (usually from `*Parameters::default()`).
    fn default_params(kind: Self::Kind) -> Value;

    /// Optional hook to collect nested choices (learner, dataset, evaluator)
    /// that the flat field walk cannot express. Default: none.
    fn subprompts<D: crate::ui::cli::drivers::PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }
}

/// Serializes a parameter struct for [`UIChoice::default_params`]; an empty
/// object if it cannot be represented as JSON.
pub fn params_value<T: Serialize>(params: T) -> Value {
    serde_json::to_value(params).unwrap_or_else(|_| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{LearnerChoice, LearnerKind};

    #[test]
    fn from_parts_reports_bad_params() {
        let err = LearnerChoice::from_parts(LearnerKind::KNearestNeighbor, json!({"k": "many"}));
        assert!(err.is_err());
    }

    #[test]
    fn params_value_of_unit_struct_is_empty_object() {
        #[derive(Serialize)]
        struct Empty {}
        assert_eq!(params_value(Empty {}), json!({}));
    }
}
