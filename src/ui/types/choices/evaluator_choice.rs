use crate::ui::types::choices::{UIChoice, params_value};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EvaluatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EvaluatorChoice {
    #[strum_discriminants(strum(
        message = "Basic Classification",
        detailed_message = "Accuracy and kappa pooled over all folds, optionally macro P/R/F1."
    ))]
    BasicClassification(BasicClassificationParameters),
}

impl Default for EvaluatorChoice {
    fn default() -> Self {
        Self::BasicClassification(BasicClassificationParameters::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct BasicClassificationParameters {
    #[serde(default)]
    #[schemars(
        title = "Precision/Recall summary",
        description = "Include macro precision, recall and F1 in the report?"
    )]
    pub precision_recall_output: bool,
}

impl UIChoice for EvaluatorChoice {
    type Kind = EvaluatorKind;

    fn schema() -> Schema {
        schema_for!(EvaluatorChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose an evaluator:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            EvaluatorKind::BasicClassification => {
                params_value(BasicClassificationParameters::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::EnumMessage;

    #[test]
    fn serde_missing_fields_apply_defaults() {
        let p: BasicClassificationParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, BasicClassificationParameters::default());
    }

    #[test]
    fn tagged_enum_serialization_evaluator_choice() {
        let v = serde_json::to_value(EvaluatorChoice::default()).unwrap();
        assert_eq!(
            v,
            json!({"type": "basic-classification", "params": {"precision_recall_output": false}})
        );
    }

    #[test]
    fn default_params_matches_struct_default() {
        let v = <EvaluatorChoice as UIChoice>::default_params(EvaluatorKind::BasicClassification);
        let rebuilt =
            <EvaluatorChoice as UIChoice>::from_parts(EvaluatorKind::BasicClassification, v)
                .unwrap();
        assert_eq!(rebuilt, EvaluatorChoice::default());
    }

    #[test]
    fn discriminant_messages_available() {
        assert_eq!(
            EvaluatorKind::BasicClassification.get_message(),
            Some("Basic Classification")
        );
    }
}
