use crate::ui::types::choices::{UIChoice, params_value};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_pruning_fraction() -> f64 {
    0.2
}
fn default_k() -> usize {
    5
}
fn default_exponent() -> u32 {
    1
}

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Id3PrunedParameters {
    #[serde(default = "default_pruning_fraction")]
    #[schemars(
        title = "Pruning fraction",
        description = "Share of the training set held out for reduced-error pruning",
        range(min = 0.0, max = 1.0)
    )]
    pub pruning_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Seed of the pruning-set shuffle")]
    pub seed: u64,
}

impl Default for Id3PrunedParameters {
    fn default() -> Self {
        Self {
            pruning_fraction: default_pruning_fraction(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceChoice {
    #[default]
    Absolute,
    Signed,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KNearestNeighborParameters {
    #[serde(default = "default_k")]
    #[schemars(
        title = "Neighbours (k)",
        description = "Number of nearest neighbours that vote",
        range(min = 1)
    )]
    pub k: usize,

    #[serde(default = "default_exponent")]
    #[schemars(
        title = "Exponent (q)",
        description = "Power applied to each class-probability difference",
        range(min = 1)
    )]
    pub exponent: u32,

    #[serde(default)]
    #[schemars(
        title = "Difference",
        description = "absolute: Σ|Δ|^q per attribute; signed: (ΣΔ)^q"
    )]
    pub difference: DifferenceChoice,

    #[serde(default)]
    #[schemars(
        title = "Parallel",
        description = "Compute per-attribute probability tables and distances on the rayon pool?"
    )]
    pub parallel: bool,
}

impl Default for KNearestNeighborParameters {
    fn default() -> Self {
        Self {
            k: default_k(),
            exponent: default_exponent(),
            difference: DifferenceChoice::default(),
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "ID3 Decision Tree",
        detailed_message = "Fully grown tree, split on maximum information gain."
    ))]
    Id3(NoParams),

    #[strum_discriminants(strum(
        message = "ID3 with Reduced-Error Pruning",
        detailed_message = "Grows on part of the training set, prunes against the rest."
    ))]
    Id3Pruned(Id3PrunedParameters),

    #[strum_discriminants(strum(
        message = "k-Nearest Neighbour (VDM)",
        detailed_message = "Majority vote of the k closest instances under the value difference metric."
    ))]
    KNearestNeighbor(KNearestNeighborParameters),
}

impl UIChoice for LearnerChoice {
    type Kind = LearnerKind;

    fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a learner:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            LearnerKind::Id3 => params_value(NoParams::default()),
            LearnerKind::Id3Pruned => params_value(Id3PrunedParameters::default()),
            LearnerKind::KNearestNeighbor => params_value(KNearestNeighborParameters::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::{EnumMessage, IntoEnumIterator};

    fn root_props_of<T: JsonSchema>() -> Value {
        let v = serde_json::to_value(schema_for!(T)).expect("schema to JSON");
        v.get("properties").cloned().unwrap_or_else(|| json!({}))
    }

    #[test]
    fn kinds_use_kebab_case_names() {
        let names: Vec<&'static str> = LearnerKind::iter().map(Into::into).collect();
        assert_eq!(names, vec!["id3", "id3-pruned", "k-nearest-neighbor"]);
    }

    #[test]
    fn tagged_serialization() {
        let v = serde_json::to_value(LearnerChoice::KNearestNeighbor(
            KNearestNeighborParameters::default(),
        ))
        .unwrap();
        assert_eq!(v["type"], "k-nearest-neighbor");
        assert_eq!(v["params"]["k"], 5);
        assert_eq!(v["params"]["difference"], "absolute");

        let v = serde_json::to_value(LearnerChoice::Id3(NoParams::default())).unwrap();
        assert_eq!(v, json!({"type": "id3", "params": {}}));
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let c: LearnerChoice =
            serde_json::from_value(json!({"type": "id3-pruned", "params": {}})).unwrap();
        assert_eq!(c, LearnerChoice::Id3Pruned(Id3PrunedParameters::default()));

        let c: LearnerChoice = serde_json::from_value(
            json!({"type": "k-nearest-neighbor", "params": {"k": 3, "difference": "signed"}}),
        )
        .unwrap();
        let LearnerChoice::KNearestNeighbor(p) = c else {
            panic!("expected k-nn");
        };
        assert_eq!((p.k, p.exponent, p.difference), (3, 1, DifferenceChoice::Signed));
    }

    #[test]
    fn default_params_rebuild_the_default_choice() {
        for kind in LearnerKind::iter() {
            let params = <LearnerChoice as UIChoice>::default_params(kind);
            let rebuilt = <LearnerChoice as UIChoice>::from_parts(kind, params).unwrap();
            let expected: &'static str = kind.into();
            assert_eq!(serde_json::to_value(rebuilt).unwrap()["type"], expected);
        }
    }

    #[test]
    fn schema_has_titles() {
        let props = root_props_of::<KNearestNeighborParameters>();
        let obj = props.as_object().unwrap();
        for (key, title) in [("k", "Neighbours (k)"), ("exponent", "Exponent (q)")] {
            assert_eq!(obj[key]["title"], title);
            assert_eq!(obj[key]["minimum"].as_f64(), Some(1.0));
        }
    }

    #[test]
    fn discriminant_messages_available() {
        assert_eq!(LearnerKind::Id3.get_message(), Some("ID3 Decision Tree"));
        assert!(LearnerKind::KNearestNeighbor.get_detailed_message().is_some());
    }
}
