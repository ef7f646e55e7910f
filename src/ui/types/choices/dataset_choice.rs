use crate::ui::types::choices::{UIChoice, params_value};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SchemaFileParameters {
    #[schemars(
        with = "String",
        title = "Schema Path",
        description = "JSON file describing the columns, their domains and the class column",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["json"]
        )
    )]
    pub schema_path: PathBuf,

    #[schemars(
        with = "String",
        title = "Data Path",
        description = "Comma separated data file, one instance per line",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["data", "csv", "txt"]
        )
    )]
    pub data_path: PathBuf,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Seed for replacing unknown '?' values")]
    pub seed: u64,
}

impl Default for SchemaFileParameters {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::new(),
            data_path: PathBuf::new(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HouseVotesParameters {
    #[schemars(
        with = "String",
        title = "Data Path",
        description = "house-votes-84.data: class first, then sixteen y/n/? votes",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["data", "csv", "txt"]
        )
    )]
    pub data_path: PathBuf,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Seed for replacing unknown '?' values")]
    pub seed: u64,
}

impl Default for HouseVotesParameters {
    fn default() -> Self {
        Self {
            data_path: PathBuf::new(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(DatasetKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum DatasetChoice {
    #[strum_discriminants(strum(
        message = "Schema File",
        detailed_message = "Any categorical or discretized dataset described by a JSON schema."
    ))]
    SchemaFile(SchemaFileParameters),

    #[strum_discriminants(strum(
        message = "Congressional Voting Records",
        detailed_message = "The 1984 house votes data with its built-in schema."
    ))]
    HouseVotes(HouseVotesParameters),
}

impl UIChoice for DatasetChoice {
    type Kind = DatasetKind;

    fn schema() -> Schema {
        schema_for!(DatasetChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a dataset:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            DatasetKind::SchemaFile => params_value(SchemaFileParameters::default()),
            DatasetKind::HouseVotes => params_value(HouseVotesParameters::default()),
        }
    }
}
