use crate::tasks::ReportFormat;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{DatasetChoice, EvaluatorChoice, LearnerChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_folds() -> usize {
    5
}
fn default_seed() -> u64 {
    42
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CrossValidationParams {
    #[schemars(skip)]
    pub learner: LearnerChoice,
    #[schemars(skip)]
    pub dataset: DatasetChoice,
    #[serde(default)]
    #[schemars(skip)]
    pub evaluator: EvaluatorChoice,

    #[serde(default = "default_folds")]
    #[schemars(
        title = "Folds",
        description = "Number of train/test partitions",
        range(min = 2)
    )]
    pub folds: usize,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Seed of the fold shuffle")]
    pub seed: u64,

    #[serde(default)]
    #[schemars(
        with = "Option<String>",
        title = "Report Path",
        description = "Write the per-fold report here",
        extend("format" = "path", "x-file" = true)
    )]
    pub report_path: Option<PathBuf>,

    #[serde(default)]
    #[schemars(title = "Report Format", description = "csv, tsv or json")]
    pub report_format: ReportFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Cross-Validate",
        detailed_message = "k-fold cross-validation of one learner over one dataset."
    ))]
    CrossValidate(CrossValidationParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::CrossValidate => json!({
                "folds": default_folds(),
                "seed": default_seed(),
                "report_path": null,
                "report_format": "csv",
            }),
        }
    }

    fn subprompts<D: crate::ui::cli::drivers::PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::CrossValidate => {
                let learner = prompt_choice::<LearnerChoice, _>(driver)?;
                let dataset = prompt_choice::<DatasetChoice, _>(driver)?;
                let eval = prompt_choice::<EvaluatorChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("learner".into(), serde_json::to_value(learner)?);
                m.insert("dataset".into(), serde_json::to_value(dataset)?);
                m.insert("evaluator".into(), serde_json::to_value(eval)?);
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::CrossValidate => {
                let p: CrossValidationParams = serde_json::from_value(params)?;
                Ok(TaskChoice::CrossValidate(p))
            }
        }
    }
}
