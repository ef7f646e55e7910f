use crate::tasks::{CrossValidation, CrossValidationReport, FoldResult, ReportFormat};
use crate::ui::types::build::{BuildError, build_dataset, build_evaluator, build_learner};
use crate::ui::types::choices::TaskChoice;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use tracing::info;

/// A runnable task plus where its report should go.
pub struct CrossValidationJob {
    pub task: CrossValidation,
    pub report_path: Option<PathBuf>,
    pub report_format: ReportFormat,
}

impl CrossValidationJob {
    pub fn with_progress(mut self, tx: Sender<FoldResult>) -> Self {
        self.task = self.task.with_progress(tx);
        self
    }

    /// Runs every fold and writes the report if a path was configured.
    pub fn run(mut self) -> Result<CrossValidationReport, BuildError> {
        let report = self.task.run()?;
        if let Some(path) = &self.report_path {
            report.export(path, self.report_format)?;
            info!(path = %path.display(), format = ?self.report_format, "report written");
        }
        Ok(report)
    }
}

pub fn build_task(choice: TaskChoice) -> Result<CrossValidationJob, BuildError> {
    match choice {
        TaskChoice::CrossValidate(p) => {
            let learner = build_learner(p.learner)?;
            let dataset = build_dataset(p.dataset)?;
            let evaluator = build_evaluator(p.evaluator, dataset.number_of_classes());
            let task = CrossValidation::new(learner, dataset, evaluator, p.folds, p.seed)?;
            Ok(CrossValidationJob {
                task,
                report_path: p.report_path,
                report_format: p.report_format,
            })
        }
    }
}
