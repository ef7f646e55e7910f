use crate::evaluation::Measurement;
use crate::tasks::TaskError;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Outcome of one train/test partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldResult {
    pub fold: usize,
    pub train_size: usize,
    pub test_size: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub seconds: f64,
}

impl Display for FoldResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fold={}, train={}, test={}, correct={}, acc={:.6}, t={:.3}s",
            self.fold, self.train_size, self.test_size, self.correct, self.accuracy, self.seconds
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrossValidationReport {
    pub learner: String,
    pub relation: String,
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    pub folds: Vec<FoldResult>,
    /// Total correct over total tested, pooled across folds.
    pub overall_accuracy: f64,
    /// Unweighted mean of the per-fold accuracies.
    pub mean_accuracy: f64,
    pub measurements: Vec<Measurement>,
}

impl CrossValidationReport {
    pub fn new(
        learner: String,
        relation: String,
        seed: u64,
        started_at: DateTime<Utc>,
        folds: Vec<FoldResult>,
        measurements: Vec<Measurement>,
    ) -> Self {
        let correct: usize = folds.iter().map(|f| f.correct).sum();
        let tested: usize = folds.iter().map(|f| f.test_size).sum();
        let overall_accuracy = if tested > 0 {
            correct as f64 / tested as f64
        } else {
            f64::NAN
        };
        let mean_accuracy = if folds.is_empty() {
            f64::NAN
        } else {
            folds.iter().map(|f| f.accuracy).sum::<f64>() / folds.len() as f64
        };
        Self {
            learner,
            relation,
            seed,
            started_at,
            folds,
            overall_accuracy,
            mean_accuracy,
            measurements,
        }
    }

    pub fn correct(&self) -> usize {
        self.folds.iter().map(|f| f.correct).sum()
    }

    pub fn tested(&self) -> usize {
        self.folds.iter().map(|f| f.test_size).sum()
    }

    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> Result<(), TaskError> {
        match format {
            ReportFormat::Csv => self.export_with_delimiter(path, ','),
            ReportFormat::Tsv => self.export_with_delimiter(path, '\t'),
            ReportFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(
        &self,
        path: P,
        delimiter: char,
    ) -> Result<(), TaskError> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(
            w,
            "fold{d}train_size{d}test_size{d}correct{d}accuracy{d}seconds",
            d = delimiter
        )?;
        for r in &self.folds {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{}{d}{:.12}{d}{:.6}",
                r.fold,
                r.train_size,
                r.test_size,
                r.correct,
                r.accuracy,
                r.seconds,
                d = delimiter
            )?;
        }
        w.flush()?;
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), TaskError> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}

impl Display for CrossValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} on {} ({} folds, seed {})",
            self.learner,
            self.relation,
            self.folds.len(),
            self.seed
        )?;
        for r in &self.folds {
            writeln!(f, "  {r}")?;
        }
        write!(
            f,
            "correct={}/{}, acc={:.6}, mean_fold_acc={:.6}",
            self.correct(),
            self.tested(),
            self.overall_accuracy,
            self.mean_accuracy
        )?;
        for m in &self.measurements {
            if m.name != "accuracy" {
                write!(f, ", {}={:.6}", m.name, m.value)?;
            }
        }
        Ok(())
    }
}
