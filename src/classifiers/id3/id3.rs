use crate::classifiers::id3::builder::build_tree;
use crate::classifiers::id3::node::DecisionTree;
use crate::classifiers::id3::pruning::prune;
use crate::classifiers::{Classifier, ClassifierError};
use crate::core::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Instance, RowInstance};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

pub const DEFAULT_PRUNING_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruningOptions {
    /// Share of the training set held out to judge collapses.
    pub fraction: f64,
    /// Seed of the shuffle that picks the held-out instances.
    pub seed: u64,
}

impl PruningOptions {
    /// Shuffles `training` with the seed and splits off the first
    /// `round(fraction * n)` items as the pruning set. Returns
    /// `(pruning_set, growing_set)`, or `None` when either side would be
    /// empty.
    pub fn hold_out<T: Clone>(&self, training: &[T]) -> Option<(Vec<T>, Vec<T>)> {
        let mut shuffled = training.to_vec();
        shuffled.shuffle(&mut StdRng::seed_from_u64(self.seed));
        let held_out = (self.fraction * shuffled.len() as f64).round() as usize;
        if held_out == 0 || held_out >= shuffled.len() {
            return None;
        }
        let growing_set = shuffled.split_off(held_out);
        Some((shuffled, growing_set))
    }
}

/// ID3 decision tree learner, optionally followed by reduced-error pruning.
#[derive(Debug, Clone, Default)]
pub struct Id3 {
    pruning: Option<PruningOptions>,
}

impl Id3 {
    pub fn new() -> Self {
        Self { pruning: None }
    }

    pub fn with_pruning(fraction: f64, seed: u64) -> Result<Self, ClassifierError> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(ClassifierError::InvalidPruningFraction(fraction));
        }
        Ok(Self {
            pruning: Some(PruningOptions { fraction, seed }),
        })
    }

    pub fn pruning(&self) -> Option<PruningOptions> {
        self.pruning
    }

    /// Learns a tree from `training`, holding part of it out for pruning
    /// when pruning is enabled.
    pub fn fit<I: Instance + Copy>(
        &self,
        header: &InstanceHeader,
        training: &[I],
    ) -> Result<DecisionTree, ClassifierError> {
        if training.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        let Some(options) = self.pruning else {
            return build_tree(header, training);
        };

        let Some((pruning_set, growing_set)) = options.hold_out(training) else {
            debug!(
                training = training.len(),
                fraction = options.fraction,
                "training set too small to hold out a pruning set"
            );
            return build_tree(header, training);
        };

        let mut tree = build_tree(header, &growing_set)?;
        let nodes_before = tree.node_count();
        let summary = prune(&mut tree, &pruning_set);
        debug!(
            nodes_before,
            nodes_after = tree.node_count(),
            collapsed = summary.collapsed,
            "reduced-error pruning"
        );
        Ok(tree)
    }
}

impl Classifier for Id3 {
    fn name(&self) -> &str {
        if self.pruning.is_some() {
            "id3-pruned"
        } else {
            "id3"
        }
    }

    fn predict(
        &self,
        dataset: &Dataset,
        training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<Vec<usize>, ClassifierError> {
        let tree = self.fit(dataset.header(), training)?;
        info!(
            learner = self.name(),
            nodes = tree.node_count(),
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "grew decision tree"
        );
        debug!("tree:\n{}", tree.render(dataset.header()));
        Ok(test.iter().map(|i| tree.classify(i)).collect())
    }
}
