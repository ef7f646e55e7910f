use crate::classifiers::id3::node::DecisionTree;
use crate::core::instances::Instance;
use tracing::{debug, warn};

/// Outcome of one reduced-error pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PruneSummary {
    /// Subtrees evaluated for collapse.
    pub candidates: usize,
    /// Subtrees actually replaced by a leaf.
    pub collapsed: usize,
    pub correct_before: usize,
    pub correct_after: usize,
}

/// Reduced-error pruning, bottom-up.
///
/// A split whose children are all leaves is replaced by a leaf of its
/// majority class whenever that does not lower the number of
/// `pruning_set` instances the whole tree classifies correctly. Equal
/// counts prune. With an empty pruning set nothing is collapsed.
pub fn prune<I: Instance>(tree: &mut DecisionTree, pruning_set: &[I]) -> PruneSummary {
    if pruning_set.is_empty() {
        warn!("empty pruning set, keeping the tree unpruned");
        return PruneSummary::default();
    }

    let mut summary = PruneSummary {
        correct_before: tree.correct_count(pruning_set),
        ..PruneSummary::default()
    };
    let mut correct = summary.correct_before;

    for id in tree.post_order() {
        let children = tree.children(id);
        if children.is_empty() || !children.iter().all(|&c| tree.node(c).is_leaf()) {
            continue;
        }

        summary.candidates += 1;
        let saved = tree.collapse(id);
        let collapsed_correct = tree.correct_count(pruning_set);
        if collapsed_correct >= correct {
            correct = collapsed_correct;
            summary.collapsed += 1;
        } else {
            tree.restore(id, saved);
        }
    }

    summary.correct_after = correct;
    debug!(
        candidates = summary.candidates,
        collapsed = summary.collapsed,
        before = summary.correct_before,
        after = summary.correct_after,
        "pruned tree"
    );
    summary
}
