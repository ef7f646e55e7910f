mod builder;
mod entropy;
mod id3;
mod node;
mod pruning;

pub use builder::build_tree;
pub use entropy::{EntropySummary, entropy, information_gain};
pub use id3::{DEFAULT_PRUNING_FRACTION, Id3, PruningOptions};
pub use node::{DecisionTree, Node, NodeId, NodeKind};
pub use pruning::{PruneSummary, prune};
