use crate::classifiers::ClassifierError;
use crate::classifiers::id3::entropy::{entropy, information_gain};
use crate::classifiers::id3::node::{DecisionTree, Node, NodeId};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use tracing::trace;

/// Grows a full ID3 tree over `training`.
///
/// Each node splits on the not-yet-used attribute of greatest information
/// gain (lowest index on ties) and gets one child per domain value, empty
/// or not. Recursion stops on zero entropy or when no attribute is left.
pub fn build_tree<I: Instance + Copy>(
    header: &InstanceHeader,
    training: &[I],
) -> Result<DecisionTree, ClassifierError> {
    if training.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }

    let mut grower = Grower {
        header,
        nodes: Vec::new(),
        available: vec![true; header.number_of_attributes()],
    };
    // the root is never empty, so this fallback class is never used
    let root = grower.grow(training.to_vec(), 0);
    Ok(DecisionTree::from_parts(grower.nodes, root))
}

struct Grower<'h> {
    header: &'h InstanceHeader,
    nodes: Vec<Node>,
    /// Attributes not yet split on along the current root-to-node path.
    available: Vec<bool>,
}

impl Grower<'_> {
    fn grow<I: Instance + Copy>(&mut self, subset: Vec<I>, parent_majority: usize) -> NodeId {
        let number_of_classes = self.header.number_of_classes();
        let summary = entropy(&subset, number_of_classes, |_| true);

        let Some(majority) = summary.most_common_class else {
            return self.push(Node::leaf(parent_majority));
        };
        if summary.entropy == 0.0 {
            return self.push(Node::leaf(majority));
        }
        let Some(attribute) = self.best_attribute(&subset, summary.entropy) else {
            return self.push(Node::leaf(majority));
        };

        let id = self.push(Node::leaf(majority));
        let domain = self.header.attribute_domain_size(attribute);
        let mut buckets: Vec<Vec<I>> = (0..domain).map(|_| Vec::new()).collect();
        for instance in subset {
            buckets[instance.value_at_index(attribute)].push(instance);
        }

        self.available[attribute] = false;
        let children = buckets
            .into_iter()
            .map(|bucket| self.grow(bucket, majority))
            .collect();
        self.available[attribute] = true;

        self.nodes[id].set_split(attribute, children);
        id
    }

    fn best_attribute<I: Instance>(&self, subset: &[I], current_entropy: f64) -> Option<usize> {
        let number_of_classes = self.header.number_of_classes();
        let mut best: Option<(usize, f64)> = None;
        for attribute in (0..self.available.len()).filter(|&a| self.available[a]) {
            let gain = information_gain(
                subset,
                number_of_classes,
                current_entropy,
                attribute,
                self.header.attribute_domain_size(attribute),
            );
            trace!(attribute, gain, "candidate split");
            if best.is_none_or(|(_, g)| gain > g) {
                best = Some((attribute, gain));
            }
        }
        best.map(|(attribute, _)| attribute)
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
