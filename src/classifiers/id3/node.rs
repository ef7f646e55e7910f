use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::fmt::Write;

/// Handle of a node inside its [`DecisionTree`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf {
        class: usize,
    },
    /// One child per value of `attribute`, indexed by value.
    Split {
        attribute: usize,
        children: Vec<NodeId>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    /// Most common class of the subset this node was grown from.
    majority_class: usize,
}

impl Node {
    pub fn leaf(class: usize) -> Self {
        Self {
            kind: NodeKind::Leaf { class },
            majority_class: class,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn majority_class(&self) -> usize {
        self.majority_class
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub(crate) fn set_split(&mut self, attribute: usize, children: Vec<NodeId>) {
        self.kind = NodeKind::Split {
            attribute,
            children,
        };
    }
}

/// An ID3 tree stored as an arena.
///
/// Children are only ever reachable from one parent. Collapsing a subtree
/// leaves its former descendants allocated but unreachable; every query
/// below walks from the root, so they are never observed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl DecisionTree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id].kind {
            NodeKind::Leaf { .. } => &[],
            NodeKind::Split { children, .. } => children,
        }
    }

    /// Walks from the root to a leaf and returns its class.
    ///
    /// Panics if the instance carries a value outside the domain a split
    /// was built for, which means it does not share the tree's schema.
    pub fn classify<I: Instance + ?Sized>(&self, instance: &I) -> usize {
        let mut id = self.root;
        loop {
            match &self.nodes[id].kind {
                NodeKind::Leaf { class } => return *class,
                NodeKind::Split {
                    attribute,
                    children,
                } => id = children[instance.value_at_index(*attribute)],
            }
        }
    }

    pub fn correct_count<I: Instance>(&self, instances: &[I]) -> usize {
        instances
            .iter()
            .filter(|i| self.classify(*i) == i.class_value())
            .count()
    }

    /// Turns `id` into a leaf predicting its majority class and returns
    /// what it was, so the caller can [`restore`](Self::restore) it.
    pub(crate) fn collapse(&mut self, id: NodeId) -> NodeKind {
        let class = self.nodes[id].majority_class;
        std::mem::replace(&mut self.nodes[id].kind, NodeKind::Leaf { class })
    }

    pub(crate) fn restore(&mut self, id: NodeId, kind: NodeKind) {
        self.nodes[id].kind = kind;
    }

    /// Reachable nodes, children before their parent.
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![(self.root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            for &child in self.children(id).iter().rev() {
                stack.push((child, false));
            }
        }
        order
    }

    pub fn node_count(&self) -> usize {
        self.post_order().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.post_order()
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .count()
    }

    /// Number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth_of(tree: &DecisionTree, id: NodeId) -> usize {
            tree.children(id)
                .iter()
                .map(|&c| 1 + depth_of(tree, c))
                .max()
                .unwrap_or(0)
        }
        depth_of(self, self.root)
    }

    /// Indented text form, one line per branch, using the header's labels.
    pub fn render(&self, header: &InstanceHeader) -> String {
        let mut out = String::new();
        self.render_node(header, self.root, 0, &mut out);
        out
    }

    fn render_node(&self, header: &InstanceHeader, id: NodeId, indent: usize, out: &mut String) {
        let class_label = |c: usize| header.class_label(c).unwrap_or("?").to_string();
        match &self.nodes[id].kind {
            NodeKind::Leaf { class } => {
                let _ = writeln!(out, "{:indent$}-> {}", "", class_label(*class));
            }
            NodeKind::Split {
                attribute,
                children,
            } => {
                let attr = &header.attributes[*attribute];
                for (value, &child) in children.iter().enumerate() {
                    let label = attr.value(value).unwrap_or("?");
                    if let NodeKind::Leaf { class } = self.nodes[child].kind {
                        let _ = writeln!(
                            out,
                            "{:indent$}{} = {} -> {}",
                            "",
                            attr.name(),
                            label,
                            class_label(class)
                        );
                    } else {
                        let _ = writeln!(out, "{:indent$}{} = {}", "", attr.name(), label);
                        self.render_node(header, child, indent + 2, out);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{dataset_from_rows, header_with_domains};

    // root splits on a0; a0 = v1 splits again on a1
    fn two_level_tree() -> DecisionTree {
        let nodes = vec![
            Node {
                kind: NodeKind::Split {
                    attribute: 0,
                    children: vec![1, 2],
                },
                majority_class: 0,
            },
            Node::leaf(0),
            Node {
                kind: NodeKind::Split {
                    attribute: 1,
                    children: vec![3, 4],
                },
                majority_class: 1,
            },
            Node::leaf(1),
            Node::leaf(0),
        ];
        DecisionTree::from_parts(nodes, 0)
    }

    #[test]
    fn classify_follows_value_indices() {
        let tree = two_level_tree();
        let ds = dataset_from_rows(&[2, 2], 2, &[[0, 1, 0], [1, 0, 1], [1, 1, 0], [1, 1, 1]]);
        let got: Vec<_> = ds.instances().iter().map(|i| tree.classify(i)).collect();
        assert_eq!(got, vec![0, 1, 0, 0]);
        assert_eq!(tree.correct_count(&ds.instances()), 3);
    }

    #[test]
    fn shape_queries() {
        let tree = two_level_tree();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.post_order(), vec![1, 3, 4, 2, 0]);
    }

    #[test]
    fn collapse_and_restore() {
        let mut tree = two_level_tree();
        let saved = tree.collapse(2);
        assert!(tree.node(2).is_leaf());
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.depth(), 1);

        tree.restore(2, saved);
        assert_eq!(tree, two_level_tree());
    }

    #[test]
    fn render_uses_labels() {
        let tree = two_level_tree();
        let header = header_with_domains(&[2, 2], 2);
        let text = tree.render(&header);
        assert_eq!(
            text,
            "a0 = v0 -> c0\na0 = v1\n  a1 = v0 -> c1\n  a1 = v1 -> c0\n"
        );
    }

    #[test]
    #[should_panic]
    fn classify_panics_on_foreign_value() {
        let tree = two_level_tree();
        let ds = dataset_from_rows(&[3, 2], 2, &[[2, 0, 0]]);
        tree.classify(&ds.instance(0));
    }
}
