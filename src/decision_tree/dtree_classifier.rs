//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use crate::{Classifier, Id3Error, Record};
use super::node::*;
use super::rule::{DecisionRule, RuleExtractor};
use super::train_node::TrainNode;


/// Decision tree classifier produced by
/// [`DecisionTree`](crate::DecisionTree).
///
/// The nodes are stored in a flat arena with the root at index `0`.
/// A branch refers to its children by [`NodeIndex`],
/// and every node but the root keeps an [`Edge`] back to its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    nodes: Vec<Node>,
}


impl DecisionTreeClassifier {
    /// Flattens an owned tree into the arena.
    pub(super) fn from_train_node(root: TrainNode)
        -> Result<Self, Id3Error>
    {
        let mut nodes = Vec::with_capacity(root.size());
        push_subtree(&mut nodes, root, None)?;
        Ok(Self { nodes })
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }


    /// Returns the node at `index`.
    /// Panics if `index` does not belong to this tree.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.index()]
    }


    /// Returns all the nodes of this tree.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes[..]
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }


    /// Returns the number of levels.
    /// A tree that consists of the root only has depth `1`.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(NodeIndex::new(0), 1_usize)];
        while let Some((index, level)) = stack.pop() {
            depth = depth.max(level);
            if let Node::Branch(branch) = self.node(index) {
                stack.extend(
                    branch.children.values().map(|&child| (child, level + 1))
                );
            }
        }
        depth
    }


    /// Returns the indices of the leaves.
    pub fn leaves(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
            .map(|(k, _)| NodeIndex::new(k))
    }


    /// Returns one rule per leaf.
    /// See [`RuleExtractor`].
    pub fn rules(&self) -> Vec<DecisionRule> {
        RuleExtractor::extract(self)
    }


    /// Returns the node at which the traversal for `record` stops.
    ///
    /// From the root, the traversal follows the child reached by
    /// the record's value of the split attribute.
    /// It stops at a leaf, or at a branch that has no child for that value.
    pub fn terminal(&self, record: &Record) -> Result<&Node, Id3Error> {
        let mut node = self.root();
        while let Node::Branch(branch) = node {
            let value = record.value(&branch.attribute)?;
            match branch.child(value) {
                Some(child) => { node = self.node(child); },
                None => break,
            }
        }
        Ok(node)
    }


    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: NodeIndex,
        level: usize,
    ) -> fmt::Result
    {
        let node = self.node(index);
        let indent = "\t".repeat(level);
        writeln!(f, "{indent}[Level={level}] {}", node.label())?;
        if let Node::Branch(branch) = node {
            for (_, child) in branch.children() {
                self.fmt_node(f, child, level + 1)?;
            }
        }
        Ok(())
    }
}


/// Appends `node` and its descendants to `nodes`
/// and returns the index of `node`.
fn push_subtree(
    nodes: &mut Vec<Node>,
    node: TrainNode,
    parent: Option<Edge>,
) -> Result<NodeIndex, Id3Error>
{
    let index = NodeIndex::new(nodes.len());
    match node {
        TrainNode::Leaf(leaf) => {
            nodes.push(Node::Leaf(LeafNode {
                decision: leaf.decision,
                confidence: leaf.confidence,
                label: leaf.label,
                n_records: leaf.n_records,
                parent,
            }));
        },
        TrainNode::Branch(branch) => {
            let name = branch.attribute.name().to_string();
            nodes.push(Node::Branch(BranchNode {
                attribute: branch.attribute,
                children: HashMap::with_capacity(branch.children.len()),
                decision: branch.decision,
                confidence: branch.confidence,
                label: branch.label,
                n_records: branch.n_records,
                parent,
            }));

            for (value, child) in branch.children {
                let edge = Edge { parent: index, value: value.clone() };
                let child = push_subtree(nodes, child, Some(edge))?;
                if let Node::Branch(node) = &mut nodes[index.index()] {
                    match node.children.entry(value) {
                        Entry::Vacant(entry) => { entry.insert(child); },
                        Entry::Occupied(entry) => {
                            return Err(Id3Error::DuplicateBranch {
                                attribute: name,
                                value: entry.key().clone(),
                            });
                        },
                    }
                }
            }
        },
    }
    Ok(index)
}


impl Classifier for DecisionTreeClassifier {
    fn confidence(&self, record: &Record) -> Result<f64, Id3Error> {
        self.terminal(record)
            .map(|node| node.confidence())
    }


    fn predict(&self, record: &Record) -> Result<bool, Id3Error> {
        self.terminal(record)
            .map(|node| node.decision())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, NodeIndex::new(0), 0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    fn leaf(decision: bool, label: &str) -> TrainNode {
        let confidence = if decision { 100.0 } else { 0.0 };
        TrainNode::leaf(decision, confidence, label.to_string(), 1)
    }

    fn two_way_tree(values: [&str; 2]) -> TrainNode {
        let attribute = Attribute::new(0, "A", ["x", "y"]);
        let children = vec![
            (values[0].to_string(), leaf(true, "x => true")),
            (values[1].to_string(), leaf(false, "y => false")),
        ];
        TrainNode::branch(
            attribute, children, false, 50.0, "Value=root => Attribute=A".into(), 2
        )
    }

    #[test]
    fn flattened_tree_keeps_parent_edges() {
        let tree = DecisionTreeClassifier::from_train_node(
            two_way_tree(["x", "y"])
        ).unwrap();

        assert_eq!(tree.size(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.leaves().count(), 2);
        assert!(tree.root().parent().is_none());

        for index in tree.leaves() {
            let edge = tree.node(index).parent().unwrap();
            assert_eq!(edge.parent(), NodeIndex::new(0));
        }
    }

    #[test]
    fn duplicate_branch_is_rejected() {
        let result = DecisionTreeClassifier::from_train_node(
            two_way_tree(["x", "x"])
        );
        assert!(matches!(
            result,
            Err(Id3Error::DuplicateBranch { ref value, .. }) if value == "x"
        ));
    }

    #[test]
    fn display_indents_by_level() {
        let tree = DecisionTreeClassifier::from_train_node(
            two_way_tree(["x", "y"])
        ).unwrap();
        let text = tree.to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "[Level=0] Value=root => Attribute=A");
        assert_eq!(lines[1], "\t[Level=1] x => true");
        assert_eq!(lines[2], "\t[Level=1] y => false");
    }
}
