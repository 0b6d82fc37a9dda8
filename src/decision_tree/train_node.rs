//! Defines the owned representation of a tree under construction.
//! Subtrees are built independently (possibly on other threads)
//! and handed back to their parent by value.
use crate::Attribute;


/// Enumeration of `TrainBranchNode` and `TrainLeafNode`.
#[derive(Debug, Clone)]
pub(crate) enum TrainNode {
    /// A node that splits its records on an attribute.
    Branch(TrainBranchNode),


    /// A node that have no child.
    Leaf(TrainLeafNode),
}


/// A branch node of a tree under construction.
#[derive(Debug, Clone)]
pub(crate) struct TrainBranchNode {
    pub(super) attribute: Attribute,
    // One child per value observed in the partition,
    // in order of first appearance.
    pub(super) children: Vec<(String, TrainNode)>,
    // Majority decision of the partition that reached this node.
    pub(super) decision: bool,
    pub(super) confidence: f64,
    pub(super) label: String,
    pub(super) n_records: usize,
}


/// A leaf node of a tree under construction.
#[derive(Debug, Clone)]
pub(crate) struct TrainLeafNode {
    pub(super) decision: bool,
    pub(super) confidence: f64,
    pub(super) label: String,
    pub(super) n_records: usize,
}


impl TrainNode {
    /// Construct a leaf node from the given arguments.
    #[inline]
    pub(super) fn leaf(
        decision: bool,
        confidence: f64,
        label: String,
        n_records: usize,
    ) -> Self
    {
        Self::Leaf(TrainLeafNode { decision, confidence, label, n_records, })
    }


    /// Construct a branch node from the arguments.
    #[inline]
    pub(super) fn branch(
        attribute: Attribute,
        children: Vec<(String, TrainNode)>,
        decision: bool,
        confidence: f64,
        label: String,
        n_records: usize,
    ) -> Self
    {
        let branch = TrainBranchNode {
            attribute, children, decision, confidence, label, n_records,
        };
        Self::Branch(branch)
    }


    /// Returns the number of nodes in this subtree.
    pub(super) fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => {
                1 + branch.children.iter()
                    .map(|(_, child)| child.size())
                    .sum::<usize>()
            },
        }
    }
}
