//! Defines the nodes of a trained decision tree.
//! Nodes live in an arena owned by
//! [`DecisionTreeClassifier`](crate::DecisionTreeClassifier)
//! and refer to each other by [`NodeIndex`].
use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::fmt;

use crate::Attribute;


/// Position of a node in the arena of its tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize,
)]
pub struct NodeIndex(usize);


impl NodeIndex {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }


    /// Returns the zero-based arena position.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}


impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// Back-reference from a node to its parent.
/// `value` is the value of the parent's split attribute
/// that leads to the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub(crate) parent: NodeIndex,
    pub(crate) value: String,
}


impl Edge {
    /// Returns the parent node.
    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }


    /// Returns the attribute value on this edge.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on an attribute.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(crate) attribute: Attribute,
    pub(crate) children: HashMap<String, NodeIndex>,
    pub(crate) decision: bool,
    pub(crate) confidence: f64,
    pub(crate) label: String,
    pub(crate) n_records: usize,
    pub(crate) parent: Option<Edge>,
}


impl BranchNode {
    /// Returns the split attribute.
    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }


    /// Returns the child reached by `value`, if any.
    #[inline]
    pub fn child(&self, value: &str) -> Option<NodeIndex> {
        self.children.get(value).copied()
    }


    /// Returns the children of this node
    /// in the order of the split attribute's domain.
    pub fn children(&self) -> Vec<(&str, NodeIndex)> {
        let mut children = self.children.iter()
            .map(|(value, &index)| (value.as_str(), index))
            .collect::<Vec<_>>();
        let domain = self.attribute.domain();
        children.sort_by_key(|(value, index)| {
            let position = domain.iter()
                .position(|v| v == value)
                .unwrap_or(domain.len());
            (position, *index)
        });
        children
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(crate) decision: bool,
    pub(crate) confidence: f64,
    pub(crate) label: String,
    pub(crate) n_records: usize,
    pub(crate) parent: Option<Edge>,
}


impl Node {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }


    /// Returns the majority decision of the training records
    /// that reached this node.
    #[inline]
    pub fn decision(&self) -> bool {
        match self {
            Self::Branch(branch) => branch.decision,
            Self::Leaf(leaf) => leaf.decision,
        }
    }


    /// Returns the percentage of positive training records
    /// that reached this node.
    #[inline]
    pub fn confidence(&self) -> f64 {
        match self {
            Self::Branch(branch) => branch.confidence,
            Self::Leaf(leaf) => leaf.confidence,
        }
    }


    /// Returns the human readable label of this node.
    #[inline]
    pub fn label(&self) -> &str {
        match self {
            Self::Branch(branch) => &branch.label,
            Self::Leaf(leaf) => &leaf.label,
        }
    }


    /// Returns the number of training records that reached this node.
    #[inline]
    pub fn n_records(&self) -> usize {
        match self {
            Self::Branch(branch) => branch.n_records,
            Self::Leaf(leaf) => leaf.n_records,
        }
    }


    /// Returns the edge to the parent. `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<&Edge> {
        match self {
            Self::Branch(branch) => branch.parent.as_ref(),
            Self::Leaf(leaf) => leaf.parent.as_ref(),
        }
    }
}
