//! The files in `decision_tree/` directory define
//! the ID3 decision tree learner, the classifier it produces,
//! and the conversion of a tree into rules.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the ID3 learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
/// Defines decision rules and their extraction.
pub mod rule;
/// Defines entropy, information gain, and attribute selection.
pub mod splitter;

mod train_node;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use node::{Node, NodeIndex, Edge, BranchNode, LeafNode};
pub use rule::{Condition, DecisionRule, RuleExtractor};
pub use splitter::{entropy, information_gain};
