//! Converts a decision tree into a flat list of rules.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Attribute, Id3Error, Record};
use super::dtree_classifier::DecisionTreeClassifier;
use super::node::{Node, NodeIndex};


/// A test of the form `record[attribute] == value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// The tested attribute.
    pub attribute: Attribute,
    /// The required value.
    pub value: String,
}


impl Condition {
    /// Returns `true` if `record` satisfies this condition.
    #[inline]
    pub fn matches(&self, record: &Record) -> Result<bool, Id3Error> {
        Ok(record.value(&self.attribute)? == self.value)
    }
}


impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Attribute {} has Value {}]",
            self.attribute.name(),
            self.value,
        )
    }
}


/// A conjunction of conditions and the decision it implies.
/// One rule corresponds to one root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRule {
    conditions: Vec<Condition>,
    outcome: bool,
    label: String,
}


impl DecisionRule {
    /// Construct a rule from its conditions, ordered from the root.
    pub fn new(conditions: Vec<Condition>, outcome: bool) -> Self {
        let mut label = conditions.iter()
            .map(|condition| condition.to_string())
            .collect::<Vec<_>>()
            .join(" and ");
        if !label.is_empty() {
            label = format!("if {label} ");
        }
        label.push_str(&format!("then => {outcome}"));

        Self { conditions, outcome, label, }
    }


    /// Returns the conditions, ordered from the root.
    #[inline]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions[..]
    }


    /// Returns the decision of this rule.
    #[inline]
    pub fn outcome(&self) -> bool {
        self.outcome
    }


    /// Returns the human readable form of this rule.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns `true` if `record` satisfies every condition.
    pub fn matches(&self, record: &Record) -> Result<bool, Id3Error> {
        for condition in self.conditions.iter() {
            if !condition.matches(record)? { return Ok(false); }
        }
        Ok(true)
    }
}


impl fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}


/// Extracts one [`DecisionRule`] per leaf of a tree.
///
/// Each rule is the conjunction of the edges on the path from
/// the root to the leaf, found by following the parent references.
/// The rules of a tree are mutually exclusive and
/// cover every record of the partition the tree was trained on.
pub struct RuleExtractor;


impl RuleExtractor {
    /// Returns the rules of `tree` in arena order of their leaves.
    pub fn extract(tree: &DecisionTreeClassifier) -> Vec<DecisionRule> {
        tree.leaves()
            .map(|leaf| Self::rule_for(tree, leaf))
            .collect()
    }


    fn rule_for(tree: &DecisionTreeClassifier, leaf: NodeIndex)
        -> DecisionRule
    {
        let outcome = tree.node(leaf).decision();

        let mut conditions = Vec::new();
        let mut node = tree.node(leaf);
        while let Some(edge) = node.parent() {
            let parent = tree.node(edge.parent());
            if let Node::Branch(branch) = parent {
                conditions.push(Condition {
                    attribute: branch.attribute().clone(),
                    value: edge.value().to_string(),
                });
            }
            node = parent;
        }
        conditions.reverse();

        DecisionRule::new(conditions, outcome)
    }
}
