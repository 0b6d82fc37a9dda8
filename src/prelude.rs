//! Exports the standard learners, hypotheses, and traits.
//!
pub use crate::error::Id3Error;


pub use crate::sample::{
    Attribute,
    Record,
    Sample,
};


pub use crate::imputer::{
    Imputer,
    ImputationMode,
    ImputationReport,
};


pub use crate::decision_tree::{
    // ID3 learner
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,

    // Rules
    DecisionRule,
    RuleExtractor,
};


pub use crate::bagging::{
    Bagging,
    Ensemble,
    Vote,
};


pub use crate::hypothesis::Classifier;
pub use crate::learner::Learner;
