#![warn(missing_docs)]

//!
//! A crate that provides the ID3 decision tree learner
//! for categorical attributes and boolean labels.
//!
//! The crate covers the whole pipeline.
//!
//! - Imputation
//!     Missing values of an attribute are replaced with values
//!     drawn from the empirical distribution of its known values,
//!     either over all records or per class.
//!     See [`Imputer`].
//!
//! - Tree induction
//!     [`DecisionTree`] grows a multiway tree by information gain.
//!     A split is kept only if it is significant
//!     under a chi-square test at the desired confidence.
//!     Subtrees near the root are grown in parallel.
//!
//! - Bagging
//!     [`Bagging`] trains many trees on bootstrap resamples
//!     and combines them into a majority vote, [`Ensemble`].
//!
//! - Rules
//!     [`RuleExtractor`] turns a tree into one rule per leaf.
//!
//! # Example
//! ```no_run
//! use minitrees::prelude::*;
//!
//! # fn run(mut sample: Sample) -> Result<(), Id3Error> {
//! Imputer::new()
//!     .mode(ImputationMode::PerClass)
//!     .impute(&mut sample)?;
//!
//! let tree = DecisionTreeBuilder::new()
//!     .desired_confidence(0.95)
//!     .build()?
//!     .fit(&sample)?;
//!
//! let correct = sample.records()
//!     .iter()
//!     .filter(|record| tree.predict(record).ok() == Some(record.label()))
//!     .count();
//! println!("{correct} / {} correct", sample.records().len());
//! print!("{tree}");
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod learner;
pub mod imputer;
pub mod decision_tree;
pub mod bagging;

pub mod prelude;


pub use error::Id3Error;
pub use sample::{Attribute, Record, Sample};

pub use common::ChiSquareTest;

pub use hypothesis::Classifier;
pub use learner::Learner;

pub use imputer::{
    Imputer,
    ImputationMode,
    ImputationReport,
    AttributeSummary,
};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    DecisionRule,
    RuleExtractor,
};

pub use bagging::{Bagging, Ensemble, Vote};
