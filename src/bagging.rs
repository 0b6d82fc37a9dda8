//! Bootstrap aggregation of hypotheses.

/// Defines the bagging algorithm.
pub mod bagging_algorithm;
/// Defines the majority-vote ensemble.
pub mod ensemble;


pub use bagging_algorithm::Bagging;
pub use ensemble::{Ensemble, Vote};
