//! Defines the `Learner` trait.

use crate::{Id3Error, Sample};


/// A trait that defines the behavor of a learning algorithm.
/// Given a sample and the rows to train on,
/// a `Learner` produces a hypothesis of type `Self::Hypothesis`.
pub trait Learner {
    /// The hypothesis this learner produces.
    type Hypothesis;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the learner as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produces a hypothesis from the records of `sample`
    /// whose positions are listed in `rows`.
    /// A position may appear more than once (e.g., a bootstrap resample).
    fn produce(&self, sample: &Sample, rows: &[usize])
        -> Result<Self::Hypothesis, Id3Error>;
}
