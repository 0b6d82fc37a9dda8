use crate::common::checker;
use crate::constants::{
    DEFAULT_DESIRED_CONFIDENCE,
    DEFAULT_PARALLEL_DEPTH,
    DEFAULT_MIN_PARALLEL_PARTITION,
};
use crate::Id3Error;
use super::dtree::DecisionTree;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// # fn run() -> Result<(), Id3Error> {
/// let learner = DecisionTreeBuilder::new()
///     .desired_confidence(0.99)
///     .parallel_depth(2)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTreeBuilder {
    desired_confidence: f64,
    parallel_depth: usize,
    min_parallel_partition: usize,
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// desired_confidence: DEFAULT_DESIRED_CONFIDENCE == 0.0,
    /// parallel_depth: DEFAULT_PARALLEL_DEPTH == 4,
    /// min_parallel_partition: DEFAULT_MIN_PARALLEL_PARTITION == 64,
    /// ```
    pub fn new() -> Self {
        Self {
            desired_confidence: DEFAULT_DESIRED_CONFIDENCE,
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
            min_parallel_partition: DEFAULT_MIN_PARALLEL_PARTITION,
        }
    }


    /// Set the confidence level of the chi-square test
    /// that decides whether a split is kept.
    /// Must lie in `[0, 1)`; `0` keeps every split.
    pub fn desired_confidence(mut self, confidence: f64) -> Self {
        self.desired_confidence = confidence;
        self
    }


    /// Children of nodes shallower than `depth` are grown in parallel.
    /// `0` grows the whole tree on the calling thread.
    pub fn parallel_depth(mut self, depth: usize) -> Self {
        self.parallel_depth = depth;
        self
    }


    /// Children of nodes holding fewer than `size` records
    /// are grown sequentially.
    pub fn min_parallel_partition(mut self, size: usize) -> Self {
        self.min_parallel_partition = size;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    /// Fails if the desired confidence is outside `[0, 1)`.
    pub fn build(self) -> Result<DecisionTree, Id3Error> {
        checker::check_confidence(self.desired_confidence)?;

        let dtree = DecisionTree::from_components(
            self.desired_confidence,
            self.parallel_depth,
            self.min_parallel_partition,
        );
        Ok(dtree)
    }
}
