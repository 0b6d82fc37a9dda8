//! Default parameters and numeric tolerances.

/// Default desired confidence. `0` disables the chi-square pruning.
pub const DEFAULT_DESIRED_CONFIDENCE: f64 = 0.0;
/// Children are grown in parallel only above this depth.
pub const DEFAULT_PARALLEL_DEPTH: usize = 4;
/// Children are grown in parallel only for partitions at least this large.
pub const DEFAULT_MIN_PARALLEL_PARTITION: usize = 64;

/// Default number of trees in a bagging ensemble.
pub const DEFAULT_ENSEMBLE_SIZE: usize = 10;
/// Default seed of the bootstrap resampler.
pub const DEFAULT_BAGGING_SEED: u64 = 42;

/// Default seed of the imputation sampler.
pub const DEFAULT_IMPUTER_SEED: u64 = 1000;
/// Default marker of a missing categorical value.
pub const DEFAULT_MISSING_MARKER: &str = "?";

/// Gains at or below this value are treated as zero.
pub const MIN_GAIN: f64 = 1e-12;
/// A leaf predicts `true` when more than this percentage is positive.
pub const MAJORITY_PERCENTAGE: f64 = 50.0;
/// A value distribution is significant when its mode
/// holds more than this percentage of the mass.
pub const SIGNIFICANT_PERCENTAGE: f64 = 50.0;

/// Label of the value that leads to the root node.
pub(crate) const ROOT_VALUE: &str = "root";

pub(crate) const MAX_GAMMA_ITERATIONS: usize = 500;
pub(crate) const GAMMA_EPSILON: f64 = 1e-14;
pub(crate) const GAMMA_FLOOR: f64 = 1e-300;
