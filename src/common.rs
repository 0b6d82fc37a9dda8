//! Defines some common functions used in this library.

/// Defines the chi-square goodness-of-fit test.
pub mod chi_square;

/// Defines some checker functions.
pub(crate) mod checker;


pub use chi_square::ChiSquareTest;
