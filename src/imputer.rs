//! The files in `imputer/` directory fill the missing values
//! of categorical attributes.
//!
//! A missing value is replaced with a value drawn from the
//! empirical distribution of the known values of the same attribute,
//! either over all records or separately for each class.

/// Defines the weighted sampler over the values of an attribute.
pub mod value_picker;
/// Defines the imputer and its parameters.
pub mod imputation;
/// Defines the summary returned by the imputer.
pub mod report;


pub use value_picker::ValuePicker;
pub use imputation::{Imputer, ImputationMode};
pub use report::{AttributeSummary, ImputationReport};
