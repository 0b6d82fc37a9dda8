//! Defines the error type of this crate.

use polars::prelude::PolarsError;

/// Errors raised while preparing data, growing trees, or predicting.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// Returned when a node is asked to grow from zero records.
    #[error("cannot build a node from an empty partition")]
    EmptyPartition,

    /// Returned when an attribute points outside the columns of a record.
    #[error(
        "attribute `{attribute}` reads column {index}, \
         but the record has only {n_columns} columns"
    )]
    AttributeOutOfRange {
        /// Name of the offending attribute.
        attribute: String,
        /// Column index declared by the attribute.
        index: usize,
        /// Number of columns in the record.
        n_columns: usize,
    },

    /// Returned when two attributes read the same column.
    #[error("attribute `{attribute}` reads column {index}, already read by another attribute")]
    DuplicateAttributeIndex {
        /// Name of the second attribute reading the column.
        attribute: String,
        /// The shared column index.
        index: usize,
    },

    /// Returned when a row position is outside the records of a sample.
    #[error("row {row} is out of range for a sample of {n_records} records")]
    RowOutOfRange {
        /// The offending row position.
        row: usize,
        /// Number of records in the sample.
        n_records: usize,
    },

    /// Returned when a record has a different number of columns
    /// than the rest of the sample.
    #[error("record {record} has {got} columns, expected {expected}")]
    ColumnCountMismatch {
        /// Zero-based position of the offending record.
        record: usize,
        /// The number of columns of the first record.
        expected: usize,
        /// The number of columns of the offending record.
        got: usize,
    },

    /// Returned when the target series does not match the data frame.
    #[error("target has {got} rows, expected {expected}")]
    TargetLengthMismatch {
        /// Number of rows in the data frame.
        expected: usize,
        /// Number of rows in the target series.
        got: usize,
    },

    /// Returned when the target series has a null entry.
    #[error("target is missing at row {row}")]
    MissingTarget {
        /// Zero-based row of the null target.
        row: usize,
    },

    /// Returned when the desired confidence is outside `[0, 1)`.
    #[error("desired confidence must be in [0, 1), got {confidence}")]
    InvalidConfidence {
        /// The invalid confidence.
        confidence: f64,
    },

    /// Returned when an ensemble of zero members is requested.
    #[error("ensemble size must be at least 1, got {size}")]
    InvalidEnsembleSize {
        /// The invalid ensemble size.
        size: usize,
    },

    /// Returned when predicting with an ensemble that has no member.
    #[error("cannot predict with an ensemble that has no member")]
    EmptyEnsemble,

    /// Returned when two children of one node share the same key.
    /// This means the groups handed to the children were not disjoint.
    #[error("duplicate branch `{value}` under attribute `{attribute}`")]
    DuplicateBranch {
        /// Split attribute of the node.
        attribute: String,
        /// The duplicated attribute value.
        value: String,
    },

    /// Returned when an attribute has no known value to sample from.
    #[error("attribute `{attribute}` has no known value to impute from")]
    EmptyDistribution {
        /// Name of the attribute.
        attribute: String,
    },

    /// Returned when the chi-square test receives degenerate inputs.
    #[error("chi-square test failed: {reason}")]
    InvalidChiSquare {
        /// Human-readable description of the degenerate input.
        reason: String,
    },

    /// Returned when a data frame conversion fails.
    #[error("failed to convert the data frame")]
    Polars(#[from] PolarsError),
}
