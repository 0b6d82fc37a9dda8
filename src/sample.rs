//! Struct `Sample` represents a batch of categorical records.

// Provides the attribute (schema) struct.
pub(crate) mod attribute;
// Provides the record struct.
pub(crate) mod record;
// Provides the sample struct.
pub(crate) mod sample_struct;


pub use attribute::Attribute;
pub use record::Record;
pub use sample_struct::Sample;
