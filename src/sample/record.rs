use serde::{Serialize, Deserialize};

use crate::{Attribute, Id3Error};


/// A labeled row of categorical values.
/// `values[attribute.index()]` is the value of `attribute`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<String>,
    label: bool,
}


impl Record {
    /// Construct a new record with the given values and class label.
    pub fn new<I, T>(values: I, label: bool) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        let values = values.into_iter()
            .map(|value| value.to_string())
            .collect();
        Self { values, label, }
    }


    /// Returns `true` if this record is a positive example.
    #[inline]
    pub fn label(&self) -> bool {
        self.label
    }


    /// Returns all the values of this record.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the record has no column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the value of `attribute`.
    /// Fails if the attribute reads a column this record does not have.
    #[inline]
    pub fn value(&self, attribute: &Attribute) -> Result<&str, Id3Error> {
        self.values.get(attribute.index())
            .map(|value| value.as_str())
            .ok_or_else(|| Id3Error::AttributeOutOfRange {
                attribute: attribute.name().to_string(),
                index: attribute.index(),
                n_columns: self.values.len(),
            })
    }


    /// Overwrites the value at `column`.
    /// Only the imputer writes through this method,
    /// and it writes the column of the attribute being imputed.
    #[inline]
    pub(crate) fn set_value(&mut self, column: usize, value: String) {
        self.values[column] = value;
    }
}
