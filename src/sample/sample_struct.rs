use polars::prelude::*;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::HashSet;

use crate::constants::DEFAULT_MISSING_MARKER;
use crate::Id3Error;
use super::attribute::Attribute;
use super::record::Record;


/// Struct `Sample` holds the attribute schema
/// and the records that follow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub(super) attributes: Vec<Attribute>,
    pub(super) records: Vec<Record>,
    pub(super) n_columns: usize,
}


impl Sample {
    /// Construct a new `Sample` from an attribute list and records.
    ///
    /// Every record must have the same number of columns,
    /// and every attribute must read one of those columns.
    /// No two attributes may read the same column.
    /// Records may hold more columns than there are attributes
    /// (e.g., the label column of the raw table).
    pub fn new(attributes: Vec<Attribute>, records: Vec<Record>)
        -> Result<Self, Id3Error>
    {
        let n_columns = records.first()
            .map(|record| record.len())
            .unwrap_or_else(|| {
                attributes.iter()
                    .map(|attr| attr.index() + 1)
                    .max()
                    .unwrap_or(0)
            });

        if let Some((record, got)) = records.iter()
            .map(|record| record.len())
            .enumerate()
            .find(|(_, len)| *len != n_columns)
        {
            return Err(Id3Error::ColumnCountMismatch {
                record, expected: n_columns, got,
            });
        }

        if let Some(attr) = attributes.iter()
            .find(|attr| attr.index() >= n_columns)
        {
            return Err(Id3Error::AttributeOutOfRange {
                attribute: attr.name().to_string(),
                index: attr.index(),
                n_columns,
            });
        }

        let mut seen = HashSet::new();
        if let Some(attr) = attributes.iter()
            .find(|attr| !seen.insert(attr.index()))
        {
            return Err(Id3Error::DuplicateAttributeIndex {
                attribute: attr.name().to_string(),
                index: attr.index(),
            });
        }

        Ok(Self { attributes, records, n_columns, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    ///
    /// Every column of `data` becomes a categorical attribute
    /// whose domain is the set of its non-null values,
    /// listed in order of first appearance.
    /// Null entries become the missing marker `"?"`.
    /// A target entry is positive if it is greater than `0`
    /// (`true` for boolean targets).
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> Result<Self, Id3Error>
    {
        let (n_records, _) = data.shape();
        if target.len() != n_records {
            return Err(Id3Error::TargetLengthMismatch {
                expected: n_records,
                got: target.len(),
            });
        }

        let target = target.cast(&DataType::Float64)?;
        let labels = target.f64()?
            .into_iter()
            .enumerate()
            .map(|(row, y)| {
                y.map(|y| y > 0f64)
                    .ok_or(Id3Error::MissingTarget { row })
            })
            .collect::<Result<Vec<bool>, _>>()?;

        let columns = data.get_columns()
            .par_iter()
            .map(|series| -> Result<(String, Vec<String>), Id3Error> {
                let series = series.cast(&DataType::Utf8)?;
                let values = series.utf8()?
                    .into_iter()
                    .map(|x| x.unwrap_or(DEFAULT_MISSING_MARKER).to_string())
                    .collect::<Vec<_>>();
                Ok((series.name().to_string(), values))
            })
            .collect::<Result<Vec<_>, Id3Error>>()?;

        let attributes = columns.iter()
            .enumerate()
            .map(|(index, (name, values))| {
                let mut seen = HashSet::new();
                let domain = values.iter()
                    .filter(|x| *x != DEFAULT_MISSING_MARKER)
                    .filter(|x| seen.insert(x.as_str()))
                    .collect::<Vec<_>>();
                Attribute::new(index, name, domain)
            })
            .collect::<Vec<_>>();

        let records = labels.into_iter()
            .enumerate()
            .map(|(row, label)| {
                let values = columns.iter()
                    .map(|(_, values)| values[row].as_str());
                Record::new(values, label)
            })
            .collect::<Vec<_>>();

        Self::new(attributes, records)
    }


    /// Returns the pair of the number of records and attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.attributes.len())
    }


    /// Returns the number of columns of each record.
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }


    /// Returns a slice of type `Attribute`.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns a slice of type `Record`.
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns the attribute named `name`, if it exists.
    pub fn attribute<S: AsRef<str>>(&self, name: S) -> Option<&Attribute> {
        let name = name.as_ref();
        self.attributes.iter()
            .find(|attr| attr.name() == name)
    }


    /// Returns the number of positive records.
    pub fn n_positive(&self) -> usize {
        self.records.iter()
            .filter(|record| record.label())
            .count()
    }


    /// Returns a mutable slice of records.
    /// Records keep their length, so the schema stays valid.
    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records[..]
    }


    /// Keeps only the attributes satisfying `keep`.
    /// The records are untouched, so the column indices of
    /// the remaining attributes stay valid.
    pub(crate) fn retain_attributes<F>(&mut self, keep: F)
        where F: FnMut(&Attribute) -> bool,
    {
        self.attributes.retain(keep);
    }
}
