use serde::{Serialize, Deserialize};

use std::fmt;


/// A categorical attribute.
/// `index` is the column that holds the attribute in every [`Record`],
/// and `domain` lists the legal values in the order of the schema.
///
/// [`Record`]: crate::Record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    index: usize,
    name: String,
    domain: Vec<String>,
}


impl Attribute {
    /// Construct a new attribute reading column `index`.
    pub fn new<S, I, T>(index: usize, name: S, domain: I) -> Self
        where S: ToString,
              I: IntoIterator<Item = T>,
              T: ToString,
    {
        let domain = domain.into_iter()
            .map(|value| value.to_string())
            .collect();
        Self { index, name: name.to_string(), domain, }
    }


    /// Returns the column index of this attribute.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }


    /// Returns the attribute name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the legal values of this attribute.
    #[inline]
    pub fn domain(&self) -> &[String] {
        &self.domain[..]
    }


    /// Returns `true` if `value` is a legal value of this attribute.
    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.domain.iter().any(|v| v == value)
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{index}] {name} {{{domain}}}",
            index = self.index,
            name = self.name,
            domain = self.domain.join(", "),
        )
    }
}
