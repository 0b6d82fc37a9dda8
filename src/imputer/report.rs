use std::fmt;


/// Outcome of imputing a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSummary {
    /// Name of the attribute.
    pub name: String,
    /// Column index of the attribute.
    pub index: usize,
    /// Number of values replaced.
    pub imputed: usize,
    /// Most frequent known value over all records,
    /// or `None` for a sample without records.
    pub mode: Option<String>,
    /// `false` if the value distribution of the attribute
    /// is not significant (in any class, for per-class imputation).
    pub significant: bool,
}


/// Summary returned by [`Imputer::impute`](crate::Imputer::impute).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImputationReport {
    pub(super) summaries: Vec<AttributeSummary>,
    pub(super) pruned: Vec<String>,
}


impl ImputationReport {
    /// Returns one summary per imputed attribute.
    pub fn summaries(&self) -> &[AttributeSummary] {
        &self.summaries[..]
    }


    /// Returns the total number of replaced values.
    pub fn imputed(&self) -> usize {
        self.summaries.iter()
            .map(|summary| summary.imputed)
            .sum()
    }


    /// Returns the names of the attributes whose
    /// value distribution is not significant.
    pub fn insignificant(&self) -> impl Iterator<Item = &str> + '_ {
        self.summaries.iter()
            .filter(|summary| !summary.significant)
            .map(|summary| summary.name.as_str())
    }


    /// Returns the names of the attributes
    /// removed from the sample by the imputer.
    pub fn pruned(&self) -> &[String] {
        &self.pruned[..]
    }
}


impl fmt::Display for ImputationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.summaries.iter()
            .map(|summary| summary.name.len())
            .max()
            .unwrap_or(0);
        writeln!(f, "----------\n# Imputation\n")?;
        for summary in self.summaries.iter() {
            let mode = summary.mode.as_deref().unwrap_or("-");
            let flag = if summary.significant { "" } else { " (not significant)" };
            writeln!(
                f,
                "\t* [{name: <width$}] {imputed} imputed, mode `{mode}`{flag}",
                name = summary.name,
                imputed = summary.imputed,
            )?;
        }
        write!(f, "----------")
    }
}
