use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use std::collections::{HashMap, HashSet};

use crate::constants::{DEFAULT_IMPUTER_SEED, DEFAULT_MISSING_MARKER};
use crate::{Attribute, Id3Error, Record, Sample};
use super::report::{AttributeSummary, ImputationReport};
use super::value_picker::ValuePicker;


/// How the empirical distribution of an attribute is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImputationMode {
    /// One distribution over all records.
    #[default]
    Global,
    /// One distribution per class.
    /// Positive and negative records are imputed separately,
    /// each from the known values of its own class.
    PerClass,
}


/// Fills the missing values of categorical attributes.
///
/// A value is missing if it equals the missing marker (`"?"` by default)
/// or is not a legal value of its attribute.
/// It is replaced with a value drawn at random from the
/// frequencies of the known values.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// # fn run(mut sample: Sample) -> Result<(), Id3Error> {
/// let report = Imputer::new()
///     .missing("?")
///     .mode(ImputationMode::PerClass)
///     .prune_insignificant(true)
///     .impute(&mut sample)?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Imputer {
    missing: String,
    mode: ImputationMode,
    seed: u64,
    prune_insignificant: bool,
}


/// Replacement values for a single column.
/// The plan of an attribute only ever targets that attribute's column,
/// so the plans of different attributes never write the same slot.
struct ColumnFill {
    name: String,
    column: usize,
    mode: Option<String>,
    significant: bool,
    fills: Vec<(usize, String)>,
}


impl ColumnFill {
    fn apply(self, records: &mut [Record]) -> AttributeSummary {
        let imputed = self.fills.len();
        for (row, value) in self.fills {
            records[row].set_value(self.column, value);
        }

        AttributeSummary {
            name: self.name,
            index: self.column,
            imputed,
            mode: self.mode,
            significant: self.significant,
        }
    }
}


impl Default for Imputer {
    fn default() -> Self {
        Self::new()
    }
}


impl Imputer {
    /// Construct a new instance of [`Imputer`].
    /// By default, the parameters are set as follows;
    /// ```text
    /// missing: DEFAULT_MISSING_MARKER == "?",
    /// mode: ImputationMode::Global,
    /// seed: DEFAULT_IMPUTER_SEED == 1000,
    /// prune_insignificant: false,
    /// ```
    pub fn new() -> Self {
        Self {
            missing: DEFAULT_MISSING_MARKER.to_string(),
            mode: ImputationMode::Global,
            seed: DEFAULT_IMPUTER_SEED,
            prune_insignificant: false,
        }
    }


    /// Set the marker of a missing value.
    pub fn missing<S: ToString>(mut self, marker: S) -> Self {
        self.missing = marker.to_string();
        self
    }


    /// Set the imputation mode.
    pub fn mode(mut self, mode: ImputationMode) -> Self {
        self.mode = mode;
        self
    }


    /// Set the seed of the sampler.
    /// Each attribute draws from its own generator
    /// seeded by this value and the attribute's column,
    /// so the result does not depend on the thread schedule.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// If `true`, [`Imputer::impute`] removes the attributes whose
    /// value distribution is not significant from the sample.
    pub fn prune_insignificant(mut self, flag: bool) -> Self {
        self.prune_insignificant = flag;
        self
    }


    /// Fills the missing values of every attribute of `sample`.
    ///
    /// Attributes are processed in parallel.
    /// Each one reads the shared records and writes only its own column.
    #[instrument(skip_all, fields(mode = ?self.mode, n_records = sample.records().len()))]
    pub fn impute(&self, sample: &mut Sample)
        -> Result<ImputationReport, Id3Error>
    {
        let fills = {
            let records = sample.records();
            sample.attributes()
                .par_iter()
                .map(|attribute| {
                    let seed = self.seed.wrapping_add(attribute.index() as u64);
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    self.plan(attribute, records, &mut rng)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let records = sample.records_mut();
        let summaries = fills.into_iter()
            .map(|fill| fill.apply(records))
            .collect::<Vec<_>>();

        let mut pruned = Vec::new();
        if self.prune_insignificant {
            let columns = summaries.iter()
                .filter(|summary| !summary.significant)
                .map(|summary| summary.index)
                .collect::<HashSet<_>>();
            sample.retain_attributes(|attribute| {
                let keep = !columns.contains(&attribute.index());
                if !keep { pruned.push(attribute.name().to_string()); }
                keep
            });
        }

        let report = ImputationReport { summaries, pruned, };
        debug!(
            imputed = report.imputed(),
            pruned = report.pruned().len(),
            "imputation complete"
        );
        Ok(report)
    }


    /// Fills the missing values of a single `attribute`
    /// with values drawn from `rng`.
    pub fn impute_attribute<R>(
        &self,
        attribute: &Attribute,
        records: &mut [Record],
        rng: &mut R,
    ) -> Result<AttributeSummary, Id3Error>
        where R: Rng + ?Sized,
    {
        let fill = self.plan(attribute, records, rng)?;
        Ok(fill.apply(records))
    }


    /// Computes the replacement values of `attribute`.
    ///
    /// The column-wide distribution backs every class group
    /// that has no known value of its own.
    fn plan<R>(
        &self,
        attribute: &Attribute,
        records: &[Record],
        rng: &mut R,
    ) -> Result<ColumnFill, Id3Error>
        where R: Rng + ?Sized,
    {
        if records.is_empty() {
            return Ok(ColumnFill {
                name: attribute.name().to_string(),
                column: attribute.index(),
                mode: None,
                significant: true,
                fills: Vec::new(),
            });
        }

        let all = (0..records.len()).collect::<Vec<_>>();
        let (counts, unknown) = self.count(attribute, records, &all)?;
        let global = ValuePicker::new(attribute.domain().iter().zip(counts))
            .ok_or_else(|| Id3Error::EmptyDistribution {
                attribute: attribute.name().to_string(),
            })?;

        let mut fills = Vec::new();
        let mut significant = true;
        match self.mode {
            ImputationMode::Global => {
                significant = global.is_significant();
                fills.extend(
                    unknown.into_iter()
                        .map(|row| (row, global.pick(rng).to_string()))
                );
            },
            ImputationMode::PerClass => {
                let (pos, neg): (Vec<usize>, Vec<usize>) = all.into_iter()
                    .partition(|&i| records[i].label());

                for rows in [pos, neg].into_iter().filter(|rows| !rows.is_empty()) {
                    let (counts, unknown) = self.count(attribute, records, &rows)?;
                    let class = ValuePicker::new(attribute.domain().iter().zip(counts));
                    let picker = match class.as_ref() {
                        Some(picker) => picker,
                        None => {
                            debug!(
                                attribute = attribute.name(),
                                label = records[rows[0]].label(),
                                "class has no known value, using the column distribution"
                            );
                            &global
                        },
                    };
                    significant &= picker.is_significant();

                    fills.extend(
                        unknown.into_iter()
                            .map(|row| (row, picker.pick(rng).to_string()))
                    );
                }
            },
        }

        debug!(
            attribute = attribute.name(),
            imputed = fills.len(),
            significant,
            "imputed attribute"
        );
        if !significant {
            warn!(
                attribute = attribute.name(),
                "no value holds the majority of the observations"
            );
        }

        Ok(ColumnFill {
            name: attribute.name().to_string(),
            column: attribute.index(),
            mode: Some(global.pick_max().to_string()),
            significant,
            fills,
        })
    }


    /// Counts the known values of `attribute` over `rows`
    /// and returns the counts in domain order with the rows to fill.
    fn count(
        &self,
        attribute: &Attribute,
        records: &[Record],
        rows: &[usize],
    ) -> Result<(Vec<usize>, Vec<usize>), Id3Error>
    {
        let position = attribute.domain()
            .iter()
            .enumerate()
            .filter(|(_, value)| **value != self.missing)
            .map(|(k, value)| (value.as_str(), k))
            .collect::<HashMap<_, _>>();

        let mut counts = vec![0_usize; attribute.domain().len()];
        let mut unknown = Vec::new();
        for &row in rows {
            let value = records[row].value(attribute)?;
            match position.get(value) {
                Some(&k) => { counts[k] += 1; },
                None => { unknown.push(row); },
            }
        }

        Ok((counts, unknown))
    }
}
