//! Entropy, information gain, and attribute selection.

use fixedbitset::FixedBitSet;
use rayon::prelude::*;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::constants::MIN_GAIN;
use crate::{Attribute, Id3Error, Record};


/// The records of a partition that share one value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The shared attribute value.
    pub value: String,
    /// Positions of the records in this group.
    pub rows: Vec<usize>,
    /// Number of positive records in this group.
    pub positives: usize,
}


impl Group {
    /// Returns the number of records in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if the group has no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the number of negative records in this group.
    #[inline]
    pub fn negatives(&self) -> usize {
        self.rows.len() - self.positives
    }
}


/// Returns the binary entropy (in bits) of a set with
/// `positives` positive and `negatives` negative records.
/// A class with no record contributes `0`, and so does an empty set.
#[inline]
pub fn entropy(positives: usize, negatives: usize) -> f64 {
    let total = (positives + negatives) as f64;
    part_entropy(positives, total) + part_entropy(negatives, total)
}


#[inline(always)]
fn part_entropy(part: usize, total: f64) -> f64 {
    if part == 0 { return 0f64; }
    let p = part as f64 / total;
    -p * p.log2()
}


/// Partitions `rows` by the observed values of `attribute`.
/// Groups are listed in order of first appearance.
pub fn partition(
    records: &[Record],
    rows: &[usize],
    attribute: &Attribute,
) -> Result<Vec<Group>, Id3Error>
{
    let mut position = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    for &row in rows {
        let record = &records[row];
        let value = record.value(attribute)?;
        let k = *position.entry(value)
            .or_insert_with(|| {
                groups.push(Group {
                    value: value.to_string(),
                    rows: Vec::new(),
                    positives: 0,
                });
                groups.len() - 1
            });

        groups[k].rows.push(row);
        if record.label() { groups[k].positives += 1; }
    }

    Ok(groups)
}


/// Returns the information gain of splitting `rows` on `attribute`.
///
/// `gain = H(rows) - Σ H(group) · |group| / |rows|`,
/// where `H` is the binary entropy of the labels.
pub fn information_gain(
    records: &[Record],
    rows: &[usize],
    attribute: &Attribute,
) -> Result<f64, Id3Error>
{
    let total = rows.len();
    if total == 0 { return Ok(0f64); }

    let groups = partition(records, rows, attribute)?;
    let positives = groups.iter()
        .map(|group| group.positives)
        .sum::<usize>();

    let before = entropy(positives, total - positives);
    let after = groups.iter()
        .map(|group| {
            let weight = group.len() as f64 / total as f64;
            entropy(group.positives, group.negatives()) * weight
        })
        .sum::<f64>();

    Ok(before - after)
}


/// Returns the position (in `attributes`) of the eligible attribute
/// with the largest information gain, with that gain.
///
/// Only attributes with positive gain are candidates;
/// `None` means no eligible attribute improves the partition.
///
/// Gains are evaluated in parallel and the maximum is reduced
/// in an unspecified order,
/// so the winner among attributes with equal gain is not deterministic.
pub(crate) fn best_attribute(
    attributes: &[Attribute],
    eligible: &FixedBitSet,
    records: &[Record],
    rows: &[usize],
) -> Result<Option<(usize, f64)>, Id3Error>
{
    let candidates = eligible.ones().collect::<Vec<_>>();

    let gains = candidates.into_par_iter()
        .map(|k| {
            information_gain(records, rows, &attributes[k])
                .map(|gain| (k, gain))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let best = gains.into_par_iter()
        .filter(|(_, gain)| *gain > MIN_GAIN)
        .max_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(Ordering::Equal));

    Ok(best)
}
