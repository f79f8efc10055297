//! Entropy and information gain over a subset of row indices.
//!
//! Every function takes the subset as a slice of row indices
//! into a [`Sample`] and never copies rows.
use std::collections::BTreeMap;

use crate::{Id3Error, Result, Sample};


/// Gains that differ by at most this amount are treated as ties.
pub(crate) const GAIN_TOLERANCE: f64 = 1e-12;


/// Returns the number of occurrences of each target label
/// among `indices`.
pub(crate) fn label_counts<'a>(sample: &'a Sample, indices: &[usize])
    -> BTreeMap<&'a str, usize>
{
    let target = sample.target();
    let mut counter = BTreeMap::new();
    for &i in indices {
        *counter.entry(target[i].as_str()).or_insert(0_usize) += 1;
    }
    counter
}


/// Returns the entropic-impurity (base 2) of the given counts.
#[inline(always)]
fn entropic_impurity(counter: &BTreeMap<&str, usize>) -> f64 {
    let total = counter.values().sum::<usize>();
    if total == 0 || counter.len() < 2 { return 0f64; }

    let total = total as f64;
    counter.values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Returns the entropy of the target labels among `indices`.
/// The entropy of an empty or label-homogeneous subset is `0`.
pub fn entropy(sample: &Sample, indices: &[usize]) -> f64 {
    let counter = label_counts(sample, indices);
    entropic_impurity(&counter)
}


/// Partitions `indices` by the value of `feature`.
/// Only the values observed among `indices` appear as keys,
/// and each part keeps the order of `indices`.
pub fn partition<'a>(
    sample:  &'a Sample,
    indices: &[usize],
    feature: &str,
) -> Result<BTreeMap<&'a str, Vec<usize>>>
{
    let column = sample.feature(feature)?;
    let mut parts: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for &i in indices {
        let value = column.value(i)
            .ok_or_else(|| Id3Error::MissingFeatureValue {
                feature: feature.to_string(),
                row: i,
            })?;
        parts.entry(value).or_default().push(i);
    }
    Ok(parts)
}


/// Returns the information gain of splitting `indices` by `feature`,
/// that is, the entropy of `indices` minus the size-weighted entropy
/// of the parts produced by [`partition`].
///
/// The result is never negative.
pub fn information_gain(
    sample:  &Sample,
    indices: &[usize],
    feature: &str,
) -> Result<f64>
{
    let parts = partition(sample, indices, feature)?;
    if indices.is_empty() { return Ok(0f64); }

    let baseline = entropy(sample, indices);
    let total = indices.len() as f64;
    let remaining = parts.values()
        .map(|part| (part.len() as f64 / total) * entropy(sample, part))
        .sum::<f64>();

    Ok((baseline - remaining).max(0f64))
}


/// Returns the candidate with the greatest information gain
/// together with its gain.
/// On ties, the candidate that comes first in `candidates` wins.
/// Returns `None` if `candidates` is empty.
pub fn best_feature<'f>(
    sample:     &Sample,
    indices:    &[usize],
    candidates: &[&'f str],
) -> Result<Option<(&'f str, f64)>>
{
    let mut best: Option<(&'f str, f64)> = None;
    for &feature in candidates {
        let gain = information_gain(sample, indices, feature)?;
        tracing::trace!(feature, gain, "information gain");

        match best {
            Some((_, best_gain)) if gain <= best_gain + GAIN_TOLERANCE => {},
            _ => { best = Some((feature, gain)); },
        }
    }
    Ok(best)
}
