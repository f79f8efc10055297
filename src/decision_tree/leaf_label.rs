use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Sample;


/// The label given to a leaf that still holds mixed labels
/// after every candidate feature has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafLabel {
    /// The most frequent label.
    /// Ties are broken by the label encountered first in row order.
    #[default]
    Majority,
    /// The label of the first row of the subset.
    FirstIndex,
}


impl fmt::Display for LeafLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Majority => "Majority vote",
            Self::FirstIndex => "First row",
        };

        write!(f, "{name}")
    }
}


impl LeafLabel {
    /// Returns the label for the rows `indices`.
    /// Returns `None` if `indices` is empty.
    pub(crate) fn choose<'a>(&self, sample: &'a Sample, indices: &[usize])
        -> Option<&'a str>
    {
        let target = sample.target();
        match self {
            Self::FirstIndex => {
                indices.first().map(|&i| target[i].as_str())
            },
            Self::Majority => {
                // Keep the first-seen order so that ties are stable.
                let mut counter: Vec<(&str, usize)> = Vec::new();
                for &i in indices {
                    let y = target[i].as_str();
                    match counter.iter_mut().find(|(label, _)| *label == y) {
                        Some((_, count)) => { *count += 1; },
                        None => { counter.push((y, 1)); },
                    }
                }

                let mut best: Option<(&str, usize)> = None;
                for (label, count) in counter {
                    match best {
                        Some((_, best_count)) if count <= best_count => {},
                        _ => { best = Some((label, count)); },
                    }
                }
                best.map(|(label, _)| label)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn test_sample() -> Sample {
        Sample::from_records(
            &["f", "class"],
            &[["a", "no"], ["a", "yes"], ["a", "yes"], ["a", "no"], ["a", "yes"]],
            "class",
        ).unwrap()
    }

    #[test]
    fn majority_and_first_index_diverge() {
        let sample = test_sample();
        let idx = [0, 1, 2, 3, 4];
        assert_eq!(LeafLabel::Majority.choose(&sample, &idx), Some("yes"));
        assert_eq!(LeafLabel::FirstIndex.choose(&sample, &idx), Some("no"));
    }

    #[test]
    fn majority_ties_go_to_the_first_label() {
        let sample = test_sample();
        assert_eq!(LeafLabel::Majority.choose(&sample, &[0, 1]), Some("no"));
        assert_eq!(LeafLabel::Majority.choose(&sample, &[1, 0]), Some("yes"));
        assert_eq!(LeafLabel::Majority.choose(&sample, &[]), None);
    }
}
