use crate::weighting::{self, TagWeights};

/// Result of folding rare tags into a single "Other" bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grouping {
    pub visible: TagWeights,
    pub other_total: u64,
}

/// Splits `weights` into tags whose share of the total is at least
/// `cutoff_ratio` and an "Other" sum of everything below it.
///
/// A zero total keeps every entry visible with nothing in "Other".
pub fn group(weights: &TagWeights, cutoff_ratio: f64) -> Grouping {
    let total = weighting::total(weights);
    if total == 0 {
        return Grouping {
            visible: weights.clone(),
            other_total: 0,
        };
    }

    let mut grouping = Grouping::default();
    for (tag, &weight) in weights {
        let ratio = weight as f64 / total as f64;
        if ratio < cutoff_ratio {
            grouping.other_total += weight;
        } else {
            grouping.visible.insert(tag.clone(), weight);
        }
    }
    grouping
}
