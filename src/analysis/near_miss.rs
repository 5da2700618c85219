use crate::record::Record;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NearMissOrder {
    #[default]
    Datetime,
    /// Smallest gap to the author time first.
    Difference,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearMiss<'a> {
    pub record: &'a Record,
    /// `atTime - pbBeforeFin` in milliseconds.
    pub pb_diff: i64,
}

/// Runs where the personal best before the finish was already within
/// `threshold_ms` of the author time (but not past it).
pub fn near_misses<'a>(
    records: &[&'a Record],
    threshold_ms: i64,
    order: NearMissOrder,
) -> Vec<NearMiss<'a>> {
    let mut hits: Vec<NearMiss<'a>> = records
        .iter()
        .map(|&record| NearMiss {
            record,
            pb_diff: record.at_time - record.pb_before_fin,
        })
        .filter(|m| (0..=threshold_ms).contains(&m.pb_diff))
        .collect();

    match order {
        NearMissOrder::Datetime => hits.sort_by_key(|m| m.record.datetime),
        NearMissOrder::Difference => hits.sort_by_key(|m| m.pb_diff),
    }
    hits
}
