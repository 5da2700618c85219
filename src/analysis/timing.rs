use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Sec,
    Min,
    Hours,
}

impl TimeUnit {
    pub fn convert_millis(&self, ms: f64) -> f64 {
        match self {
            TimeUnit::Sec => ms / 1_000.0,
            TimeUnit::Min => ms / 60_000.0,
            TimeUnit::Hours => ms / 3_600_000.0,
        }
    }
}

/// Records whose final time equals the author time exactly.
pub fn exact_matches<'a>(records: &[&'a Record]) -> Vec<&'a Record> {
    records
        .iter()
        .copied()
        .filter(|r| r.at_time == r.final_time)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyLoad {
    pub day: NaiveDate,
    pub average: f64,
    pub samples: usize,
}

/// Average gap between runs per calendar day.
///
/// For consecutive records (by datetime) the load time is the wall-clock gap
/// minus the earlier run's `timeSpent`. Each sample is filed under the day
/// of the later record.
pub fn daily_load_times(records: &[&Record], unit: TimeUnit) -> Vec<DailyLoad> {
    let mut sorted: Vec<&Record> = records.to_vec();
    sorted.sort_by_key(|r| r.datetime);

    let mut by_day: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for pair in sorted.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        let elapsed = (cur.datetime - prev.datetime).num_milliseconds();
        let load = (elapsed - prev.time_spent) as f64;
        by_day
            .entry(cur.datetime.date_naive())
            .or_default()
            .push(unit.convert_millis(load));
    }

    by_day
        .into_iter()
        .map(|(day, loads)| DailyLoad {
            day,
            average: loads.iter().sum::<f64>() / loads.len() as f64,
            samples: loads.len(),
        })
        .collect()
}
