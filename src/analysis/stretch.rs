use crate::record::{Medal, Record};
use chrono::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct StretchEntry<'a> {
    pub record: &'a Record,
    /// Minutes since the first record of the stretch.
    pub offset_minutes: f64,
}

/// The densest run of author medals that fits in `window_minutes`.
///
/// Candidate windows end on each author medal and reach back `window_minutes`
/// (inclusive). The earliest window wins a tie. Empty input gives an empty
/// result. A window reaching past the representable date range spans
/// everything.
pub fn best_stretch<'a>(records: &[&'a Record], window_minutes: i64) -> Vec<StretchEntry<'a>> {
    let mut ats: Vec<&'a Record> = records
        .iter()
        .copied()
        .filter(|r| r.medal == Medal::At)
        .collect();
    if ats.is_empty() {
        return Vec::new();
    }
    ats.sort_by_key(|r| r.datetime);

    // A window too large for chrono covers every record.
    let window = Duration::try_minutes(window_minutes.max(0));
    let (mut best_start, mut best_end, mut best_count) = (0, 0, 0);
    let mut start = 0;

    for end in 0..ats.len() {
        let window_start = window.and_then(|w| ats[end].datetime.checked_sub_signed(w));
        if let Some(window_start) = window_start {
            while ats[start].datetime < window_start {
                start += 1;
            }
        }
        let count = end - start + 1;
        if count > best_count {
            best_count = count;
            best_start = start;
            best_end = end;
        }
    }

    let origin = ats[best_start].datetime;
    ats[best_start..=best_end]
        .iter()
        .map(|&record| StretchEntry {
            record,
            offset_minutes: (record.datetime - origin).num_milliseconds() as f64 / 60_000.0,
        })
        .collect()
}
