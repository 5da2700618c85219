#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use runstats::record::{Medal, Record};

/// Builder for Record to keep fixtures short.
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: u64, styles: &str) -> Self {
        Self {
            record: Record {
                id,
                map_id: 1000 + id,
                player: "lars".to_string(),
                datetime: at_minute(id as i64),
                medal: Medal::Gold,
                time_spent: 60_000,
                mapper: "mapper".to_string(),
                styles: styles.to_string(),
                skip_type: "None".to_string(),
                at_time: 30_000,
                final_time: 31_000,
                current_medal_count: 0,
                free_skip_count: 0,
                pb_before_fin: 35_000,
                map_title: format!("Map {}", id),
                current_gold_count: 0,
            },
        }
    }

    pub fn player(mut self, player: &str) -> Self {
        self.record.player = player.to_string();
        self
    }

    pub fn medal(mut self, medal: Medal) -> Self {
        self.record.medal = medal;
        self
    }

    pub fn skips(mut self, skips: u32) -> Self {
        self.record.free_skip_count = skips;
        self
    }

    pub fn minute(mut self, minute: i64) -> Self {
        self.record.datetime = at_minute(minute);
        self
    }

    pub fn time_spent(mut self, ms: i64) -> Self {
        self.record.time_spent = ms;
        self
    }

    pub fn times(mut self, at: i64, final_time: i64, pb_before: i64) -> Self {
        self.record.at_time = at;
        self.record.final_time = final_time;
        self.record.pb_before_fin = pb_before;
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// Minutes after 2024-05-01 00:00 UTC.
pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(minute)
}

/// Records carrying the given tag strings, ids from 1.
pub fn tagged(styles: &[&str]) -> Vec<Record> {
    styles
        .iter()
        .enumerate()
        .map(|(i, s)| RecordBuilder::new(i as u64 + 1, s).build())
        .collect()
}

pub fn refs(records: &[Record]) -> Vec<&Record> {
    records.iter().collect()
}

/// Header line of the semicolon-delimited source format.
pub const SOURCE_HEADER: &str = "id;mapId;player;datetime;medal;timeSpent;mapper;styles;skipType;atTime;finalTime;currentMedalCount;freeSkipCount;pbBeforeFin;mapTitle;currentGoldCount";
