use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Run outcome classification.
///
/// Exports occasionally carry medal names this crate does not know about; they
/// deserialize to `Other` instead of failing the whole file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Medal {
    At,
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    NoMedal,
    #[serde(other)]
    Other,
}

/// One finished map from the export.
///
/// Field names follow the export's camelCase JSON keys. `styles` is the raw
/// comma-separated tag string and is never normalised in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub map_id: u64,
    pub player: String,
    pub datetime: DateTime<Utc>,
    pub medal: Medal,
    pub time_spent: i64,
    pub mapper: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub styles: String,
    pub skip_type: String,
    pub at_time: i64,
    pub final_time: i64,
    pub current_medal_count: u32,
    pub free_skip_count: u32,
    pub pb_before_fin: i64,
    pub map_title: String,
    pub current_gold_count: u32,
}

// Exports write `"styles": null` for untagged maps.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Tags carried by this record, in source order.
    ///
    /// Tokens are trimmed and empty ones dropped. A tag written twice is
    /// yielded twice.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.styles
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Substring test against the raw tag string, not the parsed tag set.
    pub fn styles_contain_any<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        labels.iter().any(|l| self.styles.contains(l.as_ref()))
    }
}
