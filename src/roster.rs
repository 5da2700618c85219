use crate::error::{RsResult, RunStatsError};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

pub const ALL_GROUP: &str = "All";
pub const DEFAULT_COLOR: [u8; 3] = [0x80, 0x80, 0x80];

fn default_color() -> [u8; 3] {
    DEFAULT_COLOR
}

/// A named player with every account alias they play under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerGroup {
    pub aliases: Vec<String>,
    #[serde(default = "default_color")]
    pub color: [u8; 3],
}

impl PlayerGroup {
    pub fn contains(&self, player: &str) -> bool {
        self.aliases.iter().any(|a| a == player)
    }
}

/// Player groupings plus the fixed tag colour table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Roster {
    pub groups: BTreeMap<String, PlayerGroup>,
    pub tag_colors: HashMap<String, String>,
}

impl Roster {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RunStatsError::Config(format!("Failed to read roster {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn group_names(&self) -> Vec<&str> {
        if self.groups.is_empty() {
            return vec![ALL_GROUP];
        }
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn color_of(&self, group: &str) -> [u8; 3] {
        self.groups
            .get(group)
            .map(|g| g.color)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Records of one group. Without any configured groups the only valid
    /// name is `All`, which matches every record.
    pub fn select<'a>(&self, group: &str, records: &'a [Record]) -> RsResult<Vec<&'a Record>> {
        if self.groups.is_empty() && group == ALL_GROUP {
            return Ok(records.iter().collect());
        }
        let members = self.groups.get(group).ok_or_else(|| {
            RunStatsError::Validation(format!(
                "Unknown group '{}' (known: {})",
                group,
                self.group_names().join(", ")
            ))
        })?;
        Ok(records.iter().filter(|r| members.contains(&r.player)).collect())
    }

    /// Every group's records, in group-name order.
    pub fn partition<'a>(&self, records: &'a [Record]) -> Vec<(String, Vec<&'a Record>)> {
        if self.groups.is_empty() {
            return vec![(ALL_GROUP.to_string(), records.iter().collect())];
        }
        self.groups
            .iter()
            .map(|(name, members)| {
                let subset = records.iter().filter(|r| members.contains(&r.player)).collect();
                (name.clone(), subset)
            })
            .collect()
    }

    /// `partition` narrowed to one group when a name is given.
    pub fn groups_for<'a>(
        &self,
        group: Option<&str>,
        records: &'a [Record],
    ) -> RsResult<Vec<(String, Vec<&'a Record>)>> {
        match group {
            Some(name) => Ok(vec![(name.to_string(), self.select(name, records)?)]),
            None => Ok(self.partition(records)),
        }
    }
}
