use crate::error::{RsResult, RunStatsError};
use crate::record::{Medal, Record};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Tag label -> accumulated weight.
pub type TagWeights = BTreeMap<String, u64>;

/// How a record contributes to the tags it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightMode {
    /// "Most": +1 per tag occurrence.
    #[default]
    Frequency,
    /// "Best [medal]": frequency over records holding that medal only.
    MedalFiltered(Medal),
    /// "Worst [skips]": +freeSkipCount per tag occurrence.
    SkipWeighted,
}

impl WeightMode {
    /// Every mode a caller may select, in menu order.
    pub const ALL: [WeightMode; 4] = [
        WeightMode::Frequency,
        WeightMode::MedalFiltered(Medal::At),
        WeightMode::MedalFiltered(Medal::Gold),
        WeightMode::SkipWeighted,
    ];

    /// Rejects medal filters outside the supported set.
    pub fn validate(self) -> RsResult<Self> {
        match self {
            WeightMode::MedalFiltered(Medal::At | Medal::Gold) => Ok(self),
            WeightMode::MedalFiltered(other) => {
                Err(RunStatsError::InvalidMode(format!("Best [{}]", other)))
            }
            _ => Ok(self),
        }
    }

    pub fn label(&self) -> String {
        match self {
            WeightMode::Frequency => "Most".to_string(),
            WeightMode::MedalFiltered(m) => format!("Best [{}]", m),
            WeightMode::SkipWeighted => "Worst [skips]".to_string(),
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for WeightMode {
    type Err = RunStatsError;

    /// Accepts the menu labels ("Most", "Best [at]", "Best [gold]",
    /// "Worst [skips]") in any case, with or without the inner space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let mode = match key.as_str() {
            "most" | "frequency" => WeightMode::Frequency,
            "worst[skips]" | "skips" | "skipweighted" => WeightMode::SkipWeighted,
            k => {
                let medal = k
                    .strip_prefix("best[")
                    .and_then(|rest| rest.strip_suffix(']'))
                    .and_then(|m| Medal::from_str(m).ok())
                    .ok_or_else(|| RunStatsError::InvalidMode(s.to_string()))?;
                WeightMode::MedalFiltered(medal)
            }
        };

        mode.validate()
    }
}

/// Accumulates per-tag weights over `records`.
///
/// Never fails. Records without tags contribute nothing; under
/// `SkipWeighted` a record with zero skips still registers its tags at 0.
pub fn compute<'a, I>(records: I, mode: WeightMode) -> TagWeights
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut weights = TagWeights::new();

    for record in records {
        let contribution = match mode {
            WeightMode::Frequency => 1,
            WeightMode::MedalFiltered(target) => {
                if record.medal != target {
                    continue;
                }
                1
            }
            WeightMode::SkipWeighted => record.free_skip_count as u64,
        };

        // Duplicates inside one styles string are counted per occurrence.
        for tag in record.tags() {
            *weights.entry(tag.to_string()).or_default() += contribution;
        }
    }

    weights
}

pub fn total(weights: &TagWeights) -> u64 {
    weights.values().sum()
}
