use crate::error::{RsResult, RunStatsError};
use crate::weighting::WeightMode;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CUTOFF_RATIO: f64 = 0.03;
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Knobs for the tag breakdown. Usable both as CLI flags and as a JSON file.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisParams {
    /// Weighting mode: "Most", "Best [at]", "Best [gold]" or "Worst [skips]".
    #[arg(short, long, default_value = "Most")]
    pub mode: String,

    /// Tags below this share of the level total are folded into "Other".
    #[arg(long, default_value_t = DEFAULT_CUTOFF_RATIO)]
    pub cutoff_ratio: f64,

    /// Maximum number of drill-down levels.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            mode: "Most".to_string(),
            cutoff_ratio: DEFAULT_CUTOFF_RATIO,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AnalysisParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RunStatsError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn get_mode(&self) -> RsResult<WeightMode> {
        self.mode.parse()
    }

    /// Checks every field without building anything.
    pub fn validate(&self) -> RsResult<()> {
        self.get_mode()?;
        validate_cutoff(self.cutoff_ratio)?;
        validate_depth(self.max_depth)?;
        Ok(())
    }

    /// Overwrites fields the user typed on the command line; defaults the
    /// parser filled in leave the file values alone.
    pub fn merge_from_cli(&mut self, cli_params: &AnalysisParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(mode, "mode");
        update_if_present!(cutoff_ratio, "cutoff_ratio");
        update_if_present!(max_depth, "max_depth");
    }
}

pub fn validate_cutoff(ratio: f64) -> RsResult<f64> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(RunStatsError::InvalidCutoff(ratio))
    }
}

pub fn validate_depth(depth: usize) -> RsResult<usize> {
    if depth == 0 {
        return Err(RunStatsError::InvalidDepth(depth));
    }
    Ok(depth)
}
