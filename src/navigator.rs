use crate::aggregate::{self, Grouping};
use crate::config::{self, AnalysisParams};
use crate::error::RsResult;
use crate::record::Record;
use crate::weighting::{self, TagWeights, WeightMode};
use tracing::{debug, info};

pub const OTHER_LABEL: &str = "Other";

/// One depth step of the drill-down chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Level<'a> {
    pub visible: TagWeights,
    pub other_total: u64,
    /// Records this level was weighted from.
    pub source: Vec<&'a Record>,
}

impl<'a> Level<'a> {
    /// Visible weight plus "Other"; equals the raw weight sum of `source`.
    pub fn total(&self) -> u64 {
        weighting::total(&self.visible) + self.other_total
    }

    pub fn has_other(&self) -> bool {
        self.other_total > 0
    }

    /// Visible tags sorted by weight (descending), ties by label.
    pub fn ordered(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .visible
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// A row of the current level as a consumer would display it.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub weight: u64,
    /// Fraction of the current level's total.
    pub level_share: f64,
    /// Fraction of the level-0 grand total.
    pub overall_share: f64,
    pub is_other: bool,
}

/// Builds the full chain of levels for one configuration.
///
/// Each level after the first is scoped to the records whose raw tag string
/// contains none of the previous level's visible labels. The chain stops when
/// a level has nothing in "Other", when the residual set is empty, or after
/// `max_depth` levels.
pub fn build_levels<'a>(
    records: &[&'a Record],
    mode: WeightMode,
    cutoff_ratio: f64,
    max_depth: usize,
) -> Vec<Level<'a>> {
    let mut levels = Vec::new();
    let mut current: Vec<&'a Record> = records.to_vec();

    for depth in 0..max_depth {
        let weights = weighting::compute(current.iter().copied(), mode);
        let Grouping {
            visible,
            other_total,
        } = aggregate::group(&weights, cutoff_ratio);

        let next = if other_total > 0 {
            residual(&current, &visible)
        } else {
            Vec::new()
        };

        debug!(
            "Level {}: {} records, {} visible tags, other={}, residual={}",
            depth,
            current.len(),
            visible.len(),
            other_total,
            next.len()
        );

        let source = std::mem::replace(&mut current, next);
        levels.push(Level {
            visible,
            other_total,
            source,
        });

        if other_total == 0 || current.is_empty() {
            break;
        }
    }

    levels
}

/// Records that mention none of the visible labels anywhere in their tag
/// string. With no visible labels nothing can be narrowed, so the residual
/// is empty.
fn residual<'a>(records: &[&'a Record], visible: &TagWeights) -> Vec<&'a Record> {
    if visible.is_empty() {
        return Vec::new();
    }
    let labels: Vec<&str> = visible.keys().map(String::as_str).collect();
    records
        .iter()
        .copied()
        .filter(|r| !r.styles_contain_any(&labels))
        .collect()
}

/// Drill-down state for one grouping of records.
///
/// The level chain is rebuilt wholesale on every configuration change and
/// navigation only moves an index over it.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    records: Vec<&'a Record>,
    mode: WeightMode,
    cutoff_ratio: f64,
    default_cutoff: f64,
    max_depth: usize,
    levels: Vec<Level<'a>>,
    grand_totals: TagWeights,
    current: usize,
}

impl<'a> Navigator<'a> {
    /// `cutoff_ratio` also becomes the value `reset` restores.
    pub fn new(
        records: Vec<&'a Record>,
        mode: WeightMode,
        cutoff_ratio: f64,
        max_depth: usize,
    ) -> RsResult<Self> {
        let mode = mode.validate()?;
        let cutoff_ratio = config::validate_cutoff(cutoff_ratio)?;
        let max_depth = config::validate_depth(max_depth)?;
        Ok(Self::build(records, mode, cutoff_ratio, max_depth))
    }

    pub fn from_params(records: Vec<&'a Record>, params: &AnalysisParams) -> RsResult<Self> {
        Self::new(
            records,
            params.get_mode()?,
            params.cutoff_ratio,
            params.max_depth,
        )
    }

    pub fn with_defaults(records: Vec<&'a Record>) -> Self {
        let params = AnalysisParams::default();
        Self::build(
            records,
            WeightMode::default(),
            params.cutoff_ratio,
            params.max_depth,
        )
    }

    // Callers validate first.
    fn build(
        records: Vec<&'a Record>,
        mode: WeightMode,
        cutoff_ratio: f64,
        max_depth: usize,
    ) -> Self {
        let mut nav = Self {
            records,
            mode,
            cutoff_ratio,
            default_cutoff: cutoff_ratio,
            max_depth,
            levels: Vec::new(),
            grand_totals: TagWeights::new(),
            current: 0,
        };
        nav.rebuild(mode, cutoff_ratio);
        nav
    }

    fn rebuild(&mut self, mode: WeightMode, cutoff_ratio: f64) {
        let grand_totals = weighting::compute(self.records.iter().copied(), mode);
        let levels = build_levels(&self.records, mode, cutoff_ratio, self.max_depth);

        info!(
            "Rebuilt chain: mode={}, cutoff={:.3}, {} records -> {} levels",
            mode,
            cutoff_ratio,
            self.records.len(),
            levels.len()
        );

        self.mode = mode;
        self.cutoff_ratio = cutoff_ratio;
        self.grand_totals = grand_totals;
        self.levels = levels;
        self.current = 0;
    }

    pub fn current_level(&self) -> &Level<'a> {
        &self.levels[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn levels(&self) -> &[Level<'a>] {
        &self.levels
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn cutoff_ratio(&self) -> f64 {
        self.cutoff_ratio
    }

    pub fn default_cutoff(&self) -> f64 {
        self.default_cutoff
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Level-0 raw weights, unaffected by the current depth.
    pub fn grand_totals(&self) -> &TagWeights {
        &self.grand_totals
    }

    pub fn grand_total(&self) -> u64 {
        weighting::total(&self.grand_totals)
    }

    /// Whether "Other" at the current index leads anywhere.
    pub fn can_drill(&self) -> bool {
        self.current + 1 < self.levels.len()
    }

    /// Moves one level deeper. Returns `false` (and stays put) at the end of
    /// the chain.
    pub fn drill_down(&mut self) -> bool {
        if self.can_drill() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Selects `index`, clamped into the chain. Returns the index selected.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.levels.len() - 1);
        self.current
    }

    pub fn set_mode(&mut self, mode: WeightMode) -> RsResult<()> {
        let mode = mode.validate()?;
        self.rebuild(mode, self.cutoff_ratio);
        Ok(())
    }

    /// Parses a menu label such as "Best [gold]" and switches to it.
    pub fn set_mode_label(&mut self, label: &str) -> RsResult<()> {
        let mode: WeightMode = label.parse()?;
        self.set_mode(mode)
    }

    pub fn set_cutoff(&mut self, ratio: f64) -> RsResult<()> {
        let ratio = config::validate_cutoff(ratio)?;
        self.rebuild(self.mode, ratio);
        Ok(())
    }

    /// Restores the configured cutoff and returns to the top level.
    pub fn reset(&mut self) {
        self.rebuild(self.mode, self.default_cutoff);
    }

    /// Current level as display rows, "Other" last when present.
    pub fn slices(&self) -> Vec<Slice> {
        let level = self.current_level();
        let level_total = level.total();
        let grand_total = self.grand_total();

        let share = |part: u64, whole: u64| -> f64 {
            if whole > 0 {
                part as f64 / whole as f64
            } else {
                0.0
            }
        };

        let mut slices: Vec<Slice> = level
            .ordered()
            .into_iter()
            .map(|(label, weight)| Slice {
                label: label.to_string(),
                weight,
                level_share: share(weight, level_total),
                overall_share: share(
                    self.grand_totals.get(label).copied().unwrap_or(0),
                    grand_total,
                ),
                is_other: false,
            })
            .collect();

        if level.has_other() {
            slices.push(Slice {
                label: OTHER_LABEL.to_string(),
                weight: level.other_total,
                level_share: share(level.other_total, level_total),
                overall_share: share(level.other_total, grand_total),
                is_other: true,
            });
        }

        slices
    }
}
