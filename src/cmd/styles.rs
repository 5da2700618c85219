use crate::reports;
use crate::Workspace;
use clap::Args;
use rayon::prelude::*;
use runstats::config::AnalysisParams;
use runstats::error::RsResult;
use runstats::navigator::Navigator;
use runstats::record::Record;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct StylesArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// Only show this group (default: every group in the roster).
    #[arg(short, long)]
    pub group: Option<String>,

    /// Drill-down level to show, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub level: usize,

    /// Print every level of the chain instead of one.
    #[arg(long, default_value_t = false)]
    pub all_levels: bool,
}

/// One navigator per group. Groups are independent, so they build in parallel.
pub fn build_navigators<'a>(
    groups: Vec<(String, Vec<&'a Record>)>,
    params: &AnalysisParams,
) -> RsResult<Vec<(String, Navigator<'a>)>> {
    groups
        .into_par_iter()
        .map(|(name, records)| Navigator::from_params(records, params).map(|nav| (name, nav)))
        .collect()
}

pub fn run(args: &StylesArgs, params: &AnalysisParams, ws: &Workspace) -> RsResult<()> {
    let groups = ws.roster.groups_for(args.group.as_deref(), &ws.records)?;
    let navigators = build_navigators(groups, params)?;

    for (name, mut nav) in navigators {
        if args.all_levels {
            for i in 0..nav.depth() {
                nav.jump_to(i);
                reports::print_level(&name, &nav, &ws.roster);
            }
            continue;
        }

        let wanted = args.level.saturating_sub(1);
        let shown = nav.jump_to(wanted);
        if shown != wanted {
            warn!(
                "⚠️  {} only has {} levels; showing level {}",
                name,
                nav.depth(),
                shown + 1
            );
        }
        reports::print_level(&name, &nav, &ws.roster);
    }
    Ok(())
}
