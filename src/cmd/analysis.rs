use crate::reports;
use crate::Workspace;
use clap::Args;
use runstats::analysis::near_miss::{self, NearMissOrder};
use runstats::analysis::stretch;
use runstats::analysis::timing::{self, TimeUnit};
use runstats::error::RsResult;

#[derive(Args, Debug, Clone)]
pub struct StretchArgs {
    #[arg(short, long)]
    pub group: Option<String>,

    /// Window length in minutes.
    #[arg(short, long, default_value_t = 10)]
    pub minutes: i64,
}

#[derive(Args, Debug, Clone)]
pub struct NearMissArgs {
    #[arg(short, long)]
    pub group: Option<String>,

    /// Largest accepted gap between PB and author time, in ms.
    #[arg(short, long, default_value_t = 10)]
    pub threshold: i64,

    /// "datetime" or "difference".
    #[arg(short, long, default_value = "datetime")]
    pub order: NearMissOrder,
}

#[derive(Args, Debug, Clone)]
pub struct ExactArgs {
    #[arg(short, long)]
    pub group: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LoadTimeArgs {
    /// "sec", "min" or "hours".
    #[arg(short, long, default_value = "sec")]
    pub unit: TimeUnit,
}

pub fn stretch(args: &StretchArgs, ws: &Workspace) -> RsResult<()> {
    for (name, records) in ws.roster.groups_for(args.group.as_deref(), &ws.records)? {
        let best = stretch::best_stretch(&records, args.minutes);
        reports::print_stretch(&name, args.minutes, &best);
    }
    Ok(())
}

pub fn near_misses(args: &NearMissArgs, ws: &Workspace) -> RsResult<()> {
    for (name, records) in ws.roster.groups_for(args.group.as_deref(), &ws.records)? {
        let hits = near_miss::near_misses(&records, args.threshold, args.order);
        reports::print_near_misses(&name, &hits);
    }
    Ok(())
}

pub fn exact(args: &ExactArgs, ws: &Workspace) -> RsResult<()> {
    for (name, records) in ws.roster.groups_for(args.group.as_deref(), &ws.records)? {
        let matches = timing::exact_matches(&records);
        reports::print_records(&format!("Exact author times: {}", name), &matches);
    }
    Ok(())
}

pub fn load_times(args: &LoadTimeArgs, ws: &Workspace) -> RsResult<()> {
    // Gaps only make sense across the whole session, regardless of player.
    let all: Vec<_> = ws.records.iter().collect();
    let days = timing::daily_load_times(&all, args.unit);
    reports::print_load_times(&days, args.unit);
    Ok(())
}
