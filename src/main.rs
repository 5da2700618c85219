use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use runstats::config::AnalysisParams;
use runstats::error::RsResult;
use runstats::loader;
use runstats::record::Record;
use runstats::roster::Roster;
use std::path::Path;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/export.json")]
    export: String,

    #[arg(global = true, short, long, default_value = "data/roster.json")]
    roster: String,

    /// JSON file with analysis parameters; CLI flags override it.
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the `;`-delimited source file into a JSON export.
    Convert(cmd::convert::ConvertArgs),
    /// List ids present in only one of two exports.
    Diff(cmd::diff::DiffArgs),
    /// Tag breakdown per player group.
    Styles(cmd::styles::StylesArgs),
    /// Interactive drill-down over one group's tag breakdown.
    Explore(cmd::explore::ExploreArgs),
    /// Best N-minute stretch of author medals.
    Stretch(cmd::analysis::StretchArgs),
    /// Runs whose previous PB was just short of the author time.
    NearMisses(cmd::analysis::NearMissArgs),
    /// Runs that finished exactly on the author time.
    Exact(cmd::analysis::ExactArgs),
    /// Average load time between runs per day.
    LoadTimes(cmd::analysis::LoadTimeArgs),
}

/// Shared inputs for commands that read an export.
pub struct Workspace {
    pub records: Vec<Record>,
    pub roster: Roster,
}

impl Workspace {
    fn load(cli: &Cli) -> RsResult<Self> {
        let records = loader::load_export(&cli.export)?;

        let roster = if Path::new(&cli.roster).exists() {
            info!("👥 Loading Roster: {}", cli.roster);
            Roster::load_from_file(&cli.roster)?
        } else {
            warn!(
                "⚠️  Roster '{}' not found. Treating all players as one group.",
                cli.roster
            );
            Roster::default()
        };

        Ok(Self { records, roster })
    }
}

/// File parameters (if any) overlaid with explicit CLI flags.
fn resolve_params(
    cli: &Cli,
    cli_params: &AnalysisParams,
    sub_matches: Option<&ArgMatches>,
) -> RsResult<AnalysisParams> {
    let params = match (&cli.params, sub_matches) {
        (Some(path), Some(matches)) => {
            info!("⚖️  Loading Parameters from: {}", path);
            let mut file_params = AnalysisParams::load_from_file(path)?;
            file_params.merge_from_cli(cli_params, matches);
            file_params
        }
        (Some(path), None) => AnalysisParams::load_from_file(path)?,
        (None, _) => cli_params.clone(),
    };
    params.validate()?;
    Ok(params)
}

fn run(cli: Cli, matches: &ArgMatches) -> RsResult<()> {
    match &cli.command {
        Commands::Convert(args) => return cmd::convert::run(args),
        Commands::Diff(args) => return cmd::diff::run(args),
        _ => {}
    }

    let ws = Workspace::load(&cli)?;

    match &cli.command {
        Commands::Styles(args) => {
            let params = resolve_params(&cli, &args.params, matches.subcommand_matches("styles"))?;
            cmd::styles::run(args, &params, &ws)
        }
        Commands::Explore(args) => {
            let params =
                resolve_params(&cli, &args.params, matches.subcommand_matches("explore"))?;
            cmd::explore::run(args, &params, &ws)
        }
        Commands::Stretch(args) => cmd::analysis::stretch(args, &ws),
        Commands::NearMisses(args) => cmd::analysis::near_misses(args, &ws),
        Commands::Exact(args) => cmd::analysis::exact(args, &ws),
        Commands::LoadTimes(args) => cmd::analysis::load_times(args, &ws),
        Commands::Convert(_) | Commands::Diff(_) => Ok(()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
