use crate::reports;
use crate::Workspace;
use clap::Args;
use runstats::config::AnalysisParams;
use runstats::error::RsResult;
use runstats::navigator::Navigator;
use runstats::roster::Roster;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub params: AnalysisParams,

    /// Group to explore (default: the first group in the roster).
    #[arg(short, long)]
    pub group: Option<String>,
}

const HELP: &str = "commands: drill | jump N | mode LABEL | cutoff PERCENT | reset | show | help | quit";

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Drill,
    Jump(usize),
    Mode(String),
    Cutoff(f64),
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "drill" | "d" | "other" => Ok(Action::Drill),
            "jump" | "j" => match rest.parse::<usize>() {
                Ok(0) => Err("levels start at 1".to_string()),
                Ok(n) => Ok(Action::Jump(n)),
                Err(_) => Err(format!("'{}' is not a level number", rest)),
            },
            "mode" | "m" => Ok(Action::Mode(rest.to_string())),
            "cutoff" | "c" => rest
                .parse::<f64>()
                .map(|pct| Action::Cutoff(pct / 100.0))
                .map_err(|_| format!("'{}' is not a percentage", rest)),
            "reset" | "r" => Ok(Action::Reset),
            "show" | "s" | "" => Ok(Action::Show),
            "help" | "h" | "?" => Ok(Action::Help),
            "quit" | "q" | "exit" => Ok(Action::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

pub fn run(args: &ExploreArgs, params: &AnalysisParams, ws: &Workspace) -> RsResult<()> {
    let name = match &args.group {
        Some(g) => g.clone(),
        None => ws.roster.group_names()[0].to_string(),
    };
    let records = ws.roster.select(&name, &ws.records)?;
    let mut nav = Navigator::from_params(records, params)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&name, &mut nav, &ws.roster, stdin.lock(), stdout.lock())
}

fn session<R: BufRead, W: Write>(
    name: &str,
    nav: &mut Navigator<'_>,
    roster: &Roster,
    mut input: R,
    mut out: W,
) -> RsResult<()> {
    writeln!(out, "{}", reports::level_table(name, nav, roster))?;
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let action = match line.parse::<Action>() {
            Ok(a) => a,
            Err(msg) => {
                writeln!(out, "⚠️  {}", msg)?;
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Action::Show => Ok(()),
            Action::Drill => {
                if !nav.drill_down() {
                    writeln!(out, "Already at the last level.")?;
                }
                Ok(())
            }
            Action::Jump(n) => {
                nav.jump_to(n.saturating_sub(1));
                Ok(())
            }
            Action::Mode(label) => nav.set_mode_label(&label),
            Action::Cutoff(ratio) => nav.set_cutoff(ratio),
            Action::Reset => {
                nav.reset();
                Ok(())
            }
        };

        match outcome {
            Ok(()) => writeln!(out, "{}", reports::level_table(name, nav, roster))?,
            Err(e) => writeln!(out, "⚠️  {}", e)?,
        }
    }
    Ok(())
}
