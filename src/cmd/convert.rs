use clap::Args;
use runstats::error::RsResult;
use runstats::loader;

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Semicolon-delimited source file.
    pub input: String,

    /// Destination JSON export.
    #[arg(default_value = "export.json")]
    pub output: String,
}

pub fn run(args: &ConvertArgs) -> RsResult<()> {
    let written = loader::convert(&args.input, &args.output)?;
    println!("Converted {} records -> {}", written, args.output);
    Ok(())
}
