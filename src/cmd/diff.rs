use clap::Args;
use runstats::diff::diff_export_files;
use runstats::error::RsResult;

#[derive(Args, Debug, Clone)]
pub struct DiffArgs {
    pub first: String,
    pub second: String,
}

pub fn run(args: &DiffArgs) -> RsResult<()> {
    let diff = diff_export_files(&args.first, &args.second)?;

    print_ids("File 1", &diff.only_in_first);
    print_ids("File 2", &diff.only_in_second);
    Ok(())
}

fn print_ids(name: &str, ids: &[u64]) {
    if ids.is_empty() {
        println!("No unique IDs in {}.", name);
        return;
    }
    println!("IDs only in {}:", name);
    for id in ids {
        println!("{}", id);
    }
}
