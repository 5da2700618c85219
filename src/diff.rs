use crate::error::RsResult;
use crate::record::Record;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ids present in one export but not the other, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdDiff {
    pub only_in_first: Vec<u64>,
    pub only_in_second: Vec<u64>,
}

impl IdDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

// Only the id matters here; the rest of each entry may be partial or stale.
#[derive(Deserialize)]
struct IdOnly {
    id: u64,
}

pub fn diff_ids<I, J>(first: I, second: J) -> IdDiff
where
    I: IntoIterator<Item = u64>,
    J: IntoIterator<Item = u64>,
{
    let a: BTreeSet<u64> = first.into_iter().collect();
    let b: BTreeSet<u64> = second.into_iter().collect();

    IdDiff {
        only_in_first: a.difference(&b).copied().collect(),
        only_in_second: b.difference(&a).copied().collect(),
    }
}

pub fn diff_records(first: &[Record], second: &[Record]) -> IdDiff {
    diff_ids(first.iter().map(|r| r.id), second.iter().map(|r| r.id))
}

fn load_ids<P: AsRef<Path>>(path: P) -> RsResult<Vec<u64>> {
    let file = File::open(path)?;
    let entries: Vec<IdOnly> = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries.into_iter().map(|e| e.id).collect())
}

pub fn diff_export_files<P: AsRef<Path>, Q: AsRef<Path>>(first: P, second: Q) -> RsResult<IdDiff> {
    Ok(diff_ids(load_ids(first)?, load_ids(second)?))
}
