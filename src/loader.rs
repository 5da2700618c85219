use crate::error::{RsResult, RunStatsError};
use crate::record::{Medal, Record};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// One row of the semicolon-delimited source file, before normalisation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceRow {
    id: u64,
    map_id: u64,
    player: String,
    datetime: String,
    medal: String,
    time_spent: i64,
    mapper: String,
    #[serde(default)]
    styles: String,
    skip_type: String,
    at_time: i64,
    final_time: i64,
    current_medal_count: u32,
    free_skip_count: u32,
    pb_before_fin: i64,
    map_title: String,
    current_gold_count: u32,
}

/// Parses source timestamps like `2024-05-01 18:22:07.531`.
///
/// Fractional seconds are dropped and the value is taken as UTC. An already
/// normalised `2024-05-01T18:22:07Z` is accepted too.
pub fn parse_source_datetime(raw: &str) -> RsResult<DateTime<Utc>> {
    let trimmed = raw.trim().trim_end_matches('Z').replace(' ', "T");
    let whole_seconds = trimmed.split('.').next().unwrap_or_default();

    NaiveDateTime::parse_from_str(whole_seconds, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| RunStatsError::Validation(format!("Bad datetime '{}': {}", raw, e)))
}

fn parse_medal(raw: &str, row: usize) -> Medal {
    let raw = raw.trim();
    if raw.is_empty() {
        return Medal::NoMedal;
    }
    Medal::from_str(raw).unwrap_or_else(|_| {
        warn!("Row {}: unknown medal '{}', keeping as 'other'", row, raw);
        Medal::Other
    })
}

impl SourceRow {
    fn into_record(self, row: usize) -> RsResult<Record> {
        let datetime = parse_source_datetime(&self.datetime)
            .map_err(|e| RunStatsError::Validation(format!("Row {}: {}", row, e)))?;

        Ok(Record {
            id: self.id,
            map_id: self.map_id,
            player: self.player,
            datetime,
            medal: parse_medal(&self.medal, row),
            time_spent: self.time_spent,
            mapper: self.mapper,
            styles: self.styles,
            skip_type: self.skip_type,
            at_time: self.at_time,
            final_time: self.final_time,
            current_medal_count: self.current_medal_count,
            free_skip_count: self.free_skip_count,
            pb_before_fin: self.pb_before_fin,
            map_title: self.map_title,
            current_gold_count: self.current_gold_count,
        })
    }
}

/// Reads the 16-field source format (header row, `;` delimiter).
pub fn load_source_from_reader<R: Read>(reader: R) -> RsResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize::<SourceRow>().enumerate() {
        // Row numbers are 1-based and skip the header line.
        let row_no = i + 2;
        let row = result?;
        records.push(row.into_record(row_no)?);
    }
    Ok(records)
}

pub fn load_source<P: AsRef<Path>>(path: P) -> RsResult<Vec<Record>> {
    let file = File::open(path.as_ref())?;
    let records = load_source_from_reader(BufReader::new(file))?;
    info!(
        "📂 Loaded {} rows from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

pub fn load_export_from_reader<R: Read>(reader: R) -> RsResult<Vec<Record>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_export<P: AsRef<Path>>(path: P) -> RsResult<Vec<Record>> {
    let file = File::open(path.as_ref())?;
    let records = load_export_from_reader(BufReader::new(file))?;
    info!(
        "📂 Loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

pub fn save_export<P: AsRef<Path>>(path: P, records: &[Record]) -> RsResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;
    Ok(())
}

/// Source file -> JSON export. Returns the number of records written.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(source: P, export: Q) -> RsResult<usize> {
    let records = load_source(source)?;
    save_export(&export, &records)?;
    info!(
        "💾 Wrote {} records to {}",
        records.len(),
        export.as_ref().display()
    );
    Ok(records.len())
}
