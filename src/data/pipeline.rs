use std::path::Path;

use chrono::NaiveDate;

use super::error::PipelineError;
use super::loader::load_table;
use super::profile::{clean_profiles, ProfilePair};
use super::schema::TableSchema;
use super::sst::{clean_sst, SstRecord};

/// Load → validate → clean the temperature profiles source.
pub fn run_profiles(path: &Path) -> Result<ProfilePair, PipelineError> {
    let schema = TableSchema::profiles();
    let table = load_table(path)?;
    schema.validate(&table)?;
    schema.require_parseable(&table)?;

    let pair = clean_profiles(&table, &schema);
    log::info!(
        "{}: {} rows read, profile 1 kept {}, profile 2 kept {}",
        path.display(),
        table.len(),
        pair.first.len(),
        pair.second.len()
    );
    Ok(pair)
}

/// Load → validate → clean the SST source, dating rows from `reference`.
pub fn run_sst(path: &Path, reference: NaiveDate) -> Result<Vec<SstRecord>, PipelineError> {
    let schema = TableSchema::sst();
    let table = load_table(path)?;
    schema.validate(&table)?;
    schema.require_parseable(&table)?;

    let records = clean_sst(&table, &schema, reference);
    log::info!(
        "{}: {} rows read, {} kept (reference date {reference})",
        path.display(),
        table.len(),
        records.len()
    );
    Ok(records)
}
