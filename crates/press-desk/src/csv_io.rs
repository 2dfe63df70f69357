//! CSV import and export for back-office tables

use crate::logistics::PrintJob;
use crate::submission::Submission;
use crate::types::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read every row of a headed CSV file into `T`
pub async fn read_records<T>(path: impl AsRef<Path>) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send + 'static,
{
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    // CSV parsing is CPU-bound, spawn blocking
    let records = tokio::task::spawn_blocking(move || {
        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<T>, csv::Error>>()
    })
    .await??;

    Ok(records)
}

/// Serialize rows to CSV bytes with a header row.
///
/// An empty slice produces empty output, since the header comes from the first row.
pub fn to_csv_bytes<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| DeskError::Io(e.into_error()))
}

/// Write rows to a CSV file
pub async fn write_records<T>(records: &[T], path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize + Clone + Send + 'static,
{
    let records = records.to_vec();
    let path = path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || to_csv_bytes(&records)).await??;

    tokio::fs::write(&path, bytes).await?;

    Ok(())
}

pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<Vec<Submission>> {
    read_records(path).await
}

pub async fn export_to_csv(submissions: &[Submission], path: impl AsRef<Path>) -> Result<()> {
    write_records(submissions, path).await
}

pub async fn load_print_jobs(path: impl AsRef<Path>) -> Result<Vec<PrintJob>> {
    read_records(path).await
}

pub async fn save_print_jobs(jobs: &[PrintJob], path: impl AsRef<Path>) -> Result<()> {
    write_records(jobs, path).await
}
