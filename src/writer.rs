use crate::errors::AppResult;
use crate::models::TenderRecord;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Writes tender records to a UTF-8 CSV file.
///
/// The first row is the header ([`TenderRecord::FIELD_NAMES`]),
/// followed by one row per record in the order given. Fields containing delimiters,
/// quotes or newlines are quoted.
///
/// An empty slice writes nothing and leaves `path` untouched.
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be created and `CsvError` if a row fails to
/// serialize or flush.
pub fn write_tenders_csv(path: &Path, records: &[TenderRecord]) -> AppResult<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(TenderRecord::FIELD_NAMES)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        rows = records.len(),
        path = %path.display(),
        "CSV file written"
    );
    Ok(records.len())
}
