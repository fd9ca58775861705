//! CSV reading utilities.

use std::path::Path;

use qbank_model::RawRecord;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a header-keyed CSV into raw records, preserving file order.
///
/// The first row defines the column names, including the dynamically numbered
/// `Choice N` columns. Values are kept untrimmed; trimming is the parser's
/// concern.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::from_csv(path, error))?;
    let headers = reader
        .headers()
        .map_err(|error| IngestError::from_csv(path, error))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|error| IngestError::from_csv(path, error))?;
        records.push(RawRecord::from_pairs(headers.iter().zip(row.iter())));
    }
    debug!(path = %path.display(), records = records.len(), "read header-keyed CSV");
    Ok(records)
}

/// Read a CSV as plain positional rows, for legacy layouts whose header is
/// buried under title rows.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::from_csv(path, error))?;

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|error| IngestError::from_csv(path, error))?;
        rows.push(row.iter().map(String::from).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read positional CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_records_keys_by_header() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Question,Choice 1,Choice 2,Correct Answer").unwrap();
        writeln!(file, "Q one,a,b,1").unwrap();
        writeln!(file, "Q two,c,d,2").unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].trimmed("Question"), Some("Q one"));
        assert_eq!(records[1].choice(2), Some("d"));
    }

    #[test]
    fn read_rows_keeps_short_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Title row").unwrap();
        writeln!(file, "a,b,c").unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Title row"]);
        assert_eq!(rows[1], vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_file_is_a_not_found_error() {
        let error = read_records(Path::new("/no/such/input.csv")).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }
}
