//! Sheet persistence for the quiz bank converter.
//!
//! The core hands over finished [`Sheet`] values; this crate is the
//! spreadsheet-writing collaborator that puts them on disk. [`SheetWriter`]
//! is the seam: the shipped implementation writes one CSV file per sheet,
//! and a workbook-container writer would be another implementation behind
//! the same trait.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use qbank_model::{RawRecord, Sheet};
use tracing::info;

/// Persists the sheets of one conversion run.
pub trait SheetWriter {
    /// Write all sheets, returning the files created in write order.
    fn write_sheets(&self, sheets: &[Sheet]) -> anyhow::Result<Vec<PathBuf>>;
}

/// Writes each sheet as `<output_dir>/<stem>_<sheet name>.csv`.
#[derive(Debug, Clone)]
pub struct CsvSheetWriter {
    output_dir: PathBuf,
    stem: String,
}

impl CsvSheetWriter {
    pub fn new(output_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: stem.into(),
        }
    }

    fn sheet_path(&self, sheet: &Sheet) -> PathBuf {
        let name = sheet.name.to_lowercase().replace(' ', "_");
        self.output_dir.join(format!("{}_{name}.csv", self.stem))
    }
}

impl SheetWriter for CsvSheetWriter {
    fn write_sheets(&self, sheets: &[Sheet]) -> anyhow::Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating output dir {}", self.output_dir.display()))?;
        let mut written = Vec::new();
        for sheet in sheets {
            let path = self.sheet_path(sheet);
            write_sheet_csv(sheet, &path)?;
            info!(sheet = %sheet.name, path = %path.display(), rows = sheet.row_count(), "wrote sheet");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_sheet_csv(sheet: &Sheet, path: &Path) -> anyhow::Result<()> {
    // Debug-sheet rows have varying widths, so the writer must be flexible.
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in &sheet.rows {
        writer
            .write_record(row)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Write the adapted header-keyed records as an intermediate CSV, the shape
/// the `standard` schema reads back directly. Useful for inspecting what a
/// legacy adapter produced.
pub fn write_intermediate(records: &[RawRecord], path: &Path) -> anyhow::Result<()> {
    let choice_count = max_choice_count(records);
    let mut header = vec!["Question".to_string()];
    for n in 1..=choice_count {
        header.push(format!("Choice {n}"));
    }
    header.push("Correct Answer".to_string());
    header.push("Source".to_string());
    header.push("Explanation".to_string());

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(&header)?;
    for record in records {
        let mut row = vec![record.field("Question").unwrap_or("").to_string()];
        for n in 1..=choice_count {
            row.push(record.field(&format!("Choice {n}")).unwrap_or("").to_string());
        }
        row.push(record.field("Correct Answer").unwrap_or("").to_string());
        row.push(record.field("Source").unwrap_or("").to_string());
        row.push(record.field("Explanation").unwrap_or("").to_string());
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "wrote intermediate CSV");
    Ok(())
}

fn max_choice_count(records: &[RawRecord]) -> usize {
    let mut max = 0;
    for record in records {
        let mut n = 1;
        while record.field(&format!("Choice {n}")).is_some() {
            n += 1;
        }
        max = max.max(n - 1);
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> Sheet {
        let mut sheet = Sheet::new("Debug");
        sheet.push_row(["Metric", "Value"]);
        sheet.push_row(["only one cell"]);
        sheet
    }

    #[test]
    fn writer_names_files_after_stem_and_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvSheetWriter::new(dir.path(), "upload_ready");
        let written = writer.write_sheets(&[sheet()]).unwrap();
        assert_eq!(written, vec![dir.path().join("upload_ready_debug.csv")]);
        let content = fs::read_to_string(&written[0]).unwrap();
        assert!(content.starts_with("Metric,Value\n"));
    }

    #[test]
    fn intermediate_round_trips_choice_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intermediate.csv");
        let records = vec![RawRecord::from_pairs([
            ("Question", "Q"),
            ("Choice 1", "a"),
            ("Choice 2", "b"),
            ("Correct Answer", "1"),
            ("Source", "S-1.1"),
            ("Explanation", ""),
        ])];
        write_intermediate(&records, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Question,Choice 1,Choice 2,Correct Answer,Source,Explanation\n"));
        assert!(content.contains("Q,a,b,1,S-1.1,"));
    }
}
