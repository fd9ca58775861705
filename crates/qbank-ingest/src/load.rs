use std::path::Path;

use qbank_model::RawRecord;
use tracing::info;

use crate::adapter::adapt_rows;
use crate::reader::{read_records, read_rows};
use crate::error::Result;
use crate::schema::InputSchema;

/// Read one input file through the selected schema, yielding the raw records
/// the parser consumes.
pub fn load_records(path: &Path, schema: &InputSchema) -> Result<Vec<RawRecord>> {
    let records = match schema {
        InputSchema::Standard => read_records(path)?,
        InputSchema::Legacy(legacy) => {
            let rows = read_rows(path)?;
            adapt_rows(legacy, &rows, path)
        }
    };
    info!(
        path = %path.display(),
        schema = schema.name(),
        records = records.len(),
        "loaded input records"
    );
    Ok(records)
}
