//! Input ingestion for the quiz bank converter.
//!
//! Reads UTF-8 CSV exports and hands the parser a uniform stream of
//! header-keyed [`qbank_model::RawRecord`]s. Legacy positional layouts are
//! described by [`schema::SourceSchema`] values and adapted on the way in;
//! there is one configurable extraction rule instead of one script per
//! source format.

pub mod adapter;
pub mod error;
pub mod load;
pub mod reader;
pub mod schema;

pub use adapter::adapt_rows;
pub use reader::{read_records, read_rows};
pub use error::{IngestError, Result};
pub use load::load_records;
pub use schema::{FINAL_EXAM, InputSchema, STANDARD_SCHEMA, SourceIdRule, SourceSchema, WORKBOOK};
