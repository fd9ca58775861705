//! Question normalization for the quiz bank converter.
//!
//! Consumes the flat field-mappings produced by `qbank-ingest` and turns each
//! qualifying record into one canonical [`qbank_model::Question`]. The parser
//! favors best-effort conversion over strict validation: a human reviews the
//! Debug sheet afterwards, so anomalies become [`qbank_model::ParseWarning`]s
//! rather than errors.

pub mod answer;
pub mod parser;

pub use answer::resolve_correct;
pub use parser::{ParseOutcome, parse_records};
