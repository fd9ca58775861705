use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a non-fatal parsing anomaly.
///
/// The converter is deliberately lenient: malformed answer encodings degrade
/// to partial or empty correct-index sets instead of failing the run. These
/// warnings make the gaps visible without changing the sheet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// The `Correct Answer` field was absent or blank.
    MissingAnswer,
    /// A free-text answer matched none of the choices.
    UnresolvedAnswer,
    /// A comma-separated token was neither numeric nor a single letter.
    SkippedToken,
    /// A resolved index does not address any choice.
    IndexOutOfRange,
}

/// One structured diagnostic, tied to the 1-based input record number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub record: usize,
    pub kind: WarningKind,
    pub detail: String,
}

impl ParseWarning {
    pub fn new(record: usize, kind: WarningKind, detail: impl Into<String>) -> Self {
        Self {
            record,
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            WarningKind::MissingAnswer => "missing correct answer",
            WarningKind::UnresolvedAnswer => "unresolved correct answer",
            WarningKind::SkippedToken => "skipped answer token",
            WarningKind::IndexOutOfRange => "correct index out of range",
        };
        write!(f, "record {}: {label}: {}", self.record, self.detail)
    }
}
