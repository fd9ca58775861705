use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::warning::ParseWarning;

/// Everything a conversion run needs, passed explicitly into the pipeline.
/// There is no process-wide configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Name of the source schema used to adapt the input (`standard` for
    /// header-keyed files).
    pub schema: String,
    /// Explicit default source tag; derived from the data or the filename
    /// when `None`.
    pub default_source: Option<String>,
    /// Also write the adapted header-keyed CSV next to the sheets.
    pub emit_intermediate: bool,
}

/// Result of one conversion run, consumed by the console summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub default_source: String,
    pub question_count: usize,
    /// Per-source question tallies in Debug-sheet order.
    pub source_counts: Vec<(String, usize)>,
    pub warnings: Vec<ParseWarning>,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}
