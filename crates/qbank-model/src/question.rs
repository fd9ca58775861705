use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Question category, derived from the choices and the raw correct answer.
///
/// Never supplied by the input; see `qbank-transform` for the inference rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Exactly two choices, "True" and "False".
    TrueFalse,
    /// One correct choice.
    MultipleChoice,
    /// More than one correct choice (comma-separated answer encoding).
    MultipleAnswer,
}

impl QuestionKind {
    /// Two-letter code used in the Questions sheet (`TF`, `MC`, `MA`).
    pub fn code(self) -> &'static str {
        match self {
            Self::TrueFalse => "TF",
            Self::MultipleChoice => "MC",
            Self::MultipleAnswer => "MA",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical in-memory question, produced once per qualifying input record
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    /// Trimmed, non-empty question statement.
    pub text: String,
    /// Trimmed explanation; `None` when the field was absent or blank.
    pub explanation: Option<String>,
    /// Choice strings in exact input order. No reordering, no dedup.
    pub choices: Vec<String>,
    /// Zero-based indices into `choices` marking correct answers. Out-of-range
    /// indices from lenient letter/number resolution are kept here; the
    /// parser reports them as warnings instead of rejecting the record.
    pub correct: BTreeSet<usize>,
    /// Section/track tag; `None` falls back to the run's default source.
    pub source: Option<String>,
}

impl Question {
    /// The source tag, or `default` when the record carried none.
    pub fn source_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.source.as_deref().unwrap_or(default)
    }

    pub fn has_explanation(&self) -> bool {
        self.explanation
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }
}
