//! Source schema descriptions.
//!
//! Legacy question banks arrive as positional spreadsheet exports with title
//! rows, fixed answer columns and per-publisher source-ID conventions. One
//! configurable description per layout replaces per-source transformer
//! scripts; the adapter applies whichever description is selected.

use serde::Serialize;

/// How a record's `Source` tag is generated from the input filename and the
/// per-row question number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceIdRule {
    /// `<filename prefix>-ITP-<question #>` for instructor test packs,
    /// `<filename prefix>-STD-<question #>` otherwise.
    EditionSuffix,
    /// `<filename prefix>-<label>-<question #>`, with a trailing period when
    /// the downstream import expects one.
    Labeled {
        label: &'static str,
        trailing_period: bool,
    },
}

/// One legacy positional layout.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSchema {
    pub name: &'static str,
    pub description: &'static str,
    /// Rows to discard before the data starts (title, blank, header rows).
    pub skip_rows: usize,
    /// Data rows shorter than this are ignored.
    pub min_columns: usize,
    /// Column holding the question number (e.g. `1.12`).
    pub number_column: usize,
    /// Column holding the question stem.
    pub question_column: usize,
    /// Columns holding the answer choices, in choice order.
    pub answer_columns: &'static [usize],
    /// Column holding the correct answer.
    pub correct_column: usize,
    /// Column holding the explanation, when the layout has one.
    pub explanation_column: Option<usize>,
    /// Convert letter answers (a-d) to their 1-based numbers.
    pub letters_to_numbers: bool,
    /// Skip rows whose number column starts with this prefix (exam dividers).
    pub divider_prefix: Option<&'static str>,
    /// Repair duplicated `X.2`..`X.9` question numbers by appending a zero
    /// on the second occurrence (`1.2` -> `1.20`).
    pub fix_duplicate_numbers: bool,
    pub source_id: SourceIdRule,
}

/// The schema name for header-keyed input that needs no adaptation.
pub const STANDARD_SCHEMA: &str = "standard";

/// Book exports with four answer columns, an explanation column, and
/// edition-suffixed source IDs.
pub const WORKBOOK: SourceSchema = SourceSchema {
    name: "workbook",
    description: "book export: number, stem, answers A-D, correct letter, explanation",
    skip_rows: 3,
    min_columns: 8,
    number_column: 1,
    question_column: 2,
    answer_columns: &[3, 4, 5, 6],
    correct_column: 7,
    explanation_column: Some(8),
    letters_to_numbers: true,
    divider_prefix: None,
    fix_duplicate_numbers: false,
    source_id: SourceIdRule::EditionSuffix,
};

/// Final-exam exports: divider rows between exams, no explanations, known
/// duplicate-numbering defect, IDs with a trailing period.
pub const FINAL_EXAM: SourceSchema = SourceSchema {
    name: "final-exam",
    description: "final exam export: divider rows, numeric answers, repaired numbering",
    skip_rows: 3,
    min_columns: 8,
    number_column: 1,
    question_column: 2,
    answer_columns: &[3, 4, 5, 6],
    correct_column: 7,
    explanation_column: None,
    letters_to_numbers: false,
    divider_prefix: Some("Final Exam"),
    fix_duplicate_numbers: true,
    source_id: SourceIdRule::Labeled {
        label: "FINAL",
        trailing_period: true,
    },
};

/// Selected input handling for one conversion run.
#[derive(Debug, Clone)]
pub enum InputSchema {
    /// Header-keyed CSV consumed as-is.
    Standard,
    /// Legacy positional layout adapted into raw records first.
    Legacy(&'static SourceSchema),
}

impl InputSchema {
    /// Look up a built-in schema by name.
    pub fn find(name: &str) -> Option<Self> {
        match name {
            STANDARD_SCHEMA => Some(Self::Standard),
            _ => [&WORKBOOK, &FINAL_EXAM]
                .into_iter()
                .find(|schema| schema.name == name)
                .map(Self::Legacy),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => STANDARD_SCHEMA,
            Self::Legacy(schema) => schema.name,
        }
    }

    /// All built-in schemas as (name, description) pairs, for `--help` and
    /// the `schemas` subcommand.
    pub fn all() -> Vec<(&'static str, &'static str)> {
        vec![
            (STANDARD_SCHEMA, "header-keyed CSV (Question, Choice 1.., Correct Answer, ...)"),
            (WORKBOOK.name, WORKBOOK.description),
            (FINAL_EXAM.name, FINAL_EXAM.description),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_resolves_builtin_names() {
        assert!(matches!(InputSchema::find("standard"), Some(InputSchema::Standard)));
        assert!(matches!(
            InputSchema::find("workbook"),
            Some(InputSchema::Legacy(schema)) if schema.name == "workbook"
        ));
        assert!(InputSchema::find("nope").is_none());
    }

    #[test]
    fn all_lists_every_schema_once() {
        let names: Vec<&str> = InputSchema::all().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["standard", "workbook", "final-exam"]);
    }
}
