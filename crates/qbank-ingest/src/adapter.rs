//! Adapting legacy positional rows into header-keyed raw records.

use std::collections::HashSet;
use std::path::Path;

use qbank_model::RawRecord;
use tracing::debug;

use crate::schema::{SourceIdRule, SourceSchema};

/// Apply a legacy schema to positional rows, producing the same record shape
/// the standard header-keyed input yields. Row order is preserved; title,
/// divider, short and stem-less rows are dropped.
pub fn adapt_rows(schema: &SourceSchema, rows: &[Vec<String>], input: &Path) -> Vec<RawRecord> {
    let prefix = source_prefix(schema, input);
    let mut seen_numbers: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for row in rows.iter().skip(schema.skip_rows) {
        if row.len() < schema.min_columns {
            continue;
        }
        if let Some(divider) = schema.divider_prefix {
            if cell(row, schema.number_column).starts_with(divider) {
                continue;
            }
        }
        let stem = cell(row, schema.question_column);
        if stem.is_empty() {
            continue;
        }

        let mut number = cell(row, schema.number_column).to_string();
        if schema.fix_duplicate_numbers {
            number = repair_number(number, &mut seen_numbers);
        }

        let mut correct = cell(row, schema.correct_column).to_string();
        if schema.letters_to_numbers {
            correct = letter_to_number(&correct);
        }

        let mut record = RawRecord::new();
        record.insert("Question", stem);
        for (index, &column) in schema.answer_columns.iter().enumerate() {
            record.insert(format!("Choice {}", index + 1), cell(row, column));
        }
        record.insert("Correct Answer", correct);
        record.insert("Source", source_id(schema, &prefix, &number));
        record.insert(
            "Explanation",
            schema
                .explanation_column
                .map(|column| cell(row, column))
                .unwrap_or(""),
        );
        records.push(record);
    }
    debug!(
        schema = schema.name,
        rows = rows.len(),
        records = records.len(),
        "adapted legacy rows"
    );
    records
}

fn cell<'a>(row: &'a [String], index: usize) -> &'a str {
    row.get(index).map(|value| value.trim()).unwrap_or("")
}

/// The shared source-ID prefix for a run, derived from the input filename.
fn source_prefix(schema: &SourceSchema, input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = filename_prefix(&stem);
    match schema.source_id {
        SourceIdRule::EditionSuffix => {
            // Instructor test packs get a distinct suffix so their IDs never
            // collide with the standard edition of the same book.
            if stem.contains("Instructor") {
                format!("{base}-ITP")
            } else {
                format!("{base}-STD")
            }
        }
        SourceIdRule::Labeled { label, .. } => format!("{base}-{label}"),
    }
}

fn source_id(schema: &SourceSchema, prefix: &str, number: &str) -> String {
    match schema.source_id {
        SourceIdRule::Labeled {
            trailing_period: true,
            ..
        } => format!("{prefix}-{number}."),
        _ => format!("{prefix}-{number}"),
    }
}

/// Leading `XXX-YYY` uppercase pair of the filename, falling back to the
/// first word (e.g. `"PREP-AL 4th Ed ..."` -> `"PREP-AL"`).
fn filename_prefix(stem: &str) -> String {
    if let Some(prefix) = leading_upper_pair(stem) {
        return prefix;
    }
    stem.split_whitespace()
        .next()
        .unwrap_or("UNKNOWN")
        .to_string()
}

fn leading_upper_pair(stem: &str) -> Option<String> {
    let rest = stem;
    let first_len = rest.chars().take_while(|c| c.is_ascii_uppercase()).count();
    if first_len == 0 {
        return None;
    }
    let rest = &rest[first_len..];
    let rest = rest.strip_prefix('-')?;
    let second_len = rest.chars().take_while(|c| c.is_ascii_uppercase()).count();
    if second_len == 0 {
        return None;
    }
    Some(stem[..first_len + 1 + second_len].to_string())
}

/// Repair the known duplicate-numbering defect: the second occurrence of a
/// number in the `X.2`..`X.9` range is really `X.N0` (`1.2` again means
/// `1.20`).
fn repair_number(number: String, seen: &mut HashSet<String>) -> String {
    let repaired = if seen.contains(&number) {
        match number.split_once('.') {
            Some((major, minor)) if minor.len() == 1 && ('2'..='9').contains(&minor.chars().next().unwrap_or('0')) => {
                format!("{major}.{minor}0")
            }
            _ => number,
        }
    } else {
        number
    };
    seen.insert(repaired.clone());
    repaired
}

/// Map letter answers to their 1-based choice number; anything else passes
/// through untouched for the parser to resolve.
fn letter_to_number(answer: &str) -> String {
    match answer.trim().to_ascii_lowercase().as_str() {
        "a" => "1".to_string(),
        "b" => "2".to_string(),
        "c" => "3".to_string(),
        "d" => "4".to_string(),
        _ => answer.to_string(),
    }
}
