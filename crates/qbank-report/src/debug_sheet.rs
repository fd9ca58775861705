use std::collections::HashMap;

use qbank_model::{Question, Sheet};

use crate::natural::SourceKey;

/// Sheet name for the diagnostic report.
pub const DEBUG_SHEET: &str = "Debug";

/// Preview column width; longer texts are truncated to 47 chars + "...".
const PREVIEW_LIMIT: usize = 50;

/// Build the Debug sheet: conversion summary, naturally sorted per-source
/// counts, and one audit row per question in input order.
///
/// The `Parsing Errors` cells are static. Structured warnings from the parser
/// go to the console and log instead, so the sheet output stays byte-stable
/// for a given input.
pub fn build_debug_sheet(questions: &[Question], default_source: &str) -> Sheet {
    let mut sheet = Sheet::new(DEBUG_SHEET);
    let counts = section_counts(questions, default_source);

    sheet.push_row(["Metric", "Value"]);
    sheet.push_row(["Total Questions Parsed".to_string(), questions.len().to_string()]);
    sheet.push_row(["Total Tracks/Sections".to_string(), counts.len().to_string()]);
    sheet.push_row(["Keep Answer Prefixes", "No"]);
    sheet.push_row(["Parsing Errors", "0"]);
    sheet.push_row([""]);
    sheet.push_row(["Track Details"]);
    for (source, count) in &counts {
        sheet.push_row([format!("  {source}"), format!("{count} questions")]);
    }

    sheet.push_row([""]);
    sheet.push_row(["Parsing Errors:"]);
    sheet.push_row(["  None detected"]);

    sheet.push_row([""]);
    sheet.push_row([
        "Track",
        "Q#",
        "Question Preview",
        "Correct Answer",
        "Page Ref",
        "Has Explanation",
    ]);
    for (index, question) in questions.iter().enumerate() {
        sheet.push_row([
            question.source_or(default_source).to_string(),
            (index + 1).to_string(),
            preview(&question.text),
            correct_letters(question),
            String::new(), // page reference is not available in CSV input
            if question.has_explanation() { "Yes" } else { "No" }.to_string(),
        ]);
    }
    sheet
}

/// Per-source question tallies in natural sort order.
///
/// Sources with at least two digit runs sort by the tuple of those numbers
/// (so `1.2` comes before `1.10`); the rest sort by raw string value, after
/// the numeric partition.
pub fn section_counts(questions: &[Question], default_source: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for question in questions {
        *counts.entry(question.source_or(default_source)).or_insert(0) += 1;
    }
    let mut ordered: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(source, count)| (source.to_string(), count))
        .collect();
    ordered.sort_by_key(|(source, _)| SourceKey::for_tag(source));
    ordered
}

/// First 50 characters of the question text; longer texts get 47 plus "...".
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LIMIT {
        return text.to_string();
    }
    let mut short: String = text.chars().take(PREVIEW_LIMIT - 3).collect();
    short.push_str("...");
    short
}

/// Comma-joined, alphabetically sorted answer letters (A=0, B=1, ...).
/// Indices beyond `Z` render as `#<position>`.
fn correct_letters(question: &Question) -> String {
    let mut letters: Vec<String> = question.correct.iter().map(|&index| index_letter(index)).collect();
    letters.sort();
    letters.join(", ")
}

fn index_letter(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("#{}", index + 1)
    }
}
