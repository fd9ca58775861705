//! Correct-answer resolution.
//!
//! Input banks encode correct answers inconsistently: 1-based numbers,
//! letters, comma-separated multi-answer lists, whole-value true/false, or
//! the literal choice text. Resolution is lenient by design; anything that
//! cannot be mapped degrades to a partial or empty index set plus a warning.

use std::collections::BTreeSet;

use qbank_model::{ParseWarning, WarningKind};

/// Resolve a trimmed `Correct Answer` value into zero-based choice indices.
///
/// Rules are tried in priority order, first match wins:
/// 1. value contains a comma: split and map each token (number or letter)
/// 2. whole value is "true"/"false" (any case): index 0 / 1
/// 3. all digits: 1-based number
/// 4. single letter: alphabet position (A=0)
/// 5. case-insensitive exact match against the choice text, first hit wins
///
/// Out-of-range indices are kept in the set so the audit sheet shows what the
/// source claimed; each one is also reported through `warnings`.
pub fn resolve_correct(
    raw: &str,
    choices: &[String],
    record: usize,
    warnings: &mut Vec<ParseWarning>,
) -> BTreeSet<usize> {
    let mut correct = BTreeSet::new();

    if raw.is_empty() {
        warnings.push(ParseWarning::new(
            record,
            WarningKind::MissingAnswer,
            "no correct answer given",
        ));
        return correct;
    }

    if raw.contains(',') {
        for token in raw.split(',') {
            let token = token.trim();
            if let Some(index) = numeric_index(token, record, warnings) {
                push_index(&mut correct, index, choices, record, warnings);
            } else if let Some(index) = letter_index(token) {
                push_index(&mut correct, index, choices, record, warnings);
            } else {
                warnings.push(ParseWarning::new(
                    record,
                    WarningKind::SkippedToken,
                    format!("token '{token}' is neither a number nor a letter"),
                ));
            }
        }
        return correct;
    }

    if raw.eq_ignore_ascii_case("true") {
        push_index(&mut correct, 0, choices, record, warnings);
        return correct;
    }
    if raw.eq_ignore_ascii_case("false") {
        push_index(&mut correct, 1, choices, record, warnings);
        return correct;
    }

    if let Some(index) = numeric_index(raw, record, warnings) {
        push_index(&mut correct, index, choices, record, warnings);
        return correct;
    }

    if let Some(index) = letter_index(raw) {
        push_index(&mut correct, index, choices, record, warnings);
        return correct;
    }

    match choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(raw))
    {
        Some(index) => {
            correct.insert(index);
        }
        None => warnings.push(ParseWarning::new(
            record,
            WarningKind::UnresolvedAnswer,
            format!("'{raw}' matches none of the {} choices", choices.len()),
        )),
    }
    correct
}

/// 1-based all-digit value to zero-based index. "0" has no zero-based
/// counterpart and is reported instead of resolved.
fn numeric_index(token: &str, record: usize, warnings: &mut Vec<ParseWarning>) -> Option<usize> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: usize = token.parse().ok()?;
    match number.checked_sub(1) {
        Some(index) => Some(index),
        None => {
            warnings.push(ParseWarning::new(
                record,
                WarningKind::IndexOutOfRange,
                "numeric answer '0' has no 1-based position",
            ));
            None
        }
    }
}

/// Single ASCII letter to alphabet position (A=0, case-insensitive).
fn letter_index(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
}

fn push_index(
    correct: &mut BTreeSet<usize>,
    index: usize,
    choices: &[String],
    record: usize,
    warnings: &mut Vec<ParseWarning>,
) {
    if index >= choices.len() {
        warnings.push(ParseWarning::new(
            record,
            WarningKind::IndexOutOfRange,
            format!(
                "index {} exceeds the {} available choices",
                index + 1,
                choices.len()
            ),
        ));
    }
    correct.insert(index);
}
