use qbank_model::{ParseWarning, Question, QuestionKind, RawRecord};
use tracing::{debug, trace};

use crate::answer::resolve_correct;

/// Parsed questions plus the structured diagnostics collected on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub questions: Vec<Question>,
    pub warnings: Vec<ParseWarning>,
}

/// Normalize raw records into canonical questions, preserving input order.
///
/// Records without a question statement are skipped silently; every other
/// anomaly degrades to a partial result and a [`ParseWarning`]. Nothing here
/// fails: the caller decides whether zero questions is fatal.
pub fn parse_records(records: &[RawRecord]) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    for (index, record) in records.iter().enumerate() {
        let number = index + 1;
        let Some(text) = record.trimmed("Question") else {
            trace!(record = number, "skipping record without question text");
            continue;
        };

        let choices = extract_choices(record);
        let raw_answer = record.trimmed("Correct Answer").unwrap_or("");
        let kind = infer_kind(&choices, raw_answer);
        let correct = resolve_correct(raw_answer, &choices, number, &mut outcome.warnings);

        outcome.questions.push(Question {
            kind,
            text: text.to_string(),
            explanation: record.trimmed("Explanation").map(String::from),
            choices,
            correct,
            source: record.trimmed("Source").map(String::from),
        });
    }
    debug!(
        records = records.len(),
        questions = outcome.questions.len(),
        warnings = outcome.warnings.len(),
        "parsed raw records"
    );
    outcome
}

/// Collect `Choice 1..Choice N` in order, stopping at the first column that
/// is absent or blank. There is no fixed maximum.
fn extract_choices(record: &RawRecord) -> Vec<String> {
    let mut choices = Vec::new();
    let mut n = 1;
    while let Some(choice) = record.choice(n) {
        choices.push(choice.to_string());
        n += 1;
    }
    choices
}

/// Derive the question kind from the choices and the raw answer encoding.
///
/// A comma-separated answer always means multiple-answer, even for a pair of
/// True/False choices.
fn infer_kind(choices: &[String], raw_answer: &str) -> QuestionKind {
    if raw_answer.contains(',') {
        return QuestionKind::MultipleAnswer;
    }
    let is_true_false = choices.len() == 2
        && choices.iter().any(|choice| choice == "True")
        && choices.iter().any(|choice| choice == "False");
    if is_true_false {
        QuestionKind::TrueFalse
    } else {
        QuestionKind::MultipleChoice
    }
}
