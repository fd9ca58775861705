use qbank_model::{Question, Sheet};

/// Sheet name the import tool expects.
pub const QUESTIONS_SHEET: &str = "Questions";

const HEADER: [&str; 7] = [
    "Type",
    "Question",
    "Explanation",
    "Answer",
    "Correct",
    "Meta Key",
    "Meta Value",
];

/// Build the Questions sheet in the fixed multi-row-per-question layout.
///
/// Each question with at least one choice contributes a lead row carrying the
/// question fields and the first choice, then one row per remaining choice.
/// Every question is followed by a blank separator row, including questions
/// with no choices at all (those contribute only the separator).
pub fn build_questions_sheet(questions: &[Question], default_source: &str) -> Sheet {
    let mut sheet = Sheet::new(QUESTIONS_SHEET);
    sheet.push_row(HEADER);

    for question in questions {
        if let Some(first) = question.choices.first() {
            sheet.push_row([
                question.kind.code(),
                question.text.as_str(),
                question.explanation.as_deref().unwrap_or(""),
                first.as_str(),
                correct_mark(question, 0),
                "ID",
                question.source_or(default_source),
            ]);
            for (index, choice) in question.choices.iter().enumerate().skip(1) {
                sheet.push_row([
                    "",
                    "",
                    "",
                    choice.as_str(),
                    correct_mark(question, index),
                    "",
                    "",
                ]);
            }
        }
        sheet.push_blank_row(HEADER.len());
    }
    sheet
}

fn correct_mark(question: &Question, index: usize) -> &'static str {
    if question.correct.contains(&index) {
        "1"
    } else {
        ""
    }
}
