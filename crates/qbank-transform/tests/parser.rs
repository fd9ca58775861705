//! Integration tests for question normalization.

use std::collections::BTreeSet;

use qbank_model::{QuestionKind, RawRecord, WarningKind};
use qbank_transform::parse_records;

fn record(pairs: &[(&str, &str)]) -> RawRecord {
    RawRecord::from_pairs(pairs.iter().copied())
}

#[test]
fn blank_question_records_are_dropped() {
    let records = vec![
        record(&[("Question", "Keep me"), ("Choice 1", "a"), ("Correct Answer", "1")]),
        record(&[("Question", "   "), ("Choice 1", "a")]),
        record(&[("Choice 1", "a")]),
        record(&[("Question", "Also keep"), ("Choice 1", "a"), ("Correct Answer", "1")]),
    ];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions.len(), 2);
    assert_eq!(outcome.questions[0].text, "Keep me");
    assert_eq!(outcome.questions[1].text, "Also keep");
}

#[test]
fn true_false_round_trip() {
    let records = vec![record(&[
        ("Question", "The sky is blue."),
        ("Choice 1", "True"),
        ("Choice 2", "False"),
        ("Correct Answer", "True"),
    ])];
    let outcome = parse_records(&records);
    let question = &outcome.questions[0];
    assert_eq!(question.kind, QuestionKind::TrueFalse);
    assert_eq!(question.correct, BTreeSet::from([0]));
    assert!(outcome.warnings.is_empty());
}

#[test]
fn false_answer_selects_second_choice() {
    let records = vec![record(&[
        ("Question", "Water is dry."),
        ("Choice 1", "True"),
        ("Choice 2", "False"),
        ("Correct Answer", "FALSE"),
    ])];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions[0].correct, BTreeSet::from([1]));
}

#[test]
fn comma_separated_numbers_become_multi_answer() {
    let records = vec![record(&[
        ("Question", "Pick two."),
        ("Choice 1", "a"),
        ("Choice 2", "b"),
        ("Choice 3", "c"),
        ("Choice 4", "d"),
        ("Correct Answer", "1, 3"),
    ])];
    let outcome = parse_records(&records);
    let question = &outcome.questions[0];
    assert_eq!(question.kind, QuestionKind::MultipleAnswer);
    assert_eq!(question.correct, BTreeSet::from([0, 2]));
}

#[test]
fn comma_separated_letters_become_multi_answer() {
    let records = vec![record(&[
        ("Question", "Pick some."),
        ("Choice 1", "a"),
        ("Choice 2", "b"),
        ("Choice 3", "c"),
        ("Correct Answer", "a, C"),
    ])];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions[0].correct, BTreeSet::from([0, 2]));
}

#[test]
fn single_letter_resolves_to_alphabet_position() {
    let records = vec![record(&[
        ("Question", "Which one?"),
        ("Choice 1", "a"),
        ("Choice 2", "b"),
        ("Choice 3", "c"),
        ("Correct Answer", "C"),
    ])];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions[0].correct, BTreeSet::from([2]));
}

#[test]
fn text_match_is_case_insensitive() {
    let records = vec![record(&[
        ("Question", "Capital of France?"),
        ("Choice 1", "Lyon"),
        ("Choice 2", "paris"),
        ("Choice 3", "Nice"),
        ("Correct Answer", "Paris"),
    ])];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions[0].correct, BTreeSet::from([1]));
    assert!(outcome.warnings.is_empty());
}

#[test]
fn unmatched_text_yields_empty_set_and_warning() {
    let records = vec![record(&[
        ("Question", "Capital of France?"),
        ("Choice 1", "Lyon"),
        ("Choice 2", "Nice"),
        ("Correct Answer", "Paris"),
    ])];
    let outcome = parse_records(&records);
    assert!(outcome.questions[0].correct.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, WarningKind::UnresolvedAnswer);
    assert_eq!(outcome.warnings[0].record, 1);
}

#[test]
fn fields_are_trimmed_and_blank_optionals_dropped() {
    let records = vec![record(&[
        ("Question", "  Spaced out?  "),
        ("Choice 1", " yes "),
        ("Choice 2", " no "),
        ("Correct Answer", " 1 "),
        ("Explanation", "   "),
        ("Source", "  COURSE-1.2  "),
    ])];
    let outcome = parse_records(&records);
    let question = &outcome.questions[0];
    assert_eq!(question.text, "Spaced out?");
    assert_eq!(question.choices, vec!["yes", "no"]);
    assert_eq!(question.correct, BTreeSet::from([0]));
    assert_eq!(question.explanation, None);
    assert_eq!(question.source.as_deref(), Some("COURSE-1.2"));
}

#[test]
fn warning_record_numbers_count_all_input_records() {
    let records = vec![
        record(&[("Question", "   ")]),
        record(&[
            ("Question", "Second record"),
            ("Choice 1", "a"),
            ("Correct Answer", "nope"),
        ]),
    ];
    let outcome = parse_records(&records);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].record, 2);
}

#[test]
fn zero_choice_question_is_still_emitted() {
    let records = vec![record(&[("Question", "No choices here"), ("Correct Answer", "")])];
    let outcome = parse_records(&records);
    assert_eq!(outcome.questions.len(), 1);
    assert!(outcome.questions[0].choices.is_empty());
    assert!(outcome.questions[0].correct.is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let records = vec![
        record(&[
            ("Question", "Q1"),
            ("Choice 1", "a"),
            ("Choice 2", "b"),
            ("Correct Answer", "2"),
            ("Source", "T-1.2"),
        ]),
        record(&[
            ("Question", "Q2"),
            ("Choice 1", "True"),
            ("Choice 2", "False"),
            ("Correct Answer", "false"),
        ]),
    ];
    let first = parse_records(&records);
    let second = parse_records(&records);
    assert_eq!(first.questions, second.questions);
    assert_eq!(first.warnings, second.warnings);
}
