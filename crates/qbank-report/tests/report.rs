//! Integration tests driving the parser output into the sheet builders.

use qbank_model::RawRecord;
use qbank_report::{build_debug_sheet, build_questions_sheet};
use qbank_transform::parse_records;

fn record(pairs: &[(&str, &str)]) -> RawRecord {
    RawRecord::from_pairs(pairs.iter().copied())
}

fn sample_records() -> Vec<RawRecord> {
    vec![
        record(&[
            ("Question", "Capital of France?"),
            ("Choice 1", "Lyon"),
            ("Choice 2", "Paris"),
            ("Choice 3", "Nice"),
            ("Correct Answer", "2"),
            ("Source", "GEO-1.10"),
            ("Explanation", "Paris has been the capital since 987."),
        ]),
        record(&[
            ("Question", "The Seine flows through Paris."),
            ("Choice 1", "True"),
            ("Choice 2", "False"),
            ("Correct Answer", "True"),
            ("Source", "GEO-1.2"),
        ]),
        record(&[
            ("Question", "Pick the coastal cities."),
            ("Choice 1", "Nice"),
            ("Choice 2", "Dijon"),
            ("Choice 3", "Marseille"),
            ("Correct Answer", "1, 3"),
            ("Source", "GEO-1.9"),
        ]),
    ]
}

#[test]
fn questions_sheet_layout_matches_import_format() {
    let outcome = parse_records(&sample_records());
    let sheet = build_questions_sheet(&outcome.questions, "GEO-DEFAULT");

    assert_eq!(sheet.name, "Questions");
    assert_eq!(
        sheet.rows[0],
        vec!["Type", "Question", "Explanation", "Answer", "Correct", "Meta Key", "Meta Value"]
    );
    // 3 questions with 3 + 2 + 3 choices, one separator each.
    assert_eq!(sheet.row_count(), 1 + 8 + 3);

    assert_eq!(
        sheet.rows[1],
        vec![
            "MC",
            "Capital of France?",
            "Paris has been the capital since 987.",
            "Lyon",
            "",
            "ID",
            "GEO-1.10"
        ]
    );
    assert_eq!(sheet.rows[2], vec!["", "", "", "Paris", "1", "", ""]);
    assert_eq!(sheet.rows[4], vec![String::new(); 7]);

    // True/False lead row.
    assert_eq!(
        sheet.rows[5],
        vec![
            "TF",
            "The Seine flows through Paris.",
            "",
            "True",
            "1",
            "ID",
            "GEO-1.2"
        ]
    );
}

#[test]
fn debug_sheet_blocks_are_in_fixed_order() {
    let outcome = parse_records(&sample_records());
    let sheet = build_debug_sheet(&outcome.questions, "GEO-DEFAULT");

    assert_eq!(sheet.name, "Debug");
    assert_eq!(sheet.rows[0], vec!["Metric", "Value"]);
    assert_eq!(sheet.rows[1], vec!["Total Questions Parsed", "3"]);
    assert_eq!(sheet.rows[2], vec!["Total Tracks/Sections", "3"]);
    assert_eq!(sheet.rows[3], vec!["Keep Answer Prefixes", "No"]);
    assert_eq!(sheet.rows[4], vec!["Parsing Errors", "0"]);
    assert_eq!(sheet.rows[5], vec![""]);
    assert_eq!(sheet.rows[6], vec!["Track Details"]);

    // Natural sort: 1.2 before 1.9 before 1.10.
    assert_eq!(sheet.rows[7], vec!["  GEO-1.2", "1 questions"]);
    assert_eq!(sheet.rows[8], vec!["  GEO-1.9", "1 questions"]);
    assert_eq!(sheet.rows[9], vec!["  GEO-1.10", "1 questions"]);

    assert_eq!(sheet.rows[10], vec![""]);
    assert_eq!(sheet.rows[11], vec!["Parsing Errors:"]);
    assert_eq!(sheet.rows[12], vec!["  None detected"]);
    assert_eq!(sheet.rows[13], vec![""]);
    assert_eq!(
        sheet.rows[14],
        vec!["Track", "Q#", "Question Preview", "Correct Answer", "Page Ref", "Has Explanation"]
    );

    // Audit rows follow input order, not sort order.
    assert_eq!(
        sheet.rows[15],
        vec!["GEO-1.10", "1", "Capital of France?", "B", "", "Yes"]
    );
    assert_eq!(
        sheet.rows[16],
        vec!["GEO-1.2", "2", "The Seine flows through Paris.", "A", "", "No"]
    );
    assert_eq!(
        sheet.rows[17],
        vec!["GEO-1.9", "3", "Pick the coastal cities.", "A, C", "", "No"]
    );
}

#[test]
fn audit_preview_truncates_long_questions() {
    let long_text = format!("Which of the following statements about {}?", "x".repeat(40));
    let records = vec![record(&[
        ("Question", long_text.as_str()),
        ("Choice 1", "a"),
        ("Correct Answer", "1"),
    ])];
    let outcome = parse_records(&records);
    let sheet = build_debug_sheet(&outcome.questions, "D");
    let audit = sheet.rows.last().expect("audit row");
    assert_eq!(audit[2].chars().count(), 50);
    assert!(audit[2].ends_with("..."));
}

#[test]
fn building_twice_is_idempotent() {
    let outcome = parse_records(&sample_records());
    let first = (
        build_questions_sheet(&outcome.questions, "D"),
        build_debug_sheet(&outcome.questions, "D"),
    );
    let second = (
        build_questions_sheet(&outcome.questions, "D"),
        build_debug_sheet(&outcome.questions, "D"),
    );
    assert_eq!(first, second);
}
