//! The conversion pipeline: ingest, parse, build sheets, persist.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, info_span, warn};

use qbank_ingest::{InputSchema, IngestError, load_records};
use qbank_model::{ConvertError, ConvertOutcome, ConvertRequest, Question};
use qbank_output::{CsvSheetWriter, SheetWriter, write_intermediate};
use qbank_report::{build_debug_sheet, build_questions_sheet, section_counts};
use qbank_transform::parse_records;

/// Run one conversion end to end.
///
/// The only fatal data condition is an input that yields no questions at
/// all; every parsing anomaly is logged and carried in the outcome instead.
pub fn run_convert(request: &ConvertRequest) -> anyhow::Result<ConvertOutcome> {
    let span = info_span!("convert", input = %request.input.display());
    let _guard = span.enter();

    let schema = InputSchema::find(&request.schema).ok_or_else(|| IngestError::UnknownSchema {
        name: request.schema.clone(),
    })?;
    let records = load_records(&request.input, &schema)?;
    let parsed = parse_records(&records);
    for warning in &parsed.warnings {
        warn!(record = warning.record, "{warning}");
    }
    if parsed.questions.is_empty() {
        return Err(ConvertError::NoQuestions)
            .with_context(|| format!("converting {}", request.input.display()));
    }

    let default_source = derive_default_source(request, &parsed.questions);
    info!(
        questions = parsed.questions.len(),
        default_source = %default_source,
        "building output sheets"
    );

    let questions_sheet = build_questions_sheet(&parsed.questions, &default_source);
    let debug_sheet = build_debug_sheet(&parsed.questions, &default_source);

    let stem = output_stem(&request.input);
    let writer = CsvSheetWriter::new(&request.output_dir, &stem);
    let mut written = writer.write_sheets(&[questions_sheet, debug_sheet])?;
    if request.emit_intermediate {
        let path = request.output_dir.join(format!("{stem}_intermediate.csv"));
        write_intermediate(&records, &path)?;
        written.push(path);
    }

    Ok(ConvertOutcome {
        input: request.input.clone(),
        default_source: default_source.clone(),
        question_count: parsed.questions.len(),
        source_counts: section_counts(&parsed.questions, &default_source),
        warnings: parsed.warnings,
        written,
    })
}

/// Default source tag for questions without one: the explicit flag when
/// given, else the first question's own tag, else an ID derived from the
/// input filename.
fn derive_default_source(request: &ConvertRequest, questions: &[Question]) -> String {
    if let Some(source) = &request.default_source {
        return source.clone();
    }
    if let Some(source) = questions.first().and_then(|question| question.source.clone()) {
        return source;
    }
    filename_source_id(&request.input)
}

/// Turn a filename into a section ID: uppercase, word separators to dashes,
/// leftover extension fragments and the `-FORMATTED` suffix removed.
fn filename_source_id(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.replace([' ', '_'], "-")
        .to_uppercase()
        .replace(".XLSX", "")
        .replace(".CSV", "")
        .replace("-FORMATTED", "")
}

/// File stem shared by this run's output files.
fn output_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase().replace(' ', "_"))
        .unwrap_or_else(|| "questions".to_string())
}

/// Default output directory: `output/` next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join("output")
}
