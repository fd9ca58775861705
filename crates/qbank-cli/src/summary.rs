use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qbank_model::ConvertOutcome;

pub fn print_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Default source: {}", outcome.default_source);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Track"), header_cell("Questions")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (source, count) in &outcome.source_counts {
        table.add_row(vec![Cell::new(source), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.question_count).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_warning_table(outcome);

    for path in &outcome.written {
        println!("Wrote: {}", path.display());
    }
}

fn print_warning_table(outcome: &ConvertOutcome) {
    if outcome.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Record"), header_cell("Warning")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for warning in &outcome.warnings {
        table.add_row(vec![
            Cell::new(warning.record).fg(Color::Yellow),
            Cell::new(warning.to_string()),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
