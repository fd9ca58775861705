//! Output table construction for the quiz bank converter.
//!
//! Turns the ordered question list into the two sheets the import tool
//! consumes: the `Questions` sheet (fixed multi-row-per-question layout) and
//! the `Debug` sheet (conversion summary, per-source counts, audit table).
//! Both builders are pure functions of their input; running a conversion
//! twice yields identical sheets.

pub mod debug_sheet;
pub mod natural;
pub mod questions_sheet;

pub use debug_sheet::{DEBUG_SHEET, build_debug_sheet, section_counts};
pub use questions_sheet::{QUESTIONS_SHEET, build_questions_sheet};
