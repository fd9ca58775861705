//! CLI library components for the quiz bank converter.

pub mod logging;
pub mod pipeline;
