use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The input produced no questions at all. The run fails rather than
    /// writing an empty workbook.
    #[error("no questions found in input")]
    NoQuestions,
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
