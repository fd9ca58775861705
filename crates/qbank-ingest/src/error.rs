//! Error types for input ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and adapting input files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the input as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No such built-in source schema.
    #[error("unknown source schema '{name}'")]
    UnknownSchema { name: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Wrap a `csv::Error`, distinguishing missing files from parse failures.
    pub(crate) fn from_csv(path: &std::path::Path, error: csv::Error) -> Self {
        match error.into_kind() {
            csv::ErrorKind::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
            csv::ErrorKind::Io(source) => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            other => Self::CsvParse {
                path: path.to_path_buf(),
                message: format!("{other:?}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_path() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/questions.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /data/questions.csv");
    }
}
