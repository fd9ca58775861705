pub mod error;
pub mod processing;
pub mod question;
pub mod record;
pub mod sheet;
pub mod warning;

pub use error::{ConvertError, Result};
pub use processing::{ConvertOutcome, ConvertRequest};
pub use question::{Question, QuestionKind};
pub use record::RawRecord;
pub use sheet::Sheet;
pub use warning::{ParseWarning, WarningKind};
