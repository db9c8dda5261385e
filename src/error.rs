use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AggregateError>;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid aggregation type: {0}")]
    UnknownAggregation(String),

    #[error("Invalid day/night selector: {0}")]
    UnknownSelector(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("A file is required: {0}")]
    NotAFile(PathBuf),

    #[error("File too large: {path} ({size} bytes)")]
    FileTooLarge { path: PathBuf, size: u64 },
}

impl AggregateError {
    /// Process exit code reported for this error.
    ///
    /// `1` is reserved for usage errors raised during argument parsing; an
    /// unrecognized selector keyword is usage-shaped and maps there too.
    pub fn exit_code(&self) -> i32 {
        match self {
            AggregateError::UnknownSelector(_) => 1,
            AggregateError::UnknownMetric(_) => 2,
            AggregateError::UnknownAggregation(_) => 4,
            AggregateError::Io(_) => 5,
            AggregateError::MalformedRow { .. } => 5,
            AggregateError::FileNotFound(_) => 5,
            AggregateError::NotAFile(_) => 6,
            AggregateError::FileTooLarge { .. } => 7,
        }
    }
}
