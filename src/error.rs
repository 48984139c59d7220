use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown statement format: {0}")]
    UnknownFormat(String),

    #[error("Unknown format key: {0} (see `cardnorm formats`)")]
    UnknownFormatKey(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, NormError>;

/// Failure while pulling fields out of a single row. Never fatal for a file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("missing column {column} ({field})")]
    MissingColumn { column: usize, field: &'static str },

    #[error("could not convert column {column} to a number: {value:?}")]
    InvalidNumber { column: usize, value: String },

    #[error("statement layout was not recognized")]
    UnknownLayout,
}
