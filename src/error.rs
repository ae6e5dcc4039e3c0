use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChangeError>;
