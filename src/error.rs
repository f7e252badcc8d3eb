#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous selector: {0}")]
    Ambiguous(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
