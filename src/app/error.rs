use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarescoutError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Timed out after {secs}s loading {url}")]
    Timeout { url: String, secs: u64 },

    #[error("Page script failed: {0}")]
    Script(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Day offset {0} is out of the supported date range")]
    DateOutOfRange(u32),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FarescoutError>;
