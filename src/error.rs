use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Scraping {path} is disallowed by robots.txt")]
    RobotsDisallowed { path: String },

    #[error("City name {0:?} cannot be mapped to a file name")]
    InvalidCityName(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
