// src/error.rs

/// Errors that stop the program before a search starts.
///
/// Once a search is running nothing here is produced: fetch problems end a
/// city's walk (see `core::net::FetchError`) and selection problems become a
/// message in the detail panel.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unusable configuration (bad base, zero page bound, missing template slot).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
