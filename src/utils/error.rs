use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, ScoutError>;
