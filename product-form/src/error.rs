use thiserror::Error;

/// A field value that cannot go into a payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at most {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be a whole number, got {value}")]
    NotWholeNumber { field: &'static str, value: f64 },
    #[error("{field} must be 0 or greater, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be at most {max}, got {value}")]
    TooLarge {
        field: &'static str,
        max: f64,
        value: f64,
    },
}

/// Why a product could not be created.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("API rejected product with status {status}")]
    Api {
        status: reqwest::StatusCode,
        body: serde_json::Value,
    },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response (status {status}): {source}")]
    MalformedResponse {
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid endpoint URL {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} is not valid UTF-8: {value:?}")]
    NotUnicode {
        var: &'static str,
        value: std::ffi::OsString,
    },
}

pub type Result<T> = std::result::Result<T, SubmitError>;
