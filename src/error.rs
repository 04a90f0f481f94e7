use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the local credentials resource.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("credentials file not found at {}", .0.display())]
    MissingResource(PathBuf),

    #[error("credentials file is missing the `{0}` key")]
    MissingField(&'static str),

    #[error("credentials file could not be parsed: {0}")]
    Malformed(String),
}

/// Failures of a single request against the Parse API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, or a non-2xx response without a readable error body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response was not in the expected format: {0}")]
    MalformedResponse(String),

    /// The server answered with a top-level `error` string.
    #[error("{0}")]
    ServerError(String),

    /// Raised before dispatch when the application id or JavaScript key is empty.
    #[error("application id or JavaScript key is missing from the configuration")]
    AuthMissing,

    /// Caller input rejected before dispatch.
    #[error("{0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_message_verbatim() {
        let err = ApiError::ServerError("invalid login parameters".to_string());
        assert_eq!(err.to_string(), "invalid login parameters");
    }

    #[test]
    fn missing_field_names_the_key() {
        let err = ConfigError::MissingField("jsKey");
        assert!(err.to_string().contains("`jsKey`"));
    }
}
