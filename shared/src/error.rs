//! Error types for the LED webhook.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a webhook request.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The Particle cloud rejected or failed the function call
    #[error("Particle API error: {0}")]
    Particle(String),

    /// Transport-level error talking to the Particle cloud
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Serialization(_) => 400,
            Error::Particle(_) | Error::Http(_) => 502,
            Error::Config(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let malformed = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(Error::from(malformed).status_code(), 400);
        assert_eq!(
            Error::Particle("400 Bad Request: timed out".to_string()).status_code(),
            502
        );
        assert_eq!(Error::Config("PORT".to_string()).status_code(), 500);
    }
}
