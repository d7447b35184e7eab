//! Error types for actor submission.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while starting a remote run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The service answered with something other than `201 Created`.
    #[error("failed to trigger actor (HTTP {status}): {body}")]
    Rejected {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Request could not be sent or the reply could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// A `201` reply did not carry the expected JSON.
    #[error("invalid response from actor service: {0}")]
    InvalidResponse(String),

    /// Credentials are missing or incomplete.
    #[error("configuration error: {0}")]
    Config(String),

    /// Secrets file could not be read.
    #[error("failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Secrets file is not valid TOML.
    #[error("failed to parse secrets file {path}: {source}")]
    SecretsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// There were no addresses to send.
    #[error("no addresses to submit")]
    EmptyBatch,
}

impl SubmitError {
    /// Returns a short message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { .. } => "Failed to trigger actor.",
            Self::Network(_) => {
                "Could not reach the actor service. Please check your internet connection."
            }
            Self::InvalidResponse(_) => "The actor service returned an unexpected response.",
            Self::Config(_) | Self::SecretsRead { .. } | Self::SecretsParse { .. } => {
                "Actor credentials are missing or invalid."
            }
            Self::EmptyBatch => "There are no addresses to submit.",
        }
    }

    /// Raw diagnostic text returned by the service, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API token.
        Self::Network(err.without_url().to_string())
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_keeps_body() {
        let err = SubmitError::Rejected {
            status: 400,
            body: "{\"error\":\"bad input\"}".to_string(),
        };
        assert_eq!(err.response_body(), Some("{\"error\":\"bad input\"}"));
        assert_eq!(
            err.to_string(),
            "failed to trigger actor (HTTP 400): {\"error\":\"bad input\"}"
        );
        assert_eq!(err.user_message(), "Failed to trigger actor.");
    }

    #[test]
    fn user_messages() {
        assert!(
            SubmitError::Network("timeout".to_string())
                .user_message()
                .contains("internet connection")
        );
        assert!(
            SubmitError::Config("token".to_string())
                .user_message()
                .contains("credentials")
        );
        assert_eq!(SubmitError::EmptyBatch.response_body(), None);
    }
}
