//! Error types and handling for the advisory engine

use thiserror::Error;

/// Main error type for the advisory engine
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather provider answered with an error or unusable payload
    #[error("API error: {message}")]
    Api { message: String },

    /// Transport failures talking to the weather provider
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Provider data that could not be interpreted
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AdvisoryError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get a farmer-facing error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisoryError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AdvisoryError::Api { .. } | AdvisoryError::Network { .. } => {
                "Weather service is unavailable right now. Please try again later.".to_string()
            }
            AdvisoryError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AdvisoryError::Parse { .. } => {
                "Weather data could not be read. Please try again later.".to_string()
            }
            AdvisoryError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
