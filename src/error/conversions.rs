//! Type Conversions for ClientError
//!
//! This module contains From trait implementations for converting
//! common error types into ClientError.

use super::types::ClientError;

// From implementations
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decoding(Box::new(err))
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::Configuration(err.to_string())
    }
}
