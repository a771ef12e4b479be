// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the IGC model layer and REST client

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum IgcError {
    #[error("Unknown asset type: {0}")]
    UnknownType(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error for '{type_id}': {message}")]
    Deserialization { type_id: String, message: String },

    #[error("Invalid search: {0}")]
    InvalidSearch(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl IgcError {
    /// True for errors the server reported with a 404 status
    pub fn is_not_found(&self) -> bool {
        matches!(self, IgcError::Http { status: 404, .. })
    }
}

impl From<std::io::Error> for IgcError {
    fn from(err: std::io::Error) -> Self {
        IgcError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for IgcError {
    fn from(err: serde_json::Error) -> Self {
        IgcError::SerializationError(err.to_string())
    }
}

impl From<url::ParseError> for IgcError {
    fn from(err: url::ParseError) -> Self {
        IgcError::InvalidUrl(err.to_string())
    }
}

pub type IgcResult<T> = Result<T, IgcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(!IgcError::UnknownType("x".to_string()).is_not_found());
        assert!(IgcError::Http {
            status: 404,
            message: "gone".to_string()
        }
        .is_not_found());
        assert!(!IgcError::Http {
            status: 500,
            message: "boom".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = IgcError::Deserialization {
            type_id: "term".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Deserialization error for 'term': bad");
    }
}
