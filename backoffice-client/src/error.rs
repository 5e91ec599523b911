//! Client error types

use std::collections::HashMap;

use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reported by the remote API in its response envelope
    #[error("API error {code}: {message}")]
    Api {
        code: ErrorCode,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Request rejected locally before reaching the network
    #[error("{0}")]
    App(#[from] AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Unified error code for this failure.
    ///
    /// `None` only for bodies that could not be decoded.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::App(err) => Some(err.code),
            Self::Http(err) if err.is_timeout() => Some(ErrorCode::TimeoutError),
            Self::Http(_) => Some(ErrorCode::NetworkError),
            Self::Unauthorized => Some(ErrorCode::NotAuthenticated),
            Self::Forbidden(_) => Some(ErrorCode::PermissionDenied),
            Self::NotFound(_) => Some(ErrorCode::NotFound),
            Self::Validation(_) => Some(ErrorCode::ValidationFailed),
            Self::Internal(_) => Some(ErrorCode::InternalError),
            Self::Config(_) => Some(ErrorCode::ConfigError),
            Self::InvalidResponse(_) | Self::Serialization(_) => None,
        }
    }
}

/// Lift a decoded error envelope into a client error
pub(crate) fn api_error(err: AppError) -> ClientError {
    ClientError::Api {
        code: err.code,
        message: err.message,
        details: err.details,
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
