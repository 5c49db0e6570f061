// src/application/error_handling.rs
//
// User-facing error projection
//
// ARCHITECTURE:
// - Every failure maps to the same generic message plus a retry action
// - The category is kept for logs only, never shown to the user
// - Internal details are logged, not displayed

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Message shown for every load or favorite failure
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Standard error response for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
    pub retryable: bool,
}

/// Error categories (diagnostics only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    NotFound,
    Database,
    ExternalService,
    FileSystem,
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        let error_type = match error {
            AppError::NotFound => ErrorType::NotFound,
            AppError::Database(_) | AppError::Pool(_) => ErrorType::Database,
            AppError::Http(_) => ErrorType::ExternalService,
            AppError::Io(_) => ErrorType::FileSystem,
            AppError::Serialization(_) | AppError::Other(_) => ErrorType::Internal,
        };

        log::warn!("Presenting {:?} error to user: {}", error_type, error);

        Self {
            error_type,
            message: GENERIC_ERROR_MESSAGE.to_string(),
            retryable: true,
        }
    }
}
