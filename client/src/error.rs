//! Error handling for the Stockroom client
//!
//! All async operations catch at the call site; nothing propagates to a
//! global handler. "Not found" outcomes that drive normal branches (barcode
//! miss, unknown secret key) are modelled as service outcomes, not errors.

use thiserror::Error;

use shared::stock::AdjustmentError;
use shared::validation::FormatError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors, surfaced inline next to the offending field
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Network / API errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    // Local storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<AdjustmentError> for AppError {
    fn from(err: AdjustmentError) -> Self {
        let field = match err {
            AdjustmentError::MissingField => "adjustment",
            AdjustmentError::InvalidQuantity => "quantity",
            AdjustmentError::UnknownWarehouse => "warehouseId",
        };
        AppError::Validation {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        let field = match err {
            FormatError::UnknownWarehouse(_) => "warehouseId",
            FormatError::InvalidPrice(_) => "price",
            FormatError::InvalidQuantity(_) => "quantity",
        };
        AppError::Validation {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for services
pub type AppResult<T> = Result<T, AppError>;
