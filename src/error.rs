//! Error types for ftracker
//!
//! The calculator itself never fails; these errors come from the outer layers
//! (label parsing, batch parsing, opt-in validation, JSON encoding).

use thiserror::Error;

/// Errors raised around the metrics calculator
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unknown activity type: {0}")]
    UnknownActivity(String),

    #[error("Failed to parse training sessions: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid training session: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for a training session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid duration: {0} h (must be a finite, non-negative number)")]
    InvalidDuration(f64),

    #[error("Invalid weight: {0} kg (must be a finite, positive number)")]
    InvalidWeight(f64),

    #[error("Invalid height: {0} cm (walking requires a finite, positive height)")]
    InvalidHeight(f64),

    #[error("Invalid pool length: swimming requires a pool length above 0 m")]
    InvalidPoolLength,
}
