//! Error types for kundli generation.
//!
//! The engine performs no I/O, so the only expected failure is malformed
//! birth input. Every detector and generator downstream of validation is total.

use thiserror::Error;

/// A birth-detail field that is missing or cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("Invalid date of birth: {value:?}. Expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Invalid time of birth: {value:?}. Expected HH:MM (24-hour)")]
    InvalidTime { value: String },
    #[error("Invalid {axis}: {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },
}

/// Errors returned by the public kundli operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KundliError {
    #[error("Birth details rejected: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, KundliError>;
