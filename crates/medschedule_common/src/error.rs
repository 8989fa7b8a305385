// --- File: crates/medschedule_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all MedSchedule errors.
///
/// Rejected intents (unknown professional, unknown or taken slot) and invalid
/// reference data surface through this type. An incomplete `confirm()` is not
/// an error and never produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedScheduleError {
    /// Input does not satisfy the engine's rules
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Referenced entity does not exist in the catalog
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Slot is already booked for the current date and professional
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Reference data or settings are missing or invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),
}

impl MedScheduleError {
    /// Short machine-readable kind, handy for a presentation layer that maps
    /// errors to messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MedScheduleError::ValidationError(_) => "validation",
            MedScheduleError::NotFoundError(_) => "not_found",
            MedScheduleError::ConflictError(_) => "conflict",
            MedScheduleError::ConfigError(_) => "config",
            MedScheduleError::ParseError(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for MedScheduleError {
    fn from(err: serde_json::Error) -> Self {
        MedScheduleError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> MedScheduleError {
    MedScheduleError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> MedScheduleError {
    MedScheduleError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> MedScheduleError {
    MedScheduleError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> MedScheduleError {
    MedScheduleError::ConflictError(message.to_string())
}
