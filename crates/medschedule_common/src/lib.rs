
// --- File: crates/medschedule_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;     // Error handling
pub mod logging;   // Logging utilities
pub mod services;  // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    MedScheduleError,
    config_error,
    validation_error,
    not_found,
    conflict,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};

pub use services::{ConfirmationSummary, NoopNotifier, NotificationService, TracingNotifier};

// This crate provides functionality shared by the MedSchedule crates:
// the error type, logging bootstrap and the notification abstraction.
