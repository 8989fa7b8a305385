//! Logging utilities for the MedSchedule crates.
//!
//! Engine crates only emit `tracing` events. Whoever composes the engine calls
//! [`init`] or [`init_with_level`] once to install a subscriber.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Target prefix shared by every MedSchedule crate (`medschedule_booking`, ...).
pub const LOG_TARGET_PREFIX: &str = "medschedule";

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use medschedule_common::logging;
///
/// logging::init();
/// // A second call is harmless.
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured; the level given here is added for the
/// `medschedule` target prefix.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("{}={}", LOG_TARGET_PREFIX, level).parse() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global subscriber may already be installed (tests, embedding app)
    let result = tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
