//! Logging utilities for grib-nearest.
//!
//! This module provides structured logging helpers so that factory failures
//! are searchable by type name, status code and context.

use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log an operation with timing and result in a single statement
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    info!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an argument list with no type name at position 0
pub fn log_missing_type(error: &crate::error::NearestError, context_id: &str) {
    error!(
        error = %error,
        code = error.code(),
        context_id = context_id,
        "grib_nearest_factory: no type name for nearest"
    );
}

/// Log a request for a type that no registration entry matches
pub fn log_unknown_type(type_name: &str, context_id: &str) {
    error!(
        type_name = type_name,
        context_id = context_id,
        "grib_nearest_factory: Unknown type: {} for nearest",
        type_name
    );
}

/// Log a variant that rejected its own initialization
pub fn log_init_failure(
    type_name: &str,
    code: i32,
    error: &crate::error::NearestError,
    context_id: &str,
) {
    error!(
        type_name = type_name,
        code = code,
        error = %error,
        context_id = context_id,
        "grib_nearest_factory: error {} instantiating nearest {}",
        code,
        type_name
    );
}

/// Generate a unique context ID
pub fn generate_context_id() -> String {
    Uuid::new_v4().to_string()
}
