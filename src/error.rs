//! Error types for grib-nearest.
//!
//! Every error maps onto an integer status code in the style of the GRIB
//! tooling (`0` is success, negative values are failures), so that the code
//! an initializer reports can be surfaced in logs unchanged.

use thiserror::Error;

/// Status code of a successful operation.
pub const SUCCESS: i32 = 0;
/// Status code for a feature a variant does not provide.
pub const NOT_IMPLEMENTED: i32 = -4;
/// Status code for an array whose size disagrees with the grid.
pub const WRONG_ARRAY_SIZE: i32 = -9;
/// Status code for a missing key or type.
pub const NOT_FOUND: i32 = -10;
/// Status code for I/O failures.
pub const IO_PROBLEM: i32 = -11;
/// Status code for invalid arguments or configuration.
pub const INVALID_ARGUMENT: i32 = -19;
/// Status code for a key holding a value of the wrong type.
pub const WRONG_TYPE: i32 = -39;

/// The main error type for grib-nearest operations.
#[derive(Error, Debug)]
pub enum NearestError {
    /// No registration entry matches the requested type
    #[error("Unknown type: {type_name} for nearest")]
    UnknownType { type_name: String },

    /// The matched variant rejected its own construction
    #[error("Error {code} instantiating nearest {type_name}: {source}")]
    InitializationFailed {
        type_name: String,
        code: i32,
        #[source]
        source: Box<NearestError>,
    },

    /// Two registration entries share a type name
    #[error("Duplicate nearest type in registration table: {type_name}")]
    DuplicateType { type_name: String },

    /// An argument position has no value
    #[error("Missing argument at position {index}")]
    MissingArgument { index: usize },

    /// An argument or key holds an unusable value
    #[error("Invalid argument: {param} - {message}")]
    InvalidArgument { param: String, message: String },

    /// A key is absent from the handle
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// A key holds a value of another type
    #[error("Wrong type for key {key}: expected {expected}")]
    WrongType { key: String, expected: &'static str },

    /// An array disagrees with the grid dimensions
    #[error("Wrong array size for {key}: expected {expected}, got {actual}")]
    WrongGridSize {
        key: String,
        expected: usize,
        actual: usize,
    },

    /// A variant does not support the requested feature
    #[error("Not implemented: {message}")]
    NotImplemented { message: String },

    /// A raw status code reported by a variant
    #[error("Status {code}: {message}")]
    Status { code: i32, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NearestError {
    /// The integer status code for this error.
    pub fn code(&self) -> i32 {
        match self {
            NearestError::UnknownType { .. } => NOT_FOUND,
            NearestError::InitializationFailed { code, .. } => *code,
            NearestError::DuplicateType { .. } => INVALID_ARGUMENT,
            NearestError::MissingArgument { .. } => INVALID_ARGUMENT,
            NearestError::InvalidArgument { .. } => INVALID_ARGUMENT,
            NearestError::NotFound { .. } => NOT_FOUND,
            NearestError::WrongType { .. } => WRONG_TYPE,
            NearestError::WrongGridSize { .. } => WRONG_ARRAY_SIZE,
            NearestError::NotImplemented { .. } => NOT_IMPLEMENTED,
            NearestError::Status { code, .. } => *code,
            NearestError::Config { .. } => INVALID_ARGUMENT,
            NearestError::Io(_) => IO_PROBLEM,
            NearestError::Json(_) => INVALID_ARGUMENT,
        }
    }
}

/// Convenience type alias for Results with NearestError
pub type Result<T> = std::result::Result<T, NearestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = NearestError::NotFound {
            key: "values".to_string(),
        };
        assert_eq!(err.code(), NOT_FOUND);

        let err = NearestError::Status {
            code: 7,
            message: "boom".to_string(),
        };
        assert_eq!(err.code(), 7);

        let err = NearestError::InitializationFailed {
            type_name: "regular".to_string(),
            code: WRONG_ARRAY_SIZE,
            source: Box::new(NearestError::WrongGridSize {
                key: "values".to_string(),
                expected: 4,
                actual: 3,
            }),
        };
        assert_eq!(err.code(), WRONG_ARRAY_SIZE);
    }

    #[test]
    fn test_error_messages() {
        let err = NearestError::UnknownType {
            type_name: "nearest-point".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown type: nearest-point for nearest");

        let err = NearestError::InitializationFailed {
            type_name: "nearest-grid".to_string(),
            code: 7,
            source: Box::new(NearestError::Status {
                code: 7,
                message: "rejected".to_string(),
            }),
        };
        let text = err.to_string();
        assert!(text.contains("7"));
        assert!(text.contains("nearest-grid"));
    }
}
