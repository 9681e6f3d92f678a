//! Error types for dempy
//!
//! Clear error messages with actionable guidance: every variant names the
//! offending value and, where possible, what was expected instead.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// dempy error types
#[derive(Error, Debug)]
pub enum Error {
    /// Discriminant does not name one of the five sample variants
    #[error(
        "Invalid sample variant: {0:?}\nExpected one of UniaxialSample, BiaxialSample, \
         TriaxialSample, QuadriaxialSample, QuinqueaxialSample"
    )]
    InvalidVariant(String),

    /// Required key absent from a sample document
    #[error("Missing field in sample document: {0}")]
    MissingField(String),

    /// Key present in a sample document but holding the wrong kind of value
    #[error("Invalid field in sample document: {field}: {reason}")]
    InvalidField {
        /// Document key
        field: String,
        /// What was wrong with the value
        reason: String,
    },

    /// A sample list contained something that is not a sample document
    #[error("Unexpected document in sample list: {0}")]
    UnexpectedDocument(String),

    /// Malformed protobuf bytes
    #[error("Protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Malformed or ill-typed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
