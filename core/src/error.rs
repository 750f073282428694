//! Error types for the REST client core.
//!
//! # Design
//! Request-side problems (`MissingBody`, `Serialization`) are detected before
//! any network call, so the caller can refuse to dispatch. Response-side
//! problems (`Deserialization`, the CSV variants) only arise while rendering
//! a body that already arrived.

use thiserror::Error;

/// Errors returned by `RestClient` and the output renderers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A POST request was built without a payload.
    #[error("data is required for POST method")]
    MissingBody,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body is not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// CSV output needs a JSON array of objects.
    #[error("invalid data format for CSV output")]
    InvalidCsvShape,

    /// A record carries a key that the header row (taken from the first
    /// record) does not have.
    #[error("record {row} contains field {field:?} not present in the header")]
    UnexpectedCsvField { row: usize, field: String },

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
}
