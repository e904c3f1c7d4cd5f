//! Error types for the record codec.

use thiserror::Error;

use crate::model::ArticleId;

/// Why a single line of a catalog file was rejected.
///
/// Every variant carries the offending line, so the message can be shown to the user as is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Missing fields in line: {0}")]
    MissingFields(String),

    #[error("Too many fields in line: {0}")]
    TooManyFields(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Incorrect number format in line: {0}")]
    NumberFormat(String),

    #[error("Duplicate article ID {id} in line: {line}")]
    DuplicateId { id: ArticleId, line: String },
}
