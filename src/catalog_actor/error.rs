//! Error types for the catalog actor.

use thiserror::Error;

use crate::codec::CodecError;
use crate::model::{ArticleId, PriceError, TableSizeError};

/// Errors that can occur during catalog operations.
///
/// The `Display` text is what the user sees in the UI's error report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product name can't be empty")]
    EmptyName,

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("Product description can't be empty")]
    EmptyDescription,

    /// Name or description would break the line format.
    #[error("{field} can't contain ';'")]
    Delimiter { field: &'static str },

    #[error("Invalid category")]
    InvalidCategory,

    #[error("Invalid ID format")]
    InvalidIdFormat,

    #[error("Product ID is too low")]
    IdTooLow,

    /// No product carries this id.
    #[error("Invalid product ID")]
    NotFound(ArticleId),

    #[error("Article {0} is not a food product")]
    NotFoodProduct(ArticleId),

    /// Quantity not a positive whole number, or stock would overflow.
    #[error("Invalid quantity")]
    InvalidQuantity,

    #[error("Not enough stock")]
    NotEnoughStock { requested: u32, available: u32 },

    #[error("Invalid input format: {0}")]
    NumberFormat(String),

    #[error(transparent)]
    TableSize(#[from] TableSizeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
