//! Unified error types for the item service.

use rust_decimal::Decimal;
use thiserror::Error;

/// Unified error type for the item service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors surfaced by item operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    /// The submitted item is invalid.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No item exists with the given id.
    #[error("item {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: u64,
    },
}

/// Field-level validation failures for submitted items.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is missing or only whitespace.
    #[error("name must not be blank")]
    BlankName,

    /// Price below zero.
    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    /// Quantity below zero.
    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    /// Quantity does not fit the stored representation.
    #[error("quantity {0} is too large")]
    QuantityTooLarge(i64),

    /// Request body could not be parsed as an item.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment could not be parsed.
    #[error("invalid path: {0}")]
    MalformedPath(String),

    /// The query string could not be parsed.
    #[error("invalid query string: {0}")]
    MalformedQuery(String),

    /// A required query parameter was not supplied.
    #[error("missing query parameter `{0}`")]
    MissingParameter(&'static str),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
