//! Error types for the Stock Ledger actor.

use crate::auth::Forbidden;
use crate::error::{Classify, ErrorKind};
use crate::model::IngredientId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StockError {
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    /// Names the first short ingredient in id order.
    #[error("Insufficient stock of {name} ({ingredient}): short by {short_by}")]
    InsufficientStock {
        ingredient: IngredientId,
        name: String,
        short_by: Decimal,
    },

    #[error("Stock validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Forbidden(#[from] Forbidden),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StockError {
    fn from(msg: String) -> Self {
        StockError::ActorCommunicationError(msg)
    }
}

impl Classify for StockError {
    fn kind(&self) -> ErrorKind {
        match self {
            StockError::NotFound(_) => ErrorKind::NotFound,
            StockError::InsufficientStock { .. } => ErrorKind::Conflict,
            StockError::ValidationError(_) => ErrorKind::Validation,
            StockError::Forbidden(_) => ErrorKind::Forbidden,
            StockError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}
