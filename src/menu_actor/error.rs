//! Error types for the Menu Catalog actor.

use crate::auth::Forbidden;
use crate::error::{Classify, ErrorKind};
use crate::stock_actor::StockError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Dish validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Forbidden(#[from] Forbidden),

    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

impl Classify for MenuError {
    fn kind(&self) -> ErrorKind {
        match self {
            MenuError::DishNotFound(_) | MenuError::IngredientNotFound(_) => ErrorKind::NotFound,
            MenuError::ValidationError(_) => ErrorKind::Validation,
            MenuError::Forbidden(_) => ErrorKind::Forbidden,
            MenuError::Stock(err) => err.kind(),
            MenuError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}
