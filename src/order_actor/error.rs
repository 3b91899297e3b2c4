//! Error types for the Order actor.

use crate::arrival_actor::ArrivalError;
use crate::error::{Classify, ErrorKind};
use crate::menu_actor::MenuError;
use crate::model::{IngredientId, OrderId, OrderStatus};
use crate::stock_actor::StockError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Arrival not found: {0}")]
    ArrivalNotFound(String),

    #[error("Dish not found: {0}")]
    DishNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    /// Nothing was debited and no order was recorded.
    #[error("Insufficient stock of {name} ({ingredient}): short by {short_by}")]
    InsufficientStock {
        ingredient: IngredientId,
        name: String,
        short_by: Decimal,
    },

    /// Rejected by the strict status policy.
    #[error("Order {order} cannot go from {from} to {to}")]
    InvalidTransition {
        order: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Arrival(ArrivalError),

    #[error(transparent)]
    Menu(MenuError),

    #[error(transparent)]
    Stock(StockError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<ArrivalError> for OrderError {
    fn from(err: ArrivalError) -> Self {
        OrderError::Arrival(err)
    }
}

impl From<MenuError> for OrderError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::DishNotFound(id) => OrderError::DishNotFound(id),
            MenuError::ValidationError(msg) => OrderError::ValidationError(msg),
            other => OrderError::Menu(other),
        }
    }
}

impl From<StockError> for OrderError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::InsufficientStock {
                ingredient,
                name,
                short_by,
            } => OrderError::InsufficientStock {
                ingredient,
                name,
                short_by,
            },
            StockError::NotFound(id) => OrderError::IngredientNotFound(id),
            other => OrderError::Stock(other),
        }
    }
}

impl Classify for OrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_)
            | OrderError::ArrivalNotFound(_)
            | OrderError::DishNotFound(_)
            | OrderError::IngredientNotFound(_) => ErrorKind::NotFound,
            OrderError::InsufficientStock { .. } | OrderError::InvalidTransition { .. } => {
                ErrorKind::Conflict
            }
            OrderError::ValidationError(_) => ErrorKind::Validation,
            OrderError::Arrival(err) => err.kind(),
            OrderError::Menu(err) => err.kind(),
            OrderError::Stock(err) => err.kind(),
            OrderError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}
