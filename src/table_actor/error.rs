//! Error types for the Table Registry actor.

use crate::auth::Forbidden;
use crate::error::{Classify, ErrorKind};
use crate::model::{TableId, TableStatus};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Table {table} is not free (currently {status})")]
    TableNotFree { table: TableId, status: TableStatus },

    #[error("Table {table} is not occupied (currently {status})")]
    TableNotOccupied { table: TableId, status: TableStatus },

    #[error("No table available")]
    NoTableAvailable,

    #[error("Table validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Forbidden(#[from] Forbidden),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TableError {
    fn from(msg: String) -> Self {
        TableError::ActorCommunicationError(msg)
    }
}

impl Classify for TableError {
    fn kind(&self) -> ErrorKind {
        match self {
            TableError::NotFound(_) => ErrorKind::NotFound,
            TableError::TableNotFree { .. }
            | TableError::TableNotOccupied { .. }
            | TableError::NoTableAvailable => ErrorKind::Conflict,
            TableError::ValidationError(_) => ErrorKind::Validation,
            TableError::Forbidden(_) => ErrorKind::Forbidden,
            TableError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}
