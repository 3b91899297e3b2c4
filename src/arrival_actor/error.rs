//! Error types for the Arrival Assigner actor.

use crate::error::{Classify, ErrorKind};
use crate::model::{TableId, TableStatus};
use crate::table_actor::TableError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArrivalError {
    #[error("Arrival not found: {0}")]
    NotFound(String),

    #[error("Arrival validation error: {0}")]
    ValidationError(String),

    #[error("No table available")]
    NoTableAvailable,

    #[error("Table {table} is not free (currently {status})")]
    TableNotFree { table: TableId, status: TableStatus },

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error(transparent)]
    Table(TableError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<TableError> for ArrivalError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NoTableAvailable => ArrivalError::NoTableAvailable,
            TableError::TableNotFree { table, status } => {
                ArrivalError::TableNotFree { table, status }
            }
            TableError::NotFound(id) => ArrivalError::TableNotFound(id),
            other => ArrivalError::Table(other),
        }
    }
}

impl From<String> for ArrivalError {
    fn from(msg: String) -> Self {
        ArrivalError::ActorCommunicationError(msg)
    }
}

impl Classify for ArrivalError {
    fn kind(&self) -> ErrorKind {
        match self {
            ArrivalError::NotFound(_) | ArrivalError::TableNotFound(_) => ErrorKind::NotFound,
            ArrivalError::ValidationError(_) => ErrorKind::Validation,
            ArrivalError::NoTableAvailable | ArrivalError::TableNotFree { .. } => {
                ErrorKind::Conflict
            }
            ArrivalError::Table(err) => err.kind(),
            ArrivalError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}
