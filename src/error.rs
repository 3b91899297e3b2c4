//! # Error Taxonomy
//!
//! Every component keeps its own `thiserror` enum. [`Classify`] folds them into the
//! five kinds a request layer maps onto status codes.

use serde::Serialize;
use std::fmt;

/// Coarse error kind shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad input. Nothing was changed.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// The request is well formed but the current state refuses it
    /// (table already claimed, stock too low).
    Conflict,
    /// The caller's role may not perform the operation.
    Forbidden,
    /// Actor plumbing or another unexpected fault.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every component error.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        assert_eq!(ErrorKind::Conflict.to_string(), "conflict");
    }
}
