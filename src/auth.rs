//! # Roles
//!
//! The caller's role is supplied by the authentication layer and trusted as given.
//! Catalog and table administration is reserved for [`Role::Admin`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Waiter,
    Kitchen,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Waiter => "waiter",
            Role::Kitchen => "kitchen",
            Role::Admin => "admin",
        };
        f.write_str(label)
    }
}

/// Raised when a role may not perform an operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{role} may not {operation}")]
pub struct Forbidden {
    pub role: Role,
    pub operation: &'static str,
}

/// Fails with [`Forbidden`] unless `role` is an admin.
pub fn require_admin(role: Role, operation: &'static str) -> Result<(), Forbidden> {
    if role.is_admin() {
        Ok(())
    } else {
        tracing::warn!(%role, operation, "Forbidden");
        Err(Forbidden { role, operation })
    }
}
