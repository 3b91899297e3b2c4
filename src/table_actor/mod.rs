//! # Table Registry Actor
//!
//! Owns every [`Table`] and its status. Claims are single actor messages, so two
//! arrivals can never be handed the same table:
//!
//! - [`TableStoreAction::ClaimFree`] takes the lowest-id free table.
//! - [`TableAction::Claim`] takes one specific table if it is free.
//!
//! The registry never publishes events itself; the [`TableClient`](crate::clients::TableClient)
//! does, after a mutation commits.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Table;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new table registry actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Table>, ResourceClient<Table>) {
    ResourceActor::new(buffer)
}
