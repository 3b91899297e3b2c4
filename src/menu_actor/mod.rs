//! # Menu Catalog Actor
//!
//! Owns every [`Dish`] and its recipe. During order processing the catalog is only
//! read: [`DishAction::Requirements`] turns a dish and a portion count into the
//! ingredient amounts the stock ledger must debit.
//!
//! Creating a dish checks that every ingredient it names exists in the ledger, so
//! the actor runs with a [`StockClient`](crate::clients::StockClient) as context.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Dish;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new menu actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::new(buffer)
}
