//! # Stock Ledger Actor
//!
//! Owns every [`Ingredient`] and its quantity on hand.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Ingredient`]
//! - [`error`] - [`StockError`]
//! - [`actions`] - per-ingredient [`StockAction`]s and the store-wide [`StockStoreAction`]
//!
//! ## Atomic debit
//!
//! [`StockStoreAction::CheckAndDebit`] runs as one actor message over the whole store:
//! every requirement is checked before any stock moves, and no other debit can
//! interleave with it. Two orders racing for the last portion of an ingredient are
//! serialized by the mailbox; the second one sees the debited level and fails.
//!
//! [`StockStoreAction::CreateOrRestock`] is also store-wide: looking up an ingredient
//! by name and then adding or creating it happen in the same message.
//!
//! Stock arithmetic is checked. An amount that would leave the `Decimal` range is a
//! validation error and changes nothing.
//!
//! ```rust
//! use kage_floor::clients::StockClient;
//! use kage_floor::auth::Role;
//! use kage_floor::model::{IngredientCreate, Requirement};
//! use kage_floor::stock_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = stock_actor::new(32);
//!     let stock = StockClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let flour = stock
//!         .create_ingredient(Role::Admin, IngredientCreate {
//!             name: "Flour".into(),
//!             stock: Decimal::from(10),
//!         })
//!         .await?;
//!
//!     stock.check_and_debit(vec![Requirement::new(flour, Decimal::from(4))]).await?;
//!     assert_eq!(stock.check_stock(flour).await?, Decimal::from(6));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Ingredient;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new stock ledger actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Ingredient>, ResourceClient<Ingredient>) {
    ResourceActor::new(buffer)
}
