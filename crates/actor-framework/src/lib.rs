//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on top of Tokio. Each resource type
//! (an ingredient ledger, a table registry, an order book, ...) gets its own actor: a
//! single task that owns an ordered in-memory store and processes requests one at a
//! time.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules for one resource type
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop that owns the [`EntityStore`]
//! 3. **Interface Layer** ([`ResourceClient`]) - cheap, cloneable handle that sends requests
//!
//! ## Operations
//!
//! Every actor speaks the same vocabulary:
//!
//! - **Create / Get / List / Update / Delete** on single entities
//! - **Action**: an entity-specific operation on one entity (e.g. claim one table)
//! - **StoreAction**: an operation that needs the whole store at once (e.g. debit
//!   several ingredients, or find the lowest free table). Because the actor handles
//!   one message at a time, a store action is atomic with respect to every other
//!   request sent to the same actor.
//!
//! ```rust
//! use actor_framework::{ActorEntity, EntityStore, NoAction, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, hits: u64 }
//! #[derive(Debug)] struct CounterCreate;
//! #[derive(Debug)] enum CounterAction { Hit }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = NoAction;
//!     type Action = CounterAction;
//!     type ActionResult = u64;
//!     type StoreAction = NoAction;
//!     type StoreActionResult = ();
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, hits: 0 })
//!     }
//!     async fn on_update(&mut self, update: NoAction, _: &()) -> Result<(), Self::Error> {
//!         match update {}
//!     }
//!     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u64, Self::Error> {
//!         self.hits += 1;
//!         Ok(self.hits)
//!     }
//!     async fn handle_store_action(
//!         _: &mut EntityStore<Self>,
//!         action: NoAction,
//!         _: &(),
//!     ) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate).await.unwrap();
//!     assert_eq!(client.perform_action(id, CounterAction::Hit).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`run(context)`), not when it is
//! constructed. All actors and clients can therefore be created first and wired
//! afterwards, which keeps acyclic dependency graphs simple to build.
//!
//! ## Testing
//!
//! [`mock::MockClient`] speaks the same protocol as a real actor but answers from a
//! queue of expectations, so an actor can be tested against mocked dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, NoAction};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
