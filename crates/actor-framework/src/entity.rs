//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be managed by a [`ResourceActor`].
//! Associated types pin down the payload of each operation so that a table payload can
//! never be sent to an ingredient actor.
//!
//! [`ResourceActor`]: crate::ResourceActor

use crate::store::EntityStore;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Uninhabited payload for entities that do not support an operation.
///
/// Use it as `Update`, `Action` or `StoreAction` and handle it with `match value {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Hooks
/// `on_create` and `on_delete` have no-op defaults. `on_create` runs after
/// `from_create_params` and before the entity is inserted, so a failing hook leaves the
/// store untouched.
///
/// # Errors
/// One error enum per actor. It travels boxed inside [`FrameworkError::EntityError`]
/// and clients recover it with [`FrameworkError::downcast_entity`].
///
/// [`FrameworkError::EntityError`]: crate::FrameworkError::EntityError
/// [`FrameworkError::downcast_entity`]: crate::FrameworkError::downcast_entity
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, generated from a `u32` counter. Ordering defines store iteration order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Operations on a single entity (e.g. `Restock`).
    type Action: Send + Sync + Debug;

    /// Result of [`ActorEntity::Action`].
    type ActionResult: Send + Sync + Debug;

    /// Operations over the whole store (e.g. debit several ingredients at once).
    type StoreAction: Send + Sync + Debug;

    /// Result of [`ActorEntity::StoreAction`].
    type StoreActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected through `run()`. `()` when there are none.
    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the generated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handlers (Async) ---

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Handle an operation that spans the whole store.
    ///
    /// Either every change the handler makes is kept or, when it returns `Err`, it must
    /// have made none: validate first, mutate second.
    async fn handle_store_action(
        store: &mut EntityStore<Self>,
        action: Self::StoreAction,
        _ctx: &Self::Context,
    ) -> Result<Self::StoreActionResult, Self::Error>;
}
