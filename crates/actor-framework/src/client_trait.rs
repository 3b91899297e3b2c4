//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get` and `list` built on
//! top of the wrapped `ResourceClient`, with framework errors mapped into the
//! resource's own error type. Mutations, deletes included, stay with each client so
//! it can add its own checks.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, EntityStore, FrameworkError, NoAction, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Seat { id: u32 }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug, thiserror::Error)]
/// enum SeatError { #[error("{0}")] Communication(String) }
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u32; type Create = SeatCreate; type Update = NoAction; type Action = NoAction;
///     type ActionResult = (); type StoreAction = NoAction; type StoreActionResult = ();
///     type Context = (); type Error = SeatError;
///     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, u: NoAction, _: &()) -> Result<(), Self::Error> { match u {} }
///     async fn handle_action(&mut self, a: NoAction, _: &()) -> Result<(), Self::Error> { match a {} }
///     async fn handle_store_action(_: &mut EntityStore<Self>, a: NoAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct SeatClient { inner: ResourceClient<Seat> }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///     fn inner(&self) -> &ResourceClient<Seat> { &self.inner }
///     fn map_error(e: FrameworkError) -> SeatError { SeatError::Communication(e.to_string()) }
/// }
///
/// async fn usage(client: SeatClient) {
///     // get() and list() come for free
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, ascending by ID.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
