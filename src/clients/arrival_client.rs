//! # Arrival Client
//!
//! Seats parties and publishes the resulting table list.
use crate::arrival_actor::ArrivalError;
use crate::clients::TableClient;
use crate::model::{Arrival, ArrivalCreate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the arrival actor.
#[derive(Clone)]
pub struct ArrivalClient {
    inner: ResourceClient<Arrival>,
    tables: TableClient,
}

impl ArrivalClient {
    pub fn new(inner: ResourceClient<Arrival>, tables: TableClient) -> Self {
        Self { inner, tables }
    }
}

#[async_trait]
impl ActorClient<Arrival> for ArrivalClient {
    type Error = ArrivalError;

    fn inner(&self) -> &ResourceClient<Arrival> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ArrivalError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ArrivalError::NotFound(id),
            Err(other) => ArrivalError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ArrivalClient {
    /// Seats a party at the requested table, or at the lowest-id free one.
    ///
    /// On success the full table list is published as `tables_changed`. On failure
    /// nothing is recorded and nothing is published.
    #[instrument(skip(self))]
    pub async fn create_arrival(&self, params: ArrivalCreate) -> Result<Arrival, ArrivalError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.tables.publish_snapshot().await;
        self.get(id)
            .await?
            .ok_or_else(|| ArrivalError::NotFound(id.to_string()))
    }
}
