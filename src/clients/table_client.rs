//! # Table Client
//!
//! High-level API for the table registry. Every mutation that commits publishes
//! [`DomainEvent::TablesChanged`] with the full table list; claims do not, because
//! the arrival they belong to publishes once it is recorded.
use crate::auth::{require_admin, Role};
use crate::events::{DomainEvent, EventBus};
use crate::model::{Table, TableCreate, TableId, TableStatus, TableUpdate};
use crate::table_actor::{TableAction, TableError, TableStoreAction};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the table registry actor.
#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<Table>,
    bus: EventBus,
}

impl TableClient {
    pub fn new(inner: ResourceClient<Table>, bus: EventBus) -> Self {
        Self { inner, bus }
    }
}

#[async_trait]
impl ActorClient<Table> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<Table> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl TableClient {
    #[instrument(skip(self))]
    pub async fn create_table(&self, role: Role, params: TableCreate) -> Result<TableId, TableError> {
        require_admin(role, "create tables")?;
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.publish_snapshot().await;
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_table(
        &self,
        role: Role,
        id: TableId,
        update: TableUpdate,
    ) -> Result<Table, TableError> {
        require_admin(role, "update tables")?;
        let table = self.inner.update(id, update).await.map_err(Self::map_error)?;
        self.publish_snapshot().await;
        Ok(table)
    }

    /// Removes a table that nobody is seated at.
    #[instrument(skip(self))]
    pub async fn delete_table(&self, role: Role, id: TableId) -> Result<(), TableError> {
        require_admin(role, "delete tables")?;
        self.inner.delete(id).await.map_err(Self::map_error)?;
        self.publish_snapshot().await;
        Ok(())
    }

    /// Occupies the free table with the lowest id.
    ///
    /// Fails with [`TableError::NoTableAvailable`] when every table is taken.
    #[instrument(skip(self))]
    pub async fn claim_free_table(&self) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .perform_store_action(TableStoreAction::ClaimFree)
            .await
            .map_err(Self::map_error)
    }

    /// Occupies one table, failing with [`TableError::TableNotFree`] if it is taken.
    #[instrument(skip(self))]
    pub async fn claim_table(&self, id: TableId) -> Result<Table, TableError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, TableAction::Claim)
            .await
            .map_err(Self::map_error)
    }

    /// Frees an occupied table, either straight to free or to cleaning.
    #[instrument(skip(self))]
    pub async fn release_table(&self, id: TableId, next: TableStatus) -> Result<Table, TableError> {
        let table = self
            .inner
            .perform_action(id, TableAction::Release(next))
            .await
            .map_err(Self::map_error)?;
        self.publish_snapshot().await;
        Ok(table)
    }

    /// Admin override to any status.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        role: Role,
        id: TableId,
        status: TableStatus,
    ) -> Result<Table, TableError> {
        require_admin(role, "override table status")?;
        let table = self
            .inner
            .perform_action(id, TableAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?;
        self.publish_snapshot().await;
        Ok(table)
    }

    /// Re-publishes the current table list, e.g. for a display that just connected.
    #[instrument(skip(self))]
    pub async fn refresh_tables(&self) -> Result<usize, TableError> {
        let tables = self.list().await?;
        let count = tables.len();
        self.bus.emit(DomainEvent::TablesChanged { tables });
        Ok(count)
    }

    /// Best effort: the mutation already committed, so a failed read is only logged.
    pub(crate) async fn publish_snapshot(&self) {
        match self.list().await {
            Ok(tables) => {
                self.bus.emit(DomainEvent::TablesChanged { tables });
            }
            Err(e) => warn!(error = %e, "Could not read tables for tables_changed"),
        }
    }
}
