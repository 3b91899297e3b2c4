//! [`ActorEntity`] implementation for [`Table`].

use super::{TableAction, TableError, TableStoreAction};
use crate::model::{Table, TableCreate, TableId, TableStatus, TableUpdate};
use crate::validation;
use actor_framework::{ActorEntity, EntityStore};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = Table;
    type StoreAction = TableStoreAction;
    type StoreActionResult = Table;
    type Context = ();
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, Self::Error> {
        let name = validation::label("name", &params.name).map_err(TableError::ValidationError)?;
        check_capacity(params.capacity)?;
        Ok(Self::new(id, name, params.capacity))
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(capacity) = update.capacity {
            check_capacity(capacity)?;
            self.capacity = capacity;
        }
        if let Some(name) = update.name {
            self.name = validation::label("name", &name).map_err(TableError::ValidationError)?;
        }
        Ok(())
    }

    /// A table someone is seated at cannot be removed.
    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.status == TableStatus::Occupied {
            return Err(TableError::TableNotFree {
                table: self.id,
                status: self.status,
            });
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TableAction, _ctx: &()) -> Result<Table, Self::Error> {
        match action {
            TableAction::Claim => {
                if !self.is_free() {
                    return Err(TableError::TableNotFree {
                        table: self.id,
                        status: self.status,
                    });
                }
                self.status = TableStatus::Occupied;
            }
            TableAction::Release(next) => {
                if !matches!(next, TableStatus::Free | TableStatus::Cleaning) {
                    return Err(TableError::ValidationError(format!(
                        "a released table becomes free or cleaning, not {next}"
                    )));
                }
                if self.status != TableStatus::Occupied {
                    return Err(TableError::TableNotOccupied {
                        table: self.id,
                        status: self.status,
                    });
                }
                self.status = next;
            }
            TableAction::SetStatus(status) => self.status = status,
        }
        Ok(self.clone())
    }

    async fn handle_store_action(
        store: &mut EntityStore<Self>,
        action: TableStoreAction,
        _ctx: &(),
    ) -> Result<Table, Self::Error> {
        match action {
            TableStoreAction::ClaimFree => {
                // Store iteration is ascending by id.
                let (_, table) = store
                    .iter_mut()
                    .find(|(_, table)| table.is_free())
                    .ok_or(TableError::NoTableAvailable)?;
                table.status = TableStatus::Occupied;
                Ok(table.clone())
            }
        }
    }
}

fn check_capacity(capacity: u32) -> Result<(), TableError> {
    if capacity == 0 {
        return Err(TableError::ValidationError(
            "capacity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
