//! [`ActorEntity`] implementation for [`Arrival`].

use super::ArrivalError;
use crate::clients::TableClient;
use crate::model::{Arrival, ArrivalCreate, ArrivalId, TableId};
use crate::validation;
use actor_framework::{ActorEntity, EntityStore, NoAction};
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

#[async_trait]
impl ActorEntity for Arrival {
    type Id = ArrivalId;
    type Create = ArrivalCreate;
    type Update = NoAction;
    type Action = NoAction;
    type ActionResult = ();
    type StoreAction = NoAction;
    type StoreActionResult = ();
    type Context = TableClient;
    type Error = ArrivalError;

    /// Validates the party before any table is touched.
    fn from_create_params(id: ArrivalId, params: ArrivalCreate) -> Result<Self, Self::Error> {
        let customer_name =
            validation::customer_name(&params.customer_name).map_err(ArrivalError::ValidationError)?;
        let party_size =
            validation::party_size(params.party_size).map_err(ArrivalError::ValidationError)?;
        let contact =
            validation::contact(params.contact.as_deref()).map_err(ArrivalError::ValidationError)?;
        let preferences = validation::preferences(params.preferences.as_deref())
            .map_err(ArrivalError::ValidationError)?;

        Ok(Self {
            id,
            customer_name,
            party_size,
            contact,
            preferences,
            requested_table: params.table_id,
            // Set by on_create once a table is claimed.
            table_id: TableId::default(),
            assigned_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, tables: &TableClient) -> Result<(), Self::Error> {
        let table = match self.requested_table {
            Some(id) => tables.claim_table(id).await?,
            None => tables.claim_free_table().await?,
        };
        self.table_id = table.id;
        self.assigned_at = Utc::now();
        info!(arrival = %self.id, table = %table.id, party = self.party_size, "Party seated");
        Ok(())
    }

    async fn on_update(&mut self, update: NoAction, _ctx: &TableClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: NoAction, _ctx: &TableClient) -> Result<(), Self::Error> {
        match action {}
    }

    async fn handle_store_action(
        _store: &mut EntityStore<Self>,
        action: NoAction,
        _ctx: &TableClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_party_never_reaches_tables() {
        let err = Arrival::from_create_params(ArrivalId(1), ArrivalCreate::walk_in("Ana", 0))
            .unwrap_err();
        assert!(matches!(err, ArrivalError::ValidationError(_)));

        let err = Arrival::from_create_params(ArrivalId(1), ArrivalCreate::walk_in("4na", 2))
            .unwrap_err();
        assert!(matches!(err, ArrivalError::ValidationError(_)));
    }

    #[test]
    fn test_params_are_cleaned() {
        let arrival = Arrival::from_create_params(
            ArrivalId(1),
            ArrivalCreate {
                customer_name: " Ana ".into(),
                party_size: 2,
                contact: Some("".into()),
                preferences: Some(" window ".into()),
                table_id: Some(TableId(4)),
            },
        )
        .unwrap();
        assert_eq!(arrival.customer_name, "Ana");
        assert_eq!(arrival.contact, None);
        assert_eq!(arrival.preferences.as_deref(), Some("window"));
        assert_eq!(arrival.requested_table, Some(TableId(4)));
    }
}
