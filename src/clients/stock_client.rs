//! # Stock Client
//!
//! High-level API for the stock ledger actor. Wraps a `ResourceClient<Ingredient>`.
use crate::auth::{require_admin, Role};
use crate::model::{Ingredient, IngredientCreate, IngredientId, Requirement};
use crate::stock_actor::{
    StockAction, StockActionResult, StockError, StockStoreAction, StockStoreActionResult,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the stock ledger actor.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<Ingredient>,
}

impl StockClient {
    pub fn new(inner: ResourceClient<Ingredient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Ingredient> for StockClient {
    type Error = StockError;

    fn inner(&self) -> &ResourceClient<Ingredient> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<StockError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => StockError::NotFound(id),
            Err(other) => StockError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StockClient {
    /// Adds an ingredient to the ledger. If one with the same name (trimmed,
    /// case-insensitive) exists, its stock grows by `params.stock` instead and its id
    /// is returned.
    #[instrument(skip(self))]
    pub async fn create_ingredient(
        &self,
        role: Role,
        params: IngredientCreate,
    ) -> Result<IngredientId, StockError> {
        require_admin(role, "create ingredients")?;
        debug!("Sending request");
        match self
            .inner
            .perform_store_action(StockStoreAction::CreateOrRestock(params))
            .await
            .map_err(Self::map_error)?
        {
            StockStoreActionResult::Stocked { id, created, level } => {
                debug!(%id, created, %level, "Ingredient stocked");
                Ok(id)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Removes an ingredient. Dishes that still use it can no longer be ordered.
    #[instrument(skip(self))]
    pub async fn delete_ingredient(&self, role: Role, id: IngredientId) -> Result<(), StockError> {
        require_admin(role, "delete ingredients")?;
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    /// Current quantity on hand.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: IngredientId) -> Result<Decimal, StockError> {
        match self
            .inner
            .perform_action(id, StockAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            StockActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Adds `amount` to the ingredient. Returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        role: Role,
        id: IngredientId,
        amount: Decimal,
    ) -> Result<Decimal, StockError> {
        require_admin(role, "restock")?;
        match self
            .inner
            .perform_action(id, StockAction::Restock(amount))
            .await
            .map_err(Self::map_error)?
        {
            StockActionResult::Restock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Debits every requirement in one step, or nothing.
    ///
    /// Fails with [`StockError::InsufficientStock`] naming the first short ingredient.
    #[instrument(skip(self, requirements), fields(lines = requirements.len()))]
    pub async fn check_and_debit(&self, requirements: Vec<Requirement>) -> Result<(), StockError> {
        debug!(?requirements, "Sending request");
        match self
            .inner
            .perform_store_action(StockStoreAction::CheckAndDebit(requirements))
            .await
            .map_err(Self::map_error)?
        {
            StockStoreActionResult::Debited => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: impl std::fmt::Debug) -> StockError {
    StockError::ActorCommunicationError(format!("unexpected response {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_store_action};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let task = tokio::spawn(async move { stock_client.check_stock(IngredientId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, IngredientId(1));
        assert!(matches!(action, StockAction::CheckStock));
        responder
            .send(Ok(StockActionResult::CheckStock(dec!(42))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), dec!(42));
    }

    #[tokio::test]
    async fn test_check_and_debit_surfaces_typed_shortfall() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let task = tokio::spawn(async move {
            stock_client
                .check_and_debit(vec![Requirement::new(IngredientId(2), dec!(5))])
                .await
        });

        let (action, responder) = expect_store_action(&mut receiver)
            .await
            .expect("Expected StoreAction request");
        let StockStoreAction::CheckAndDebit(reqs) = action else {
            panic!("Expected CheckAndDebit");
        };
        assert_eq!(reqs.len(), 1);
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                StockError::InsufficientStock {
                    ingredient: IngredientId(2),
                    name: "Flour".into(),
                    short_by: dec!(1),
                },
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, StockError::InsufficientStock { short_by, .. } if short_by == dec!(1)));
    }

    #[tokio::test]
    async fn test_create_ingredient_merges_through_the_ledger() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let task = tokio::spawn(async move {
            stock_client
                .create_ingredient(Role::Admin, IngredientCreate {
                    name: "flour".into(),
                    stock: dec!(2),
                })
                .await
        });

        let (action, responder) = expect_store_action(&mut receiver)
            .await
            .expect("Expected StoreAction request");
        let StockStoreAction::CreateOrRestock(params) = action else {
            panic!("Expected CreateOrRestock");
        };
        assert_eq!(params.name, "flour");
        responder
            .send(Ok(StockStoreActionResult::Stocked {
                id: IngredientId(4),
                created: false,
                level: dec!(12),
            }))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), IngredientId(4));
    }

    #[tokio::test]
    async fn test_create_ingredient_requires_admin() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let err = stock_client
            .create_ingredient(Role::Kitchen, IngredientCreate {
                name: "Salt".into(),
                stock: dec!(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StockError::Forbidden(_)));
        drop(stock_client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_restock_requires_admin() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let err = stock_client
            .restock(Role::Waiter, IngredientId(1), dec!(3))
            .await
            .unwrap_err();
        assert!(matches!(err, StockError::Forbidden(_)));
        drop(stock_client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_ingredient_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Ingredient>(10);
        let stock_client = StockClient::new(client);

        let task = tokio::spawn(async move { stock_client.check_stock(IngredientId(7)).await });
        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound("ingredient_7".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            StockError::NotFound("ingredient_7".into())
        );
    }
}
