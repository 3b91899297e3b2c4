//! [`ActorEntity`] implementation for [`Ingredient`].

use super::{StockAction, StockActionResult, StockError, StockStoreAction, StockStoreActionResult};
use crate::model::{Ingredient, IngredientCreate, IngredientId, IngredientUpdate, Requirement};
use crate::validation;
use actor_framework::{ActorEntity, EntityStore};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

#[async_trait]
impl ActorEntity for Ingredient {
    type Id = IngredientId;
    type Create = IngredientCreate;
    type Update = IngredientUpdate;
    type Action = StockAction;
    type ActionResult = StockActionResult;
    type StoreAction = StockStoreAction;
    type StoreActionResult = StockStoreActionResult;
    type Context = ();
    type Error = StockError;

    fn from_create_params(id: IngredientId, params: IngredientCreate) -> Result<Self, Self::Error> {
        let name = validation::label("name", &params.name).map_err(StockError::ValidationError)?;
        if params.stock < Decimal::ZERO {
            return Err(StockError::ValidationError(
                "stock must not be negative".to_string(),
            ));
        }
        Ok(Self::new(id, name, params.stock))
    }

    async fn on_update(&mut self, update: IngredientUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = validation::label("name", &name).map_err(StockError::ValidationError)?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StockAction,
        _ctx: &(),
    ) -> Result<StockActionResult, Self::Error> {
        match action {
            StockAction::CheckStock => Ok(StockActionResult::CheckStock(self.stock)),
            StockAction::Restock(amount) => {
                if amount < Decimal::ZERO {
                    return Err(StockError::ValidationError(format!(
                        "restock amount must not be negative, got {amount}"
                    )));
                }
                self.stock = add_stock(&self.name, self.stock, amount)?;
                Ok(StockActionResult::Restock(self.stock))
            }
        }
    }

    async fn handle_store_action(
        store: &mut EntityStore<Self>,
        action: StockStoreAction,
        _ctx: &(),
    ) -> Result<StockStoreActionResult, Self::Error> {
        match action {
            StockStoreAction::CheckAndDebit(requirements) => {
                check_and_debit(store, requirements)?;
                Ok(StockStoreActionResult::Debited)
            }
            StockStoreAction::CreateOrRestock(params) => create_or_restock(store, params),
        }
    }
}

fn add_stock(name: &str, stock: Decimal, amount: Decimal) -> Result<Decimal, StockError> {
    stock.checked_add(amount).ok_or_else(|| {
        StockError::ValidationError(format!("adding {amount} to {name} exceeds the stock limit"))
    })
}

fn create_or_restock(
    store: &mut EntityStore<Ingredient>,
    params: IngredientCreate,
) -> Result<StockStoreActionResult, StockError> {
    let name = validation::label("name", &params.name).map_err(StockError::ValidationError)?;
    if params.stock < Decimal::ZERO {
        return Err(StockError::ValidationError(
            "stock must not be negative".to_string(),
        ));
    }

    let key = name.to_lowercase();
    if let Some((_, existing)) = store
        .iter_mut()
        .find(|(_, ingredient)| ingredient.name.to_lowercase() == key)
    {
        existing.stock = add_stock(&existing.name, existing.stock, params.stock)?;
        debug!(id = %existing.id, level = %existing.stock, "Restocked by name");
        return Ok(StockStoreActionResult::Stocked {
            id: existing.id,
            created: false,
            level: existing.stock,
        });
    }

    let level = params.stock;
    let id = store.insert_new(|id| Ingredient::from_create_params(id, params))?;
    debug!(%id, %level, "Created");
    Ok(StockStoreActionResult::Stocked {
        id,
        created: true,
        level,
    })
}

fn check_and_debit(
    store: &mut EntityStore<Ingredient>,
    requirements: Vec<Requirement>,
) -> Result<(), StockError> {
    let mut totals: BTreeMap<IngredientId, Decimal> = BTreeMap::new();
    for req in requirements {
        if req.amount < Decimal::ZERO {
            return Err(StockError::ValidationError(format!(
                "requirement for {} must not be negative",
                req.ingredient_id
            )));
        }
        let total = totals.entry(req.ingredient_id).or_default();
        *total = total.checked_add(req.amount).ok_or_else(|| {
            StockError::ValidationError(format!(
                "total requirement for {} is too large",
                req.ingredient_id
            ))
        })?;
    }

    // Check everything before touching anything.
    let mut levels = Vec::with_capacity(totals.len());
    for (id, amount) in totals {
        let ingredient = store
            .get(&id)
            .ok_or_else(|| StockError::NotFound(id.to_string()))?;
        match ingredient.stock.checked_sub(amount) {
            Some(left) if left >= Decimal::ZERO => levels.push((id, amount, left)),
            _ => {
                return Err(StockError::InsufficientStock {
                    ingredient: id,
                    name: ingredient.name.clone(),
                    short_by: amount - ingredient.stock,
                })
            }
        }
    }

    for (id, amount, left) in levels {
        if let Some(ingredient) = store.get_mut(&id) {
            ingredient.stock = left;
            debug!(%id, %amount, %left, "Debited");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::ResourceActor;
    use rust_decimal_macros::dec;

    async fn ledger(levels: &[(&str, Decimal)]) -> actor_framework::ResourceClient<Ingredient> {
        let (actor, client) = ResourceActor::new(8);
        tokio::spawn(actor.run(()));
        for (name, stock) in levels {
            client
                .create(IngredientCreate {
                    name: name.to_string(),
                    stock: *stock,
                })
                .await
                .unwrap();
        }
        client
    }

    async fn level(client: &actor_framework::ResourceClient<Ingredient>, id: u32) -> Decimal {
        client.get(IngredientId(id)).await.unwrap().unwrap().stock
    }

    #[tokio::test]
    async fn test_debit_sums_repeated_ingredients() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        client
            .perform_store_action(StockStoreAction::CheckAndDebit(vec![
                Requirement::new(IngredientId(1), dec!(2)),
                Requirement::new(IngredientId(1), dec!(3)),
            ]))
            .await
            .unwrap();

        assert_eq!(level(&client, 1).await, dec!(5));
    }

    #[tokio::test]
    async fn test_shortfall_debits_nothing() {
        let client = ledger(&[("Flour", dec!(10)), ("Eggs", dec!(1))]).await;

        let err = client
            .perform_store_action(StockStoreAction::CheckAndDebit(vec![
                Requirement::new(IngredientId(1), dec!(4)),
                Requirement::new(IngredientId(2), dec!(3)),
            ]))
            .await
            .unwrap_err()
            .downcast_entity::<StockError>()
            .unwrap();

        assert_eq!(
            err,
            StockError::InsufficientStock {
                ingredient: IngredientId(2),
                name: "Eggs".into(),
                short_by: dec!(2),
            }
        );
        assert_eq!(level(&client, 1).await, dec!(10));
        assert_eq!(level(&client, 2).await, dec!(1));
    }

    #[tokio::test]
    async fn test_unknown_ingredient_debits_nothing() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        let err = client
            .perform_store_action(StockStoreAction::CheckAndDebit(vec![
                Requirement::new(IngredientId(1), dec!(1)),
                Requirement::new(IngredientId(9), dec!(1)),
            ]))
            .await
            .unwrap_err()
            .downcast_entity::<StockError>()
            .unwrap();

        assert_eq!(err, StockError::NotFound("ingredient_9".into()));
        assert_eq!(level(&client, 1).await, dec!(10));
    }

    #[tokio::test]
    async fn test_exact_stock_debits_to_zero() {
        let client = ledger(&[("Basil", dec!(0.5))]).await;

        client
            .perform_store_action(StockStoreAction::CheckAndDebit(vec![Requirement::new(
                IngredientId(1),
                dec!(0.5),
            )]))
            .await
            .unwrap();

        assert_eq!(level(&client, 1).await, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_restock_is_additive_and_rejects_negative() {
        let client = ledger(&[("Flour", dec!(4))]).await;

        let result = client
            .perform_action(IngredientId(1), StockAction::Restock(dec!(2.5)))
            .await
            .unwrap();
        assert_eq!(result, StockActionResult::Restock(dec!(6.5)));

        let err = client
            .perform_action(IngredientId(1), StockAction::Restock(dec!(-1)))
            .await
            .unwrap_err()
            .downcast_entity::<StockError>()
            .unwrap();
        assert!(matches!(err, StockError::ValidationError(_)));
        assert_eq!(level(&client, 1).await, dec!(6.5));
    }

    #[tokio::test]
    async fn test_restock_past_the_limit_is_rejected_and_ledger_keeps_running() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        let err = client
            .perform_action(IngredientId(1), StockAction::Restock(Decimal::MAX))
            .await
            .unwrap_err()
            .downcast_entity::<StockError>()
            .unwrap();
        assert!(matches!(err, StockError::ValidationError(_)));

        assert_eq!(level(&client, 1).await, dec!(10));
        let id = client
            .create(IngredientCreate {
                name: "Eggs".into(),
                stock: dec!(6),
            })
            .await
            .unwrap();
        assert_eq!(id, IngredientId(2));
    }

    #[tokio::test]
    async fn test_oversized_requirement_total_debits_nothing() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        let err = client
            .perform_store_action(StockStoreAction::CheckAndDebit(vec![
                Requirement::new(IngredientId(1), Decimal::MAX),
                Requirement::new(IngredientId(1), Decimal::MAX),
            ]))
            .await
            .unwrap_err()
            .downcast_entity::<StockError>()
            .unwrap();

        assert!(matches!(err, StockError::ValidationError(_)));
        assert_eq!(level(&client, 1).await, dec!(10));
    }

    #[tokio::test]
    async fn test_create_or_restock_merges_by_name() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        let merged = client
            .perform_store_action(StockStoreAction::CreateOrRestock(IngredientCreate {
                name: "  fLOUR ".into(),
                stock: dec!(2.5),
            }))
            .await
            .unwrap();
        assert_eq!(
            merged,
            StockStoreActionResult::Stocked {
                id: IngredientId(1),
                created: false,
                level: dec!(12.5),
            }
        );

        let created = client
            .perform_store_action(StockStoreAction::CreateOrRestock(IngredientCreate {
                name: "Tomato".into(),
                stock: dec!(3),
            }))
            .await
            .unwrap();
        assert_eq!(
            created,
            StockStoreActionResult::Stocked {
                id: IngredientId(2),
                created: true,
                level: dec!(3),
            }
        );
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert_eq!(level(&client, 1).await, dec!(12.5));
    }

    #[tokio::test]
    async fn test_create_or_restock_validates_before_merging() {
        let client = ledger(&[("Flour", dec!(10))]).await;

        for params in [
            IngredientCreate {
                name: "Flour".into(),
                stock: dec!(-1),
            },
            IngredientCreate {
                name: "Flour".into(),
                stock: Decimal::MAX,
            },
            IngredientCreate {
                name: "   ".into(),
                stock: dec!(1),
            },
        ] {
            let err = client
                .perform_store_action(StockStoreAction::CreateOrRestock(params))
                .await
                .unwrap_err()
                .downcast_entity::<StockError>()
                .unwrap();
            assert!(matches!(err, StockError::ValidationError(_)));
        }
        assert_eq!(level(&client, 1).await, dec!(10));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[test]
    fn test_negative_initial_stock_is_rejected() {
        let result = Ingredient::from_create_params(
            IngredientId(1),
            IngredientCreate {
                name: "Salt".into(),
                stock: dec!(-1),
            },
        );
        assert!(matches!(result, Err(StockError::ValidationError(_))));
    }
}
