//! [`ActorEntity`] implementation for [`Dish`].

use super::{DishAction, DishActionResult, MenuError};
use crate::clients::StockClient;
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use crate::validation;
use actor_framework::{ActorClient, ActorEntity, EntityStore, NoAction};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = DishActionResult;
    type StoreAction = NoAction;
    type StoreActionResult = ();
    type Context = StockClient;
    type Error = MenuError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        let name = validation::label("name", &params.name).map_err(MenuError::ValidationError)?;
        let description =
            validation::preferences(params.description.as_deref()).map_err(MenuError::ValidationError)?;
        check_price(params.price)?;

        if params.ingredients.is_empty() {
            return Err(MenuError::ValidationError(
                "a dish needs at least one ingredient".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for line in &params.ingredients {
            if line.quantity <= Decimal::ZERO {
                return Err(MenuError::ValidationError(format!(
                    "quantity of {} must be positive",
                    line.ingredient_id
                )));
            }
            if !seen.insert(line.ingredient_id) {
                return Err(MenuError::ValidationError(format!(
                    "{} listed twice",
                    line.ingredient_id
                )));
            }
        }

        Ok(Self {
            id,
            name,
            description,
            price: params.price,
            ingredients: params.ingredients,
        })
    }

    /// Every ingredient in the recipe must already exist in the ledger.
    async fn on_create(&mut self, stock: &StockClient) -> Result<(), Self::Error> {
        for line in &self.ingredients {
            if stock.get(line.ingredient_id).await?.is_none() {
                return Err(MenuError::IngredientNotFound(line.ingredient_id.to_string()));
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &StockClient) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = validation::preferences(Some(&description))
                .map_err(MenuError::ValidationError)?;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DishAction,
        _ctx: &StockClient,
    ) -> Result<DishActionResult, Self::Error> {
        match action {
            DishAction::Requirements(0) => Err(MenuError::ValidationError(
                "quantity must be positive".to_string(),
            )),
            DishAction::Requirements(quantity) => self
                .requirements_for(quantity)
                .map(DishActionResult::Requirements)
                .ok_or_else(|| {
                    MenuError::ValidationError(format!(
                        "{quantity} portions of {} exceed the ingredient amount limit",
                        self.name
                    ))
                }),
        }
    }

    async fn handle_store_action(
        _store: &mut EntityStore<Self>,
        action: NoAction,
        _ctx: &StockClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

fn check_price(price: Decimal) -> Result<(), MenuError> {
    if price < Decimal::ZERO {
        return Err(MenuError::ValidationError(
            "price must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishIngredient, IngredientId};
    use rust_decimal_macros::dec;

    fn pasta(ingredients: Vec<DishIngredient>) -> DishCreate {
        DishCreate {
            name: "Pasta".into(),
            description: Some("Fresh tagliatelle".into()),
            price: dec!(12.50),
            ingredients,
        }
    }

    #[test]
    fn test_dish_needs_positive_quantities() {
        let err = Dish::from_create_params(
            DishId(1),
            pasta(vec![DishIngredient::new(IngredientId(1), dec!(0))]),
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::ValidationError(_)));

        let err = Dish::from_create_params(DishId(1), pasta(vec![])).unwrap_err();
        assert!(matches!(err, MenuError::ValidationError(_)));
    }

    #[test]
    fn test_dish_rejects_repeated_ingredient() {
        let err = Dish::from_create_params(
            DishId(1),
            pasta(vec![
                DishIngredient::new(IngredientId(1), dec!(1)),
                DishIngredient::new(IngredientId(1), dec!(2)),
            ]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MenuError::ValidationError("ingredient_1 listed twice".into())
        );
    }

    #[tokio::test]
    async fn test_oversized_portion_count_is_rejected_and_catalog_keeps_running() {
        use crate::model::Ingredient;
        use actor_framework::mock::MockClient;
        use actor_framework::ResourceActor;

        let mut stock = MockClient::<Ingredient>::new();
        stock.expect_get(IngredientId(1)).return_ok(Some(Ingredient::new(
            IngredientId(1),
            "Flour",
            dec!(1),
        )));
        let (actor, client) = ResourceActor::<Dish>::new(8);
        tokio::spawn(actor.run(StockClient::new(stock.client())));

        let id = client
            .create(DishCreate {
                name: "Flatbread".into(),
                description: None,
                price: dec!(4),
                ingredients: vec![DishIngredient::new(IngredientId(1), Decimal::MAX)],
            })
            .await
            .unwrap();

        let err = client
            .perform_action(id, DishAction::Requirements(2))
            .await
            .unwrap_err()
            .downcast_entity::<MenuError>()
            .unwrap();
        assert!(matches!(err, MenuError::ValidationError(_)));

        assert_eq!(client.list().await.unwrap().len(), 1);
        assert_eq!(
            client
                .perform_action(id, DishAction::Requirements(1))
                .await
                .unwrap(),
            DishActionResult::Requirements(vec![crate::model::Requirement::new(
                IngredientId(1),
                Decimal::MAX,
            )])
        );
        stock.verify();
    }

    #[test]
    fn test_dish_rejects_negative_price() {
        let mut params = pasta(vec![DishIngredient::new(IngredientId(1), dec!(1))]);
        params.price = dec!(-0.01);
        assert!(Dish::from_create_params(DishId(1), params).is_err());
    }
}
