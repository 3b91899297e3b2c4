//! # Menu Client
//!
//! High-level API for the menu catalog actor, plus the stock-aware
//! [`available_dishes`](MenuClient::available_dishes) view.
use crate::auth::{require_admin, Role};
use crate::clients::StockClient;
use crate::menu_actor::{DishAction, DishActionResult, MenuError};
use crate::model::{Dish, DishCreate, DishId, DishUpdate, Requirement};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Client for interacting with the menu catalog actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Dish>,
    stock: StockClient,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Dish>, stock: StockClient) -> Self {
        Self { inner, stock }
    }
}

#[async_trait]
impl ActorClient<Dish> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<MenuError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::DishNotFound(id),
            Err(other) => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn create_dish(&self, role: Role, params: DishCreate) -> Result<DishId, MenuError> {
        require_admin(role, "create dishes")?;
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes price and description. The recipe cannot be edited.
    #[instrument(skip(self))]
    pub async fn update_dish(
        &self,
        role: Role,
        id: DishId,
        update: DishUpdate,
    ) -> Result<Dish, MenuError> {
        require_admin(role, "update dishes")?;
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Ingredient amounts for `quantity` portions of a dish.
    ///
    /// Fails with [`MenuError::DishNotFound`] when the dish does not exist.
    #[instrument(skip(self))]
    pub async fn requirements_for(
        &self,
        dish_id: DishId,
        quantity: u32,
    ) -> Result<Vec<Requirement>, MenuError> {
        match self
            .inner
            .perform_action(dish_id, DishAction::Requirements(quantity))
            .await
            .map_err(Self::map_error)?
        {
            DishActionResult::Requirements(reqs) => Ok(reqs),
        }
    }

    /// Dishes for which one portion can be made from the stock on hand right now.
    ///
    /// A snapshot: stock may move before an order is placed, and the debit is checked
    /// again at commit.
    #[instrument(skip(self))]
    pub async fn available_dishes(&self) -> Result<Vec<Dish>, MenuError> {
        let levels: HashMap<_, _> = self
            .stock
            .list()
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient.stock))
            .collect();

        let dishes = self.list().await?;
        let total = dishes.len();
        let available: Vec<Dish> = dishes
            .into_iter()
            .filter(|dish| {
                dish.ingredients.iter().all(|line| {
                    levels
                        .get(&line.ingredient_id)
                        .is_some_and(|stock| *stock >= line.quantity)
                })
            })
            .collect();
        debug!(total, available = available.len(), "Menu filtered by stock");
        Ok(available)
    }
}
