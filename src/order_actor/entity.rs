//! [`ActorEntity`] implementation for [`Order`].

use super::{OrderAction, OrderContext, OrderError, OrderStoreAction};
use crate::model::{IngredientId, Order, OrderCreate, OrderId, OrderStatus, Requirement};
use crate::validation;
use actor_framework::{ActorClient, ActorEntity, EntityStore, NoAction};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = NoAction;
    type Action = OrderAction;
    type ActionResult = Order;
    type StoreAction = OrderStoreAction;
    type StoreActionResult = Vec<Order>;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let station =
            validation::label("station", &params.station).map_err(OrderError::ValidationError)?;
        let notes =
            validation::preferences(params.notes.as_deref()).map_err(OrderError::ValidationError)?;
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one line".to_string(),
            ));
        }
        if let Some(line) = params.lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "quantity of {} must be positive",
                line.dish_id
            )));
        }

        Ok(Self {
            id,
            arrival_id: params.arrival_id,
            station,
            notes,
            status: OrderStatus::Pending,
            lines: params.lines,
            created_at: Utc::now(),
        })
    }

    /// Resolve, aggregate, then debit once. Any error before the debit leaves stock alone;
    /// the debit itself is all-or-nothing.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        if ctx.arrivals.get(self.arrival_id).await?.is_none() {
            return Err(OrderError::ArrivalNotFound(self.arrival_id.to_string()));
        }

        let mut totals: BTreeMap<IngredientId, Decimal> = BTreeMap::new();
        for line in &self.lines {
            for req in ctx.menu.requirements_for(line.dish_id, line.quantity).await? {
                let total = totals.entry(req.ingredient_id).or_default();
                *total = total.checked_add(req.amount).ok_or_else(|| {
                    OrderError::ValidationError(format!(
                        "order needs more {} than can be counted",
                        req.ingredient_id
                    ))
                })?;
            }
        }

        let requirements: Vec<Requirement> = totals
            .into_iter()
            .map(|(id, amount)| Requirement::new(id, amount))
            .collect();
        ctx.stock.check_and_debit(requirements).await?;

        info!(order = %self.id, arrival = %self.arrival_id, lines = self.lines.len(), "Order committed");
        Ok(())
    }

    async fn on_update(&mut self, update: NoAction, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::ChangeStatus(status) => {
                if !ctx.policy.allows(self.status, status) {
                    return Err(OrderError::InvalidTransition {
                        order: self.id,
                        from: self.status,
                        to: status,
                    });
                }
                info!(order = %self.id, from = %self.status, to = %status, "Status changed");
                self.status = status;
                Ok(self.clone())
            }
        }
    }

    async fn handle_store_action(
        store: &mut EntityStore<Self>,
        action: OrderStoreAction,
        _ctx: &OrderContext,
    ) -> Result<Vec<Order>, Self::Error> {
        match action {
            OrderStoreAction::ByArrival(arrival_id) => Ok(store
                .values()
                .filter(|order| order.arrival_id == arrival_id)
                .cloned()
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrivalId, DishId, OrderLine};

    fn params(lines: Vec<OrderLine>) -> OrderCreate {
        OrderCreate {
            arrival_id: ArrivalId(1),
            station: "kitchen".into(),
            notes: None,
            lines,
        }
    }

    #[test]
    fn test_new_orders_start_pending() {
        let order =
            Order::from_create_params(OrderId(1), params(vec![OrderLine::new(DishId(1), 2)]))
                .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_order_shape_is_validated() {
        assert!(matches!(
            Order::from_create_params(OrderId(1), params(vec![])),
            Err(OrderError::ValidationError(_))
        ));
        assert!(matches!(
            Order::from_create_params(OrderId(1), params(vec![OrderLine::new(DishId(1), 0)])),
            Err(OrderError::ValidationError(_))
        ));

        let mut blank_station = params(vec![OrderLine::new(DishId(1), 1)]);
        blank_station.station = "  ".into();
        assert!(matches!(
            Order::from_create_params(OrderId(1), blank_station),
            Err(OrderError::ValidationError(_))
        ));
    }
}
