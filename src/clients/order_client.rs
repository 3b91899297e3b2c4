//! # Order Client
//!
//! Places orders, moves them through the kitchen, and assembles the tracking
//! board. Publishes `order_created` and `order_status_changed` after the change
//! commits; a rejected request publishes nothing.
use crate::clients::{ArrivalClient, MenuClient, TableClient};
use crate::events::{DomainEvent, EventBus};
use crate::model::{
    Arrival, ArrivalId, DishId, Order, OrderCreate, OrderId, OrderStatus, OrderTracking, TableId,
};
use crate::order_actor::{OrderAction, OrderError, OrderStoreAction};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Shown on the tracking board when the arrival can no longer be read.
const UNKNOWN_TIME: &str = "??:??";

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    bus: EventBus,
    arrivals: ArrivalClient,
    tables: TableClient,
    menu: MenuClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        bus: EventBus,
        arrivals: ArrivalClient,
        tables: TableClient,
        menu: MenuClient,
    ) -> Self {
        Self {
            inner,
            bus,
            arrivals,
            tables,
            menu,
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Commits an order and its stock debit as one unit.
    #[instrument(skip(self, params), fields(arrival = %params.arrival_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        let arrival_id = params.arrival_id;
        let order_id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%order_id, "Order created");
        self.bus.emit(DomainEvent::OrderCreated {
            order_id,
            arrival_id,
        });
        Ok(order_id)
    }

    /// Fails with [`OrderError::NotFound`] when the order does not exist.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let order = self
            .inner
            .perform_action(id, OrderAction::ChangeStatus(status))
            .await
            .map_err(Self::map_error)?;
        self.bus.emit(DomainEvent::OrderStatusChanged {
            order_id: order.id,
            status: order.status,
        });
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn orders_for_arrival(&self, arrival_id: ArrivalId) -> Result<Vec<Order>, OrderError> {
        self.inner
            .perform_store_action(OrderStoreAction::ByArrival(arrival_id))
            .await
            .map_err(Self::map_error)
    }

    /// One row per order: table name, item labels, status stage and arrival time.
    ///
    /// Reads through order -> arrival -> table. A missing arrival or table shows as
    /// unknown rather than failing the whole board.
    #[instrument(skip(self))]
    pub async fn tracking(&self) -> Result<Vec<OrderTracking>, OrderError> {
        let orders = self.list().await?;
        let dish_names: HashMap<DishId, String> = self
            .menu
            .list()
            .await?
            .into_iter()
            .map(|dish| (dish.id, dish.name))
            .collect();

        let mut arrivals: HashMap<ArrivalId, Option<Arrival>> = HashMap::new();
        let mut table_names: HashMap<TableId, Option<String>> = HashMap::new();
        let mut rows = Vec::with_capacity(orders.len());

        for order in orders {
            if !arrivals.contains_key(&order.arrival_id) {
                let arrival = self.arrivals.get(order.arrival_id).await?;
                arrivals.insert(order.arrival_id, arrival);
            }
            let arrival = arrivals.get(&order.arrival_id).cloned().flatten();

            let table = match &arrival {
                Some(arrival) => {
                    if !table_names.contains_key(&arrival.table_id) {
                        let name = self.table_name(arrival.table_id).await;
                        table_names.insert(arrival.table_id, name);
                    }
                    table_names.get(&arrival.table_id).cloned().flatten()
                }
                None => None,
            };

            let items = order
                .lines
                .iter()
                .map(|line| match dish_names.get(&line.dish_id) {
                    Some(name) => format!("{}x {}", line.quantity, name),
                    None => format!("{}x {}", line.quantity, line.dish_id),
                })
                .collect();

            let time = arrival
                .as_ref()
                .map(|a| a.assigned_at.format("%H:%M").to_string())
                .unwrap_or_else(|| UNKNOWN_TIME.to_string());

            rows.push(OrderTracking {
                id: order.id,
                table,
                items,
                status: order.status.stage(),
                time,
            });
        }
        Ok(rows)
    }

    async fn table_name(&self, id: TableId) -> Option<String> {
        match self.tables.get(id).await {
            Ok(table) => table.map(|t| t.name),
            Err(e) => {
                warn!(table = %id, error = %e, "Could not read table for tracking");
                None
            }
        }
    }
}
