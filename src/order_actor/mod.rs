//! # Order Fulfillment Actor
//!
//! Commits orders. Creating an order is one transaction driven from `on_create`:
//!
//! 1. the arrival must exist,
//! 2. every line is resolved to ingredient amounts through the menu,
//! 3. amounts are summed per ingredient and debited in a single
//!    [`check_and_debit`](crate::clients::StockClient::check_and_debit).
//!
//! The order is stored only if all three succeed. A failure at any step leaves the
//! ledger and the order store as they were. Because the actor handles one message at
//! a time, order commits are also serialized against each other.
//!
//! Status changes follow the configured [`OrderStatusPolicy`].

pub mod actions;
pub mod entity;
pub mod error;
pub mod policy;

pub use actions::*;
pub use error::*;
pub use policy::*;

use crate::clients::{ArrivalClient, MenuClient, StockClient};
use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Dependencies of the order actor, injected through `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub arrivals: ArrivalClient,
    pub menu: MenuClient,
    pub stock: StockClient,
    pub policy: OrderStatusPolicy,
}

/// Creates a new order actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer)
}
