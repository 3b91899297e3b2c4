//! # Kage Floor
//!
//! The floor of a restaurant as a set of resource actors: parties are seated at free
//! tables, orders are committed against live ingredient stock, and every change is
//! pushed to the connected displays.
//!
//! ## Architecture
//!
//! Each stateful component is a `ResourceActor` from the `actor-framework` crate:
//! one Tokio task that owns its store and handles one request at a time. That
//! sequential handling is what makes a stock debit or a table claim atomic.
//!
//! | Component | Entity | Client |
//! |-----------|--------|--------|
//! | Stock ledger ([`stock_actor`]) | [`Ingredient`](model::Ingredient) | [`StockClient`](clients::StockClient) |
//! | Menu catalog ([`menu_actor`]) | [`Dish`](model::Dish) | [`MenuClient`](clients::MenuClient) |
//! | Table registry ([`table_actor`]) | [`Table`](model::Table) | [`TableClient`](clients::TableClient) |
//! | Arrival assigner ([`arrival_actor`]) | [`Arrival`](model::Arrival) | [`ArrivalClient`](clients::ArrivalClient) |
//! | Order fulfillment ([`order_actor`]) | [`Order`](model::Order) | [`OrderClient`](clients::OrderClient) |
//!
//! Committed changes are published on the [`events::EventBus`] and fanned out to
//! displays by the [`broadcast::BroadcastHub`]. [`lifecycle::FloorSystem`] builds and
//! wires all of it.
//!
//! ## Errors
//!
//! Every component has its own error enum; all of them implement
//! [`error::Classify`] so a request layer can map them to a status.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod arrival_actor;
pub mod auth;
pub mod broadcast;
pub mod clients;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod stock_actor;
pub mod table_actor;
pub mod validation;
