//! # Arrival Assigner Actor
//!
//! Seats a party: validates the request, claims a table through the table registry
//! and records the [`Arrival`] bound to it. The claim happens in `on_create`, so a
//! failed claim leaves no arrival behind, and invalid input never reaches the
//! registry.
//!
//! Arrivals are never modified once recorded.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Arrival;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new arrival actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Arrival>, ResourceClient<Arrival>) {
    ResourceActor::new(buffer)
}
