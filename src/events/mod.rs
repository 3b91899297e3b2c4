//! # Event Bus
//!
//! In-process publish/subscribe for domain events. The bus is an explicit value
//! built by [`FloorSystem`](crate::lifecycle::FloorSystem) and cloned into the
//! clients that publish; there is no process-wide registry.
//!
//! ```text
//! TableClient / ArrivalClient / OrderClient
//!        │ emit (never blocks, never fails)
//!        └── EventBus
//!               ├── worker ──► handler A   (own task, events in emit order)
//!               └── worker ──► handler B
//! ```

pub mod bus;
pub mod event;

pub use bus::*;
pub use event::*;
