//! # Broadcast Channel
//!
//! Fans domain events out to every connected display (waiter tablets, kitchen
//! screens, floor-plan boards).
//!
//! - [`message`] - the JSON envelopes displays receive
//! - [`hub`] - the live connection set and best-effort delivery
//! - [`listeners`] - the event bus handler that turns events into envelopes

pub mod hub;
pub mod listeners;
pub mod message;

pub use hub::*;
pub use listeners::*;
pub use message::*;
