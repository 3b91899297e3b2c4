//! Domain types shared by the actors, clients and events.

pub mod arrival;
pub mod dish;
pub mod ingredient;
pub mod order;
pub mod table;

pub use arrival::*;
pub use dish::*;
pub use ingredient::*;
pub use order::*;
pub use table::*;
