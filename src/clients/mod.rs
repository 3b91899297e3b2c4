//! Domain-specific clients wrapping each actor's `ResourceClient`.
//!
//! The rest of the system never sends raw actor messages; it calls these.

pub mod arrival_client;
pub mod menu_client;
pub mod order_client;
pub mod stock_client;
pub mod table_client;

pub use arrival_client::ArrivalClient;
pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use stock_client::StockClient;
pub use table_client::TableClient;
