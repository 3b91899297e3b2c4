/// A committed order and its lines.
use super::{ArrivalId, DishId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Kitchen stages, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Sent,
    InPreparation,
    Ready,
    Served,
}

impl OrderStatus {
    /// Position in the kitchen flow, `0` for pending through `4` for served.
    pub fn stage(&self) -> usize {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Sent => 1,
            OrderStatus::InPreparation => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Served => 4,
        }
    }

    pub fn is_forward_of(&self, current: OrderStatus) -> bool {
        self.stage() > current.stage()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Sent => "sent",
            OrderStatus::InPreparation => "in_preparation",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish_id: DishId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(dish_id: DishId, quantity: u32) -> Self {
        Self { dish_id, quantity }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub arrival_id: ArrivalId,
    pub station: String,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub arrival_id: ArrivalId,
    pub station: String,
    pub notes: Option<String>,
    pub lines: Vec<OrderLine>,
}

/// One row of the kitchen tracking board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTracking {
    pub id: OrderId,
    /// `None` when the arrival or its table can no longer be read.
    pub table: Option<String>,
    /// Labels such as `2x Pasta`.
    pub items: Vec<String>,
    pub status: usize,
    /// Arrival time, `HH:MM`.
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_stages_are_ordered() {
        assert_eq!(OrderStatus::Pending.stage(), 0);
        assert_eq!(OrderStatus::Served.stage(), 4);
        assert!(OrderStatus::Ready.is_forward_of(OrderStatus::Sent));
        assert!(!OrderStatus::Pending.is_forward_of(OrderStatus::Served));
        assert!(!OrderStatus::Sent.is_forward_of(OrderStatus::Sent));
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&OrderStatus::InPreparation).unwrap();
        assert_eq!(json, "\"in_preparation\"");
        let parsed: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(parsed, OrderStatus::Ready);
    }
}
