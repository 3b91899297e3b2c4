use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};

/// Which status changes an order accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatusPolicy {
    /// Any status, including going back.
    #[default]
    Permissive,
    /// Only strictly forward: pending -> sent -> in_preparation -> ready -> served.
    Strict,
}

impl OrderStatusPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            OrderStatusPolicy::Permissive => true,
            OrderStatusPolicy::Strict => to.is_forward_of(from),
        }
    }
}
