/// A seated party, bound to the table it claimed.
use super::TableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArrivalId(pub u32);

impl From<u32> for ArrivalId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ArrivalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arrival_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    pub id: ArrivalId,
    pub customer_name: String,
    pub party_size: u32,
    pub contact: Option<String>,
    pub preferences: Option<String>,
    /// The table asked for at the door, if any.
    pub requested_table: Option<TableId>,
    pub table_id: TableId,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ArrivalCreate {
    pub customer_name: String,
    pub party_size: u32,
    pub contact: Option<String>,
    pub preferences: Option<String>,
    pub table_id: Option<TableId>,
}

impl ArrivalCreate {
    pub fn walk_in(customer_name: impl Into<String>, party_size: u32) -> Self {
        Self {
            customer_name: customer_name.into(),
            party_size,
            ..Default::default()
        }
    }

    pub fn at_table(mut self, table_id: TableId) -> Self {
        self.table_id = Some(table_id);
        self
    }
}
