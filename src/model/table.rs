/// A table on the floor.
///
/// Status moves free -> occupied on claim, occupied -> free or cleaning on release,
/// and anything -> anything through an admin override.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Tables.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TableId(pub u32);

impl From<u32> for TableId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Free,
    Reserved,
    Occupied,
    Cleaning,
}

impl Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TableStatus::Free => "free",
            TableStatus::Reserved => "reserved",
            TableStatus::Occupied => "occupied",
            TableStatus::Cleaning => "cleaning",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: u32,
    pub status: TableStatus,
}

impl Table {
    pub fn new(id: TableId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            status: TableStatus::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == TableStatus::Free
    }
}

#[derive(Debug, Clone)]
pub struct TableCreate {
    pub name: String,
    pub capacity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_serializes_status_lowercase() {
        let mut table = Table::new(TableId(3), "Patio 1", 4);
        table.status = TableStatus::Occupied;
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["status"], "occupied");
        assert_eq!(json["id"], 3);
        assert_eq!(json["capacity"], 4);
    }
}
