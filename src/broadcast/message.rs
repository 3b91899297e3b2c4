use crate::events::DomainEvent;
use crate::model::{ArrivalId, OrderId, OrderStatus, Table};
use serde::{Deserialize, Serialize};

/// Envelope sent to displays, `{"event": "...", ...payload}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientMessage {
    UpdateTables {
        tables: Vec<Table>,
    },
    OrderCreated {
        order_id: OrderId,
        arrival_id: ArrivalId,
    },
    OrderStatusChanged {
        order_id: OrderId,
        status: OrderStatus,
    },
}

impl From<&DomainEvent> for ClientMessage {
    fn from(event: &DomainEvent) -> Self {
        match event {
            DomainEvent::TablesChanged { tables } => ClientMessage::UpdateTables {
                tables: tables.clone(),
            },
            DomainEvent::OrderCreated {
                order_id,
                arrival_id,
            } => ClientMessage::OrderCreated {
                order_id: *order_id,
                arrival_id: *arrival_id,
            },
            DomainEvent::OrderStatusChanged { order_id, status } => {
                ClientMessage::OrderStatusChanged {
                    order_id: *order_id,
                    status: *status,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableId, TableStatus};
    use serde_json::json;

    #[test]
    fn test_envelopes_on_the_wire() {
        let created = ClientMessage::OrderCreated {
            order_id: OrderId(7),
            arrival_id: ArrivalId(3),
        };
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({"event": "order_created", "order_id": 7, "arrival_id": 3})
        );

        let changed = ClientMessage::OrderStatusChanged {
            order_id: OrderId(7),
            status: OrderStatus::InPreparation,
        };
        assert_eq!(
            serde_json::to_value(&changed).unwrap(),
            json!({"event": "order_status_changed", "order_id": 7, "status": "in_preparation"})
        );

        let mut table = Table::new(TableId(1), "T1", 2);
        table.status = TableStatus::Occupied;
        let tables = ClientMessage::UpdateTables {
            tables: vec![table],
        };
        assert_eq!(
            serde_json::to_value(&tables).unwrap(),
            json!({
                "event": "update_tables",
                "tables": [{"id": 1, "name": "T1", "capacity": 2, "status": "occupied"}]
            })
        );
    }

    #[test]
    fn test_tables_changed_becomes_update_tables() {
        let event = DomainEvent::TablesChanged { tables: vec![] };
        assert_eq!(
            ClientMessage::from(&event),
            ClientMessage::UpdateTables { tables: vec![] }
        );
    }
}
