use crate::model::{ArrivalId, OrderId, OrderStatus, Table};
use serde::Serialize;
use std::fmt;

/// Something that happened on the floor, published after the change committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DomainEvent {
    /// Full table list after any table mutation.
    TablesChanged { tables: Vec<Table> },
    OrderCreated {
        order_id: OrderId,
        arrival_id: ArrivalId,
    },
    OrderStatusChanged {
        order_id: OrderId,
        status: OrderStatus,
    },
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::TablesChanged { .. } => EventKind::TablesChanged,
            DomainEvent::OrderCreated { .. } => EventKind::OrderCreated,
            DomainEvent::OrderStatusChanged { .. } => EventKind::OrderStatusChanged,
        }
    }
}

/// Event name handlers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    TablesChanged,
    OrderCreated,
    OrderStatusChanged,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::TablesChanged,
        EventKind::OrderCreated,
        EventKind::OrderStatusChanged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TablesChanged => "tables_changed",
            EventKind::OrderCreated => "order_created",
            EventKind::OrderStatusChanged => "order_status_changed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
