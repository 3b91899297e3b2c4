use super::{BroadcastHub, ClientMessage};
use crate::events::{DomainEvent, EventBus, EventHandler, EventKind, HandlerError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Forwards every domain event to all connected displays.
pub struct BroadcastForwarder {
    hub: BroadcastHub,
}

impl BroadcastForwarder {
    pub fn new(hub: BroadcastHub) -> Self {
        Self { hub }
    }
}

#[async_trait]
impl EventHandler for BroadcastForwarder {
    fn name(&self) -> &str {
        "broadcast"
    }

    async fn handle(&self, event: Arc<DomainEvent>) -> Result<(), HandlerError> {
        let message = ClientMessage::from(&*event);
        let delivered = self.hub.broadcast(&message);
        debug!(event = %event.kind(), delivered, "Forwarded to displays");
        Ok(())
    }
}

/// Subscribes the display forwarder to the three floor events.
pub fn register_listeners(bus: &EventBus, hub: &BroadcastHub) {
    bus.subscribe_many(
        &EventKind::ALL,
        Arc::new(BroadcastForwarder::new(hub.clone())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, OrderStatus};

    #[tokio::test]
    async fn test_bus_events_reach_displays() {
        let bus = EventBus::new();
        let hub = BroadcastHub::new(8);
        register_listeners(&bus, &hub);
        let mut display = hub.connect();

        bus.emit(DomainEvent::OrderStatusChanged {
            order_id: OrderId(2),
            status: OrderStatus::Ready,
        });

        let received = display.recv().await.unwrap();
        let parsed: ClientMessage = serde_json::from_str(&received).unwrap();
        assert_eq!(
            parsed,
            ClientMessage::OrderStatusChanged {
                order_id: OrderId(2),
                status: OrderStatus::Ready,
            }
        );
    }
}
