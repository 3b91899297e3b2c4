use super::{DomainEvent, EventKind};
use async_trait::async_trait;
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Error returned by a handler. Logged by the bus, never seen by the publisher.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Receives the events of the kinds it was subscribed to.
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    /// Label used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    async fn handle(&self, event: Arc<DomainEvent>) -> Result<(), HandlerError>;
}

struct FnHandler<F> {
    name: &'static str,
    f: F,
}

#[async_trait]
impl<F, Fut> EventHandler for FnHandler<F>
where
    F: Fn(Arc<DomainEvent>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    async fn handle(&self, event: Arc<DomainEvent>) -> Result<(), HandlerError> {
        (self.f)(event).await
    }
}

/// Wraps an async closure as a handler.
pub fn handler_fn<F, Fut>(name: &'static str, f: F) -> Arc<dyn EventHandler>
where
    F: Fn(Arc<DomainEvent>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    Arc::new(FnHandler { name, f })
}

/// Publish/subscribe router. Cloning shares the subscriber table.
///
/// Every subscription owns a worker task that runs its handler on each event in the
/// order the events were emitted. Handlers never block the publisher or each other.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<DashMap<EventKind, Vec<mpsc::UnboundedSender<Arc<DomainEvent>>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `kind`. Several handlers may share a kind; each is
    /// handed events in registration order.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn subscribe(&self, kind: EventKind, handler: Arc<dyn EventHandler>) {
        self.subscribe_many(&[kind], handler);
    }

    /// Registers one handler for several kinds. A single worker serves them all, so
    /// the handler sees events of different kinds in the order they were emitted.
    pub fn subscribe_many(&self, kinds: &[EventKind], handler: Arc<dyn EventHandler>) {
        let (tx, rx) = mpsc::unbounded_channel();
        debug!(?kinds, handler = handler.name(), "Subscribed");
        tokio::spawn(run_handler(handler, rx));
        for kind in kinds {
            self.subscribers.entry(*kind).or_default().push(tx.clone());
        }
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, |subs| subs.len())
    }

    /// Hands `event` to every handler subscribed to its kind and returns how many
    /// were scheduled. Never fails and never waits on a handler.
    pub fn emit(&self, event: DomainEvent) -> usize {
        let kind = event.kind();
        let Some(mut subs) = self.subscribers.get_mut(&kind) else {
            debug!(event = %kind, "No subscribers");
            return 0;
        };

        let event = Arc::new(event);
        // A closed worker only happens after its handler panicked; forget it.
        subs.retain(|tx| tx.send(Arc::clone(&event)).is_ok());
        debug!(event = %kind, handlers = subs.len(), "Emitted");
        subs.len()
    }
}

async fn run_handler(
    handler: Arc<dyn EventHandler>,
    mut events: mpsc::UnboundedReceiver<Arc<DomainEvent>>,
) {
    while let Some(event) = events.recv().await {
        let kind = event.kind();
        if let Err(e) = handler.handle(event).await {
            warn!(event = %kind, handler = handler.name(), error = %e, "Event handler failed");
        }
    }
    debug!(handler = handler.name(), "Handler stopped");
}
