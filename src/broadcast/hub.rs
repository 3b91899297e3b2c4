use super::ClientMessage;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub type ConnectionId = u64;

struct Slot {
    sender: mpsc::Sender<Arc<str>>,
    /// Milliseconds since the hub's epoch.
    last_seen: Arc<AtomicU64>,
}

struct HubInner {
    connections: DashMap<ConnectionId, Slot>,
    next_id: AtomicU64,
    buffer: usize,
    epoch: Instant,
}

impl HubInner {
    fn now_millis(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// The set of live display connections.
///
/// Each connection has a bounded outbound queue. Delivery never waits: a full queue
/// marks the consumer as slow and a closed one as gone, and either way the
/// connection is removed while the others still receive the message. Cloning shares
/// the same set.
#[derive(Clone)]
pub struct BroadcastHub {
    inner: Arc<HubInner>,
}

/// The receiving end handed to one display.
pub struct Connection {
    id: ConnectionId,
    receiver: mpsc::Receiver<Arc<str>>,
    last_seen: Arc<AtomicU64>,
    hub: Arc<HubInner>,
}

impl Connection {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Next serialized envelope. `None` once the hub dropped this connection.
    pub async fn recv(&mut self) -> Option<Arc<str>> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Arc<str>> {
        self.receiver.try_recv().ok()
    }

    /// Marks the connection as alive.
    pub fn keepalive(&self) {
        self.last_seen
            .store(self.hub.now_millis(), Ordering::Relaxed);
    }
}

impl BroadcastHub {
    /// `buffer` is the per-connection queue length.
    pub fn new(buffer: usize) -> Self {
        Self {
            inner: Arc::new(HubInner {
                connections: DashMap::new(),
                next_id: AtomicU64::new(1),
                buffer: buffer.max(1),
                epoch: Instant::now(),
            }),
        }
    }

    pub fn connect(&self) -> Connection {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::channel(self.inner.buffer);
        let last_seen = Arc::new(AtomicU64::new(self.inner.now_millis()));
        self.inner.connections.insert(
            id,
            Slot {
                sender,
                last_seen: Arc::clone(&last_seen),
            },
        );
        info!(connection = id, live = self.inner.connections.len(), "Display connected");
        Connection {
            id,
            receiver,
            last_seen,
            hub: Arc::clone(&self.inner),
        }
    }

    /// Removes a connection. Returns whether it was still registered; calling it
    /// again is harmless.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        let removed = self.inner.connections.remove(&id).is_some();
        if removed {
            info!(connection = id, live = self.inner.connections.len(), "Display disconnected");
        }
        removed
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    /// Delivers `message` to every live connection and returns how many accepted it.
    ///
    /// Slow or closed connections are removed; the caller never sees their failure.
    pub fn broadcast(&self, message: &ClientMessage) -> usize {
        let payload: Arc<str> = match serde_json::to_string(message) {
            Ok(json) => json.into(),
            Err(e) => {
                warn!(error = %e, "Could not serialize broadcast");
                return 0;
            }
        };

        let mut delivered = 0;
        let mut dropped = Vec::new();
        for entry in self.inner.connections.iter() {
            match entry.sender.try_send(Arc::clone(&payload)) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(connection = *entry.key(), "Display too slow, dropping connection");
                    dropped.push(*entry.key());
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(connection = *entry.key(), "Display gone");
                    dropped.push(*entry.key());
                }
            }
        }

        // Removal must wait until the iterator's shard locks are released.
        for id in dropped {
            self.inner.connections.remove(&id);
        }
        debug!(delivered, live = self.inner.connections.len(), "Broadcast");
        delivered
    }

    /// Removes connections whose last keepalive is older than `max_idle`.
    pub fn reap_idle(&self, max_idle: Duration) -> Vec<ConnectionId> {
        let now = self.inner.now_millis();
        let max_idle = max_idle.as_millis() as u64;
        let candidates: Vec<ConnectionId> = self
            .inner
            .connections
            .iter()
            .filter(|entry| is_idle(&entry.last_seen, now, max_idle))
            .map(|entry| *entry.key())
            .collect();

        candidates
            .into_iter()
            .filter(|id| self.remove_if_idle(*id, now, max_idle))
            .collect()
    }

    /// Re-checks under the shard lock, so a keepalive that landed after the scan
    /// keeps the connection.
    fn remove_if_idle(&self, id: ConnectionId, now: u64, max_idle: u64) -> bool {
        let removed = self
            .inner
            .connections
            .remove_if(&id, |_, slot| is_idle(&slot.last_seen, now, max_idle))
            .is_some();
        if removed {
            info!(connection = id, "Idle display dropped");
        }
        removed
    }

    /// Runs [`reap_idle`](Self::reap_idle) every `every` until `cancel` fires.
    pub async fn run_idle_sweeper(
        self,
        every: Duration,
        max_idle: Duration,
        cancel: CancellationToken,
    ) {
        let mut interval = tokio::time::interval(every);
        interval.tick().await; // skip immediate
        info!(?every, ?max_idle, "Idle sweeper started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = interval.tick() => {
                    let reaped = self.reap_idle(max_idle);
                    if !reaped.is_empty() {
                        debug!(count = reaped.len(), "Swept idle displays");
                    }
                }
            }
        }
        info!("Idle sweeper stopped");
    }
}

fn is_idle(last_seen: &AtomicU64, now: u64, max_idle: u64) -> bool {
    now.saturating_sub(last_seen.load(Ordering::Relaxed)) > max_idle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArrivalId, OrderId};

    fn created(n: u32) -> ClientMessage {
        ClientMessage::OrderCreated {
            order_id: OrderId(n),
            arrival_id: ArrivalId(1),
        }
    }

    #[tokio::test]
    async fn test_every_connection_receives_broadcast() {
        let hub = BroadcastHub::new(8);
        let mut a = hub.connect();
        let mut b = hub.connect();

        assert_eq!(hub.broadcast(&created(1)), 2);

        let expected = r#"{"event":"order_created","order_id":1,"arrival_id":1}"#;
        assert_eq!(&*a.recv().await.unwrap(), expected);
        assert_eq!(&*b.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_closed_connection_is_removed() {
        let hub = BroadcastHub::new(8);
        let gone = hub.connect();
        let mut live = hub.connect();
        drop(gone);

        assert_eq!(hub.broadcast(&created(1)), 1);
        assert_eq!(hub.connection_count(), 1);
        assert!(live.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent() {
        let hub = BroadcastHub::new(8);
        let conn = hub.connect();

        assert!(hub.disconnect(conn.id()));
        assert!(!hub.disconnect(conn.id()));
        assert!(!hub.disconnect(999));
        assert_eq!(hub.connection_count(), 0);
    }

    #[tokio::test]
    async fn test_reap_idle_spares_recent_keepalive() {
        let hub = BroadcastHub::new(8);
        let quiet = hub.connect();
        let chatty = hub.connect();

        tokio::time::sleep(Duration::from_millis(60)).await;
        chatty.keepalive();

        assert_eq!(hub.reap_idle(Duration::from_millis(30)), vec![quiet.id()]);
        assert_eq!(hub.connection_count(), 1);
    }

    #[tokio::test]
    async fn test_keepalive_after_scan_keeps_connection() {
        let hub = BroadcastHub::new(8);
        let conn = hub.connect();

        tokio::time::sleep(Duration::from_millis(60)).await;
        let scanned_at = hub.inner.now_millis();
        assert!(is_idle(&conn.last_seen, scanned_at, 30));

        // Lands between the scan and the removal.
        conn.keepalive();
        assert!(!hub.remove_if_idle(conn.id(), scanned_at, 30));
        assert_eq!(hub.connection_count(), 1);
    }

    #[tokio::test]
    async fn test_sweeper_stops_on_cancel() {
        let hub = BroadcastHub::new(8);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(hub.clone().run_idle_sweeper(
            Duration::from_millis(10),
            Duration::from_secs(60),
            cancel.clone(),
        ));
        let _conn = hub.connect();

        tokio::time::sleep(Duration::from_millis(35)).await;
        assert_eq!(hub.connection_count(), 1);
        cancel.cancel();
        handle.await.unwrap();
    }
}
