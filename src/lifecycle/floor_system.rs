use super::FloorConfig;
use crate::broadcast::{register_listeners, BroadcastHub};
use crate::clients::{ArrivalClient, MenuClient, OrderClient, StockClient, TableClient};
use crate::events::EventBus;
use crate::order_actor::OrderContext;
use crate::{arrival_actor, menu_actor, order_actor, stock_actor, table_actor};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The running floor: five actors, the event bus, the display hub and the idle
/// sweeper.
///
/// `FloorSystem` is responsible for:
/// - **Wiring**: the bus and hub are built here and handed to whoever publishes;
///   actor dependencies are injected through each actor's `run()` context
///   (Dish -> Stock, Arrival -> Table, Order -> Arrival + Menu + Stock).
/// - **Lifecycle**: spawning every task and stopping them again.
///
/// # Example
///
/// ```ignore
/// let system = FloorSystem::new(FloorConfig::from_env());
/// let mut display = system.hub.connect();
/// let arrival = system.arrival_client.create_arrival(ArrivalCreate::walk_in("Ana", 2)).await?;
/// system.shutdown().await?;
/// ```
pub struct FloorSystem {
    pub stock_client: StockClient,
    pub menu_client: MenuClient,
    pub table_client: TableClient,
    pub arrival_client: ArrivalClient,
    pub order_client: OrderClient,
    pub bus: EventBus,
    pub hub: BroadcastHub,

    sweeper: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl FloorSystem {
    /// Starts every actor. Must be called from within a Tokio runtime.
    pub fn new(config: FloorConfig) -> Self {
        info!(?config, "Starting floor system");

        let bus = EventBus::new();
        let hub = BroadcastHub::new(config.connection_buffer);
        register_listeners(&bus, &hub);

        // 1. Create actors
        let (stock_actor, stock_generic) = stock_actor::new(config.actor_buffer);
        let (menu_actor, menu_generic) = menu_actor::new(config.actor_buffer);
        let (table_actor, table_generic) = table_actor::new(config.actor_buffer);
        let (arrival_actor, arrival_generic) = arrival_actor::new(config.actor_buffer);
        let (order_actor, order_generic) = order_actor::new(config.actor_buffer);

        // 2. Wrap them in domain clients
        let stock_client = StockClient::new(stock_generic);
        let menu_client = MenuClient::new(menu_generic, stock_client.clone());
        let table_client = TableClient::new(table_generic, bus.clone());
        let arrival_client = ArrivalClient::new(arrival_generic, table_client.clone());
        let order_client = OrderClient::new(
            order_generic,
            bus.clone(),
            arrival_client.clone(),
            table_client.clone(),
            menu_client.clone(),
        );

        // 3. Start actors with injected context
        let order_context = OrderContext {
            arrivals: arrival_client.clone(),
            menu: menu_client.clone(),
            stock: stock_client.clone(),
            policy: config.order_status_policy,
        };
        let mut handles = vec![
            tokio::spawn(stock_actor.run(())),
            tokio::spawn(menu_actor.run(stock_client.clone())),
            tokio::spawn(table_actor.run(())),
            tokio::spawn(arrival_actor.run(table_client.clone())),
            tokio::spawn(order_actor.run(order_context)),
        ];

        let sweeper = CancellationToken::new();
        handles.push(tokio::spawn(hub.clone().run_idle_sweeper(
            config.sweep_interval,
            config.idle_timeout,
            sweeper.clone(),
        )));

        Self {
            stock_client,
            menu_client,
            table_client,
            arrival_client,
            order_client,
            bus,
            hub,
            sweeper,
            handles,
        }
    }

    /// Stops the sweeper, drops every client so the actors drain their mailboxes and
    /// exit, then waits for all tasks.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down floor system...");
        self.sweeper.cancel();

        drop(self.order_client);
        drop(self.arrival_client);
        drop(self.table_client);
        drop(self.menu_client);
        drop(self.stock_client);
        drop(self.bus);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Task failed");
                return Err(e);
            }
        }

        info!(displays = self.hub.connection_count(), "Floor system shutdown complete");
        Ok(())
    }
}
