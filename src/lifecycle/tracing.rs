//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown with the final store size
//! - **Entity operations**: every request at `debug`, committed changes at `info`,
//!   rejected ones at `warn`, each tagged with `entity_type`
//! - **Clients**: one span per call (`#[instrument]`)
//! - **Events**: handler failures and dropped displays at `warn`
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=kage_floor::broadcast=debug,info cargo run
//! ```
//!
//! With `RUST_LOG=info`, seating a party and placing an order reads like:
//!
//! ```text
//! INFO create_arrival: Party seated arrival=arrival_1 table=table_1 party=2
//! INFO create_arrival: Created entity_type="Arrival" id=arrival_1 size=1
//! INFO create_order: StoreAction ok entity_type="Ingredient"
//! INFO create_order: Order committed order=order_1 arrival=arrival_1 lines=2
//! INFO create_order: Order created order_id=order_1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type says which actor logged
        .compact()
        .init();
}
