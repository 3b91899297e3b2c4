//! Demo run of the floor: seeds a small restaurant, connects one display, seats a
//! party, places an order, walks it through the kitchen and prints what the display
//! saw.

use kage_floor::auth::Role;
use kage_floor::lifecycle::{setup_tracing, FloorConfig, FloorSystem};
use kage_floor::model::{
    ArrivalCreate, DishCreate, DishIngredient, IngredientCreate, OrderCreate, OrderLine,
    OrderStatus, TableCreate, TableStatus,
};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    setup_tracing();

    let system = FloorSystem::new(FloorConfig::from_env());
    let mut display = system.hub.connect();

    // Seed the floor
    let (pasta, salad) = async {
        for (name, capacity) in [("T1", 2), ("T2", 4), ("Patio", 6)] {
            system
                .table_client
                .create_table(Role::Admin, TableCreate {
                    name: name.to_string(),
                    capacity,
                })
                .await?;
        }

        let flour = system
            .stock_client
            .create_ingredient(Role::Admin, IngredientCreate {
                name: "Flour".to_string(),
                stock: Decimal::from(10),
            })
            .await?;
        let tomato = system
            .stock_client
            .create_ingredient(Role::Admin, IngredientCreate {
                name: "Tomato".to_string(),
                stock: Decimal::from(12),
            })
            .await?;

        let pasta = system
            .menu_client
            .create_dish(Role::Admin, DishCreate {
                name: "Pasta".to_string(),
                description: Some("Tagliatelle al pomodoro".to_string()),
                price: Decimal::new(1250, 2),
                ingredients: vec![
                    DishIngredient::new(flour, Decimal::from(2)),
                    DishIngredient::new(tomato, Decimal::from(1)),
                ],
            })
            .await?;
        let salad = system
            .menu_client
            .create_dish(Role::Admin, DishCreate {
                name: "Salad".to_string(),
                description: None,
                price: Decimal::new(800, 2),
                ingredients: vec![DishIngredient::new(tomato, Decimal::from(3))],
            })
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((pasta, salad))
    }
    .instrument(tracing::info_span!("seed"))
    .await?;

    // Service
    let arrival = system
        .arrival_client
        .create_arrival(ArrivalCreate::walk_in("Ana", 2))
        .await?;
    info!(table = %arrival.table_id, "Ana seated");

    let order_id = system
        .order_client
        .create_order(OrderCreate {
            arrival_id: arrival.id,
            station: "kitchen".to_string(),
            notes: Some("no basil".to_string()),
            lines: vec![OrderLine::new(pasta, 2), OrderLine::new(salad, 1)],
        })
        .await?;

    for status in [OrderStatus::Sent, OrderStatus::InPreparation, OrderStatus::Ready] {
        system.order_client.update_order_status(order_id, status).await?;
    }

    let available = system.menu_client.available_dishes().await?;
    info!(dishes = available.len(), "Dishes still available");

    for row in system.order_client.tracking().await? {
        info!(?row, "Tracking");
    }

    system
        .table_client
        .release_table(arrival.table_id, TableStatus::Cleaning)
        .await?;

    // Let the display catch up, then print what it received
    tokio::time::sleep(Duration::from_millis(50)).await;
    while let Some(message) = display.try_recv() {
        println!("{message}");
    }

    system.shutdown().await?;
    Ok(())
}
