//! Demonstrates tracing integration with AsyncOutcome
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::time::Duration;

use futures::stream;
use tideway::{AsyncOutcome, Outcome};

#[tokio::main]
async fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // A rejected lookup lands in Fail and is traced at the bridge
    let price = lookup_price("SKU-404")
        .map(|cents| cents as f64 / 100.0)
        .instrument(tracing::info_span!("price", sku = "SKU-404"))
        .await;

    match price {
        Outcome::Ok(p) => tracing::info!("Price: {:.2}", p),
        Outcome::Fail(e) => tracing::warn!("Lookup failed: {}", e),
    }

    // An empty stream falls back to the supplied error
    let reading = AsyncOutcome::from_stream(
        stream::empty::<Result<f32, String>>(),
        "sensor produced no readings".to_string(),
    )
    .instrument(tracing::info_span!("sensor"))
    .await;
    tracing::info!("Sensor outcome: {:?}", reading);

    // Aggregation stops at the first Fail
    let all = AsyncOutcome::all(vec![
        lookup_price("SKU-1"),
        lookup_price("SKU-404"),
        lookup_price("SKU-2"),
    ])
    .instrument(tracing::info_span!("basket"))
    .await;
    tracing::info!("Basket outcome: {:?}", all);

    // A panicking step is caught and logged
    let guarded = AsyncOutcome::<u32, String>::ok(1)
        .map(|_| -> u32 { panic!("pricing table corrupted") })
        .catch_panic(|p| p.to_string())
        .await;
    tracing::info!("Guarded outcome: {:?}", guarded);
}

fn lookup_price(sku: &'static str) -> AsyncOutcome<u32, String> {
    AsyncOutcome::from_future(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        match sku {
            "SKU-1" => Ok(1299),
            "SKU-2" => Ok(450),
            other => Err(format!("no price for {}", other)),
        }
    })
}
