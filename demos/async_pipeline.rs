//! An order pipeline that mixes sync validation, async lookups, streams and
//! spawned work without ever leaving the Outcome chain.
//!
//! Run with: cargo run --example async_pipeline --features async

use std::time::Duration;

use futures::channel::mpsc;
use tideway::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum OrderError {
    Invalid(String),
    Missing(u32),
    NoQuote,
    Worker(String),
}

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    quantity: u32,
}

fn parse_order(raw: &str) -> Outcome<Order, OrderError> {
    let mut parts = raw.split(':');
    let id = parts.next().and_then(|s| s.parse::<u32>().ok());
    let quantity = parts.next().and_then(|s| s.parse::<u32>().ok());

    Outcome::from_option(id, OrderError::Invalid(raw.to_string()))
        .zip_with(
            Outcome::from_option(quantity, OrderError::Invalid(raw.to_string())),
            |id, quantity| Order { id, quantity },
        )
}

async fn load_stock(id: u32) -> Result<u32, OrderError> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match id {
        1 => Ok(5),
        2 => Ok(100),
        other => Err(OrderError::Missing(other)),
    }
}

/// A quote feed that pushes prices; only the first one is used.
fn quote_feed(id: u32) -> mpsc::UnboundedReceiver<Result<u32, OrderError>> {
    let (tx, rx) = mpsc::unbounded();
    tokio::spawn(async move {
        for price in [id * 100, id * 101, id * 102] {
            if tx.unbounded_send(Ok(price)).is_err() {
                println!("  quote feed {}: subscriber gone", id);
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    });
    rx
}

fn price_order(raw: &str) -> AsyncOutcome<u32, OrderError> {
    parse_order(raw)
        .flat_map_future(|order| async move {
            let stock = load_stock(order.id).await?;
            if stock >= order.quantity {
                Ok::<_, OrderError>(order)
            } else {
                Err(OrderError::Invalid(format!("only {} in stock", stock)))
            }
        })
        .chain(|order| {
            AsyncOutcome::from_stream(quote_feed(order.id), OrderError::NoQuote)
                .map(move |unit| unit * order.quantity)
        })
}

#[tokio::main]
async fn main() {
    println!("=== AsyncOutcome pipeline ===\n");

    for raw in ["1:2", "1:9", "7:1", "bogus"] {
        let total = price_order(raw)
            .fold(|t| format!("total {}", t), |e| format!("rejected: {:?}", e))
            .await;
        println!("{:>6} -> {}", raw, total);
    }

    println!("\n=== Aggregation ===\n");
    let basket = AsyncOutcome::all(vec![price_order("1:1"), price_order("2:3")]).await;
    println!("basket: {:?}", basket);

    println!("\n=== Spawned work ===\n");
    let handle = tokio::spawn(async { load_stock(2).await });
    let stock = AsyncOutcome::from_task(handle, |e| OrderError::Worker(e.to_string()))
        .map(|n| n * 2)
        .await;
    println!("doubled stock: {:?}", stock);

    let crashed = AsyncOutcome::<u32, OrderError>::ok(1)
        .map(|_| -> u32 { panic!("inventory service crashed") })
        .spawn(|e| OrderError::Worker(if e.is_panic() { "panicked".into() } else { "cancelled".into() }))
        .await;
    println!("crashed worker: {:?}", crashed);

    println!("\n=== Back to Result ===\n");
    let as_result: Result<u32, OrderError> = price_order("2:1").into_result().await;
    println!("as Result: {:?}", as_result);
}
