//! End-to-end scenarios mixing synchronous and asynchronous steps

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tideway::prelude::*;

async fn rejects_after<T>(delay: Duration, error: &'static str) -> Result<T, &'static str> {
    tokio::time::sleep(delay).await;
    Err(error)
}

async fn resolves_after<T>(delay: Duration, value: T) -> Result<T, &'static str> {
    tokio::time::sleep(delay).await;
    Ok(value)
}

#[test]
fn map_then_flat_map_to_string() {
    let outcome = ok::<_, ()>(2)
        .map(|n| n + 1)
        .flat_map(|x| ok(x.to_string()));
    assert_eq!(outcome, Outcome::ok("3".to_string()));
}

#[test]
fn map_on_fail_is_never_invoked() {
    let calls = AtomicUsize::new(0);
    let outcome = fail::<i32, _>("e").map(|x| {
        calls.fetch_add(1, Ordering::SeqCst);
        x + 1
    });
    assert_eq!(outcome, Outcome::fail("e"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rejected_continuation_resolves_to_fail() {
    let outcome = AsyncOutcome::<i32, _>::ok(1)
        .flat_map_async(|_| Outcome::from_future(async { Err::<i32, _>("bad") }))
        .await;
    assert_eq!(outcome, Outcome::fail("bad"));

    let as_result = AsyncOutcome::<i32, _>::ok(1)
        .map_async(|_| async { Err::<i32, _>("bad") })
        .into_result()
        .await;
    assert_eq!(as_result, Err("bad"));
}

#[tokio::test]
async fn all_returns_early_failure_before_slow_item() {
    let slow_resolved = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&slow_resolved);

    let items = vec![
        AsyncOutcome::ok(1),
        AsyncOutcome::from_future(rejects_after(Duration::from_millis(10), "boom")),
        AsyncOutcome::from_future(async move {
            let value = resolves_after(Duration::from_millis(1000), 3).await;
            flag.store(true, Ordering::SeqCst);
            value
        }),
    ];

    let started = Instant::now();
    let outcome = AsyncOutcome::all(items).await;

    assert_eq!(outcome, Outcome::fail("boom"));
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(!slow_resolved.load(Ordering::SeqCst));
}

#[tokio::test]
async fn all_of_nothing_is_ok_empty() {
    let outcome = AsyncOutcome::<u8, String>::all(Vec::new()).await;
    assert_eq!(outcome, Outcome::ok(vec![]));
}

#[test]
fn flat_map_maybe_none_becomes_fail() {
    let outcome = ok(5).flat_map_maybe(|_: i32| None::<i32>, "missing");
    assert_eq!(outcome, Outcome::fail("missing"));
}

#[test]
fn recover_with_wraps_original_error() {
    let outcome: Outcome<i32, String> =
        fail("orig").recover_with(|e| fail(format!("wrapped:{}", e)));
    assert_eq!(outcome, Outcome::fail("wrapped:orig".to_string()));
}

#[tokio::test]
async fn sync_panic_in_continuation_is_captured() {
    let outcome = AsyncOutcome::<i32, String>::ok(1)
        .chain(|_| -> AsyncOutcome<i32, String> { panic!("thrown synchronously") })
        .catch_panic(String::from)
        .await;
    assert_eq!(outcome, Outcome::fail("thrown synchronously".to_string()));
}

#[tokio::test]
async fn mixed_pipeline_reads_top_to_bottom() {
    #[derive(Debug, PartialEq)]
    enum OrderError {
        InvalidId(String),
        NotFound(u32),
        Empty,
    }

    async fn fetch_lines(id: u32) -> Result<Vec<u32>, OrderError> {
        match id {
            1 => Ok(vec![250, 100]),
            2 => Ok(vec![]),
            other => Err(OrderError::NotFound(other)),
        }
    }

    fn total(raw: &str) -> AsyncOutcome<u32, OrderError> {
        Outcome::from(raw.parse::<u32>())
            .map_fail(|e| OrderError::InvalidId(e.to_string()))
            .flat_map_future(fetch_lines)
            .flat_map(|lines| {
                if lines.is_empty() {
                    fail(OrderError::Empty)
                } else {
                    ok(lines.iter().sum::<u32>())
                }
            })
    }

    assert_eq!(total("1").await, Outcome::ok(350));
    assert_eq!(total("2").await, Outcome::fail(OrderError::Empty));
    assert_eq!(total("9").await, Outcome::fail(OrderError::NotFound(9)));
    assert!(matches!(
        total("x").await,
        Outcome::Fail(OrderError::InvalidId(_))
    ));
}

#[tokio::test]
async fn recovery_then_async_fallback() {
    let cache = AsyncOutcome::<String, _>::fail("cache miss");
    let origin = AsyncOutcome::from_future(resolves_after(Duration::from_millis(5), "fresh".to_string()));

    let value = cache
        .or(origin)
        .tap_ok(|v| assert_eq!(v, "fresh"))
        .fold(|v| v.len(), |_| 0)
        .await;
    assert_eq!(value, 5);
}

#[tokio::test]
async fn outcome_chain_survives_task_boundary() {
    let pending = ok::<_, String>(4).flat_map_future(|n| async move {
        tokio::task::yield_now().await;
        Ok(n * n)
    });
    let joined = tokio::spawn(async move { pending.await }).await.unwrap();
    assert_eq!(joined, Outcome::ok(16));
}
