//! Adapters between [`Outcome`] and futures / streams
//!
//! These are the only places where a `Result`-shaped future or stream is turned
//! into an `Outcome`. The combinators on [`AsyncOutcome`](crate::AsyncOutcome)
//! that accept such futures or streams (`from_future`, `from_stream`,
//! `map_async`, `flat_map_stream`) use them, so the mapping rules below hold
//! wherever a `Result` enters the crate. Combinators whose continuations already
//! return an `Outcome` (`flat_map_async`, `chain`, `recover_async`) need no
//! conversion and await it directly.
//!
//! | Source | Ok side | Fail side |
//! |---|---|---|
//! | `Future<Output = Result<T, E>>` | resolves `Ok(v)` -> `Ok(v)` | resolves `Err(e)` -> `Fail(e)` |
//! | `Stream<Item = Result<T, E>>` | first item `Ok(v)` -> `Ok(v)` | first item `Err(e)` -> `Fail(e)`, no items -> `Fail(default)` |
//!
//! Going the other way, [`to_future`] and [`to_stream`] reintroduce `Err` so the
//! value can be handed to code that expects ordinary `Result` propagation.
//!
//! # Examples
//!
//! ```
//! use futures::stream;
//! use tideway::bridge;
//! use tideway::Outcome;
//!
//! # tokio_test::block_on(async {
//! let first = bridge::from_stream(stream::iter(vec![Ok(1), Ok(2)]), "empty").await;
//! assert_eq!(first, Outcome::<i32, &str>::ok(1));
//!
//! let back = bridge::to_future(Outcome::<i32, &str>::fail("nope")).await;
//! assert_eq!(back, Err("nope"));
//! # });
//! ```

use std::future::Future;

use futures::future::{self, Ready};
use futures::stream::{self, Once, StreamExt};
use futures::Stream;

use crate::Outcome;

/// Await a future of `Result` and lift it into an [`Outcome`].
///
/// Never panics on its own: a rejected future (`Err`) becomes `Fail`.
pub async fn from_future<T, E, Fut>(future: Fut) -> Outcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    match future.await {
        Ok(value) => Outcome::Ok(value),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("future rejected; lifting into Fail");
            Outcome::Fail(error)
        }
    }
}

/// Turn an [`Outcome`] back into a ready future of `Result`.
///
/// `Fail` comes out as a rejected future (`Err`).
pub fn to_future<T, E>(outcome: Outcome<T, E>) -> Ready<Result<T, E>> {
    future::ready(outcome.into_result())
}

/// Take the first item of a stream and lift it into an [`Outcome`].
///
/// The stream is polled until it yields one item or ends, and is dropped
/// immediately afterwards, so any producer on the other side sees the
/// subscription go away. A stream that ends without yielding becomes
/// `Fail(default_error)`.
///
/// # Example
///
/// ```
/// use futures::stream;
/// use tideway::{bridge, Outcome};
///
/// # tokio_test::block_on(async {
/// let empty = stream::empty::<Result<i32, &str>>();
/// assert_eq!(bridge::from_stream(empty, "no items").await, Outcome::fail("no items"));
///
/// let broken = stream::iter(vec![Err::<i32, _>("broken"), Ok(1)]);
/// assert_eq!(bridge::from_stream(broken, "no items").await, Outcome::fail("broken"));
/// # });
/// ```
pub async fn from_stream<T, E, S>(stream: S, default_error: E) -> Outcome<T, E>
where
    S: Stream<Item = Result<T, E>>,
{
    let mut stream = std::pin::pin!(stream);
    match stream.next().await {
        Some(Ok(value)) => Outcome::Ok(value),
        Some(Err(error)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("stream errored before emitting; lifting into Fail");
            Outcome::Fail(error)
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("stream completed without emitting; using default Fail");
            Outcome::Fail(default_error)
        }
    }
}

/// Turn an [`Outcome`] into a stream with exactly one item.
///
/// `Ok(v)` yields `Ok(v)` and completes; `Fail(e)` yields `Err(e)` and completes.
pub fn to_stream<T, E>(outcome: Outcome<T, E>) -> Once<Ready<Result<T, E>>> {
    stream::once(to_future(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_from_future_resolved() {
        let outcome = from_future(async { Ok::<_, String>(5) }).await;
        assert_eq!(outcome, Outcome::ok(5));
    }

    #[tokio::test]
    async fn test_from_future_rejected() {
        let outcome = from_future(async { Err::<i32, _>("rejected") }).await;
        assert_eq!(outcome, Outcome::fail("rejected"));
    }

    #[tokio::test]
    async fn test_from_future_after_delay() {
        let outcome = from_future(async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err::<i32, _>("late")
        })
        .await;
        assert_eq!(outcome, Outcome::fail("late"));
    }

    #[tokio::test]
    async fn test_to_future() {
        assert_eq!(to_future(Outcome::<_, ()>::ok(1)).await, Ok(1));
        assert_eq!(to_future(Outcome::<i32, _>::fail("e")).await, Err("e"));
    }

    #[tokio::test]
    async fn test_from_stream_takes_first_item() {
        let items = stream::iter(vec![Ok(1), Ok(2), Err("later")]);
        assert_eq!(from_stream(items, "empty").await, Outcome::ok(1));
    }

    #[tokio::test]
    async fn test_from_stream_error_item() {
        let items = stream::iter(vec![Err::<i32, _>("boom")]);
        assert_eq!(from_stream(items, "empty").await, Outcome::fail("boom"));
    }

    #[tokio::test]
    async fn test_from_stream_empty_uses_default() {
        let items = stream::empty::<Result<i32, &str>>();
        assert_eq!(from_stream(items, "empty").await, Outcome::fail("empty"));
    }

    #[tokio::test]
    async fn test_from_stream_drops_subscription_after_first_item() {
        let (tx, rx) = mpsc::unbounded::<Result<i32, &str>>();
        tx.unbounded_send(Ok(1)).unwrap();
        tx.unbounded_send(Ok(2)).unwrap();

        let outcome = from_stream(rx, "empty").await;

        assert_eq!(outcome, Outcome::ok(1));
        assert!(tx.is_closed());
        assert!(tx.unbounded_send(Ok(3)).is_err());
    }

    #[tokio::test]
    async fn test_from_stream_waits_for_late_emission() {
        let (tx, rx) = mpsc::unbounded::<Result<&str, &str>>();
        let producer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            tx.unbounded_send(Ok("late")).unwrap();
            tx
        });

        assert_eq!(from_stream(rx, "empty").await, Outcome::ok("late"));
        let tx = producer.await.unwrap();
        assert!(tx.is_closed());
    }

    #[tokio::test]
    async fn test_from_stream_closed_channel_uses_default() {
        let (tx, rx) = mpsc::unbounded::<Result<i32, &str>>();
        drop(tx);
        assert_eq!(from_stream(rx, "closed").await, Outcome::fail("closed"));
    }

    #[tokio::test]
    async fn test_to_stream_ok() {
        let items: Vec<_> = to_stream(Outcome::<_, ()>::ok(7)).collect().await;
        assert_eq!(items, vec![Ok(7)]);
    }

    #[tokio::test]
    async fn test_to_stream_fail() {
        let items: Vec<_> = to_stream(Outcome::<i32, _>::fail("e")).collect().await;
        assert_eq!(items, vec![Err("e")]);
    }

    #[tokio::test]
    async fn test_stream_roundtrip_preserves_variant() {
        let original = Outcome::<i32, &str>::fail("e");
        let back = from_stream(to_stream(original), "empty").await;
        assert_eq!(back, original);
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[tokio::test]
        #[traced_test]
        async fn test_empty_stream_is_logged() {
            let items = stream::empty::<Result<i32, &str>>();
            let _ = from_stream(items, "empty").await;
            assert!(logs_contain("stream completed without emitting"));
        }

        #[tokio::test]
        #[traced_test]
        async fn test_rejected_future_is_logged() {
            let _ = from_future(async { Err::<i32, _>("no") }).await;
            assert!(logs_contain("future rejected"));
        }
    }
}
