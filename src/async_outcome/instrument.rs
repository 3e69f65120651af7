//! Tracing support for `AsyncOutcome`.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use tracing::Instrument as _;

use super::AsyncOutcome;

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Run the whole upstream chain inside a tracing span.
    ///
    /// The span is entered each time the future is polled and exited between
    /// polls, following the standard `tracing::Instrument` pattern.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tideway::AsyncOutcome;
    /// use tracing::info_span;
    ///
    /// let order = AsyncOutcome::from_future(fetch_order(order_id))
    ///     .map(|order| order.total)
    ///     .instrument(info_span!("fetch_order", %order_id));
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        AsyncOutcome::new(self.inner.instrument(span))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AsyncOutcome, Outcome};
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_instrument_returns_value() {
        let outcome = AsyncOutcome::<_, String>::ok(42)
            .instrument(tracing::info_span!("test_span"))
            .await;
        assert_eq!(outcome, Outcome::ok(42));
    }

    #[tokio::test]
    async fn test_fail_in_span_propagates() {
        let outcome = AsyncOutcome::<i32, _>::fail("oops".to_string())
            .instrument(tracing::info_span!("failing"))
            .await;
        assert_eq!(outcome, Outcome::fail("oops".to_string()));
    }

    #[tokio::test]
    async fn test_nested_spans() {
        let outcome = AsyncOutcome::<_, String>::ok(5)
            .instrument(tracing::debug_span!("step1"))
            .map(|x| x * 2)
            .chain(|x| AsyncOutcome::ok(x + 10).instrument(tracing::debug_span!("step2")))
            .await;
        assert_eq!(outcome, Outcome::ok(20));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_events_carry_span_name() {
        let _ = AsyncOutcome::<i32, _>::ok(1)
            .map_async(|_| async {
                tracing::info!("inside continuation");
                Err::<i32, _>("rejected")
            })
            .instrument(tracing::info_span!("checkout"))
            .await;

        assert!(logs_contain("checkout"));
        assert!(logs_contain("inside continuation"));
    }
}
