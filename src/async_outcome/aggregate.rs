//! Sequential, short-circuiting aggregation of `AsyncOutcome`s.
//!
//! Items are awaited one after another, never concurrently. The first `Fail`
//! ends the aggregation at once; items after it are dropped without ever being
//! polled, so work they would have started never begins.

use super::AsyncOutcome;
use crate::Outcome;

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Await every item in order, collecting the Ok values.
    ///
    /// Resolves to the first `Fail` encountered, without awaiting anything after
    /// it. An empty input resolves to `Ok(vec![])`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let all = AsyncOutcome::all(vec![
    ///     AsyncOutcome::<_, &str>::ok(1),
    ///     AsyncOutcome::from_future(async { Ok(2) }),
    /// ]);
    /// assert_eq!(all.await, Outcome::ok(vec![1, 2]));
    ///
    /// let first_fail = AsyncOutcome::all(vec![
    ///     AsyncOutcome::ok(1),
    ///     AsyncOutcome::fail("second"),
    ///     AsyncOutcome::fail("third"),
    /// ]);
    /// assert_eq!(first_fail.await, Outcome::fail("second"));
    /// # });
    /// ```
    pub fn all<I>(items: I) -> AsyncOutcome<Vec<T>, E>
    where
        I: IntoIterator<Item = AsyncOutcome<T, E>>,
    {
        let items: Vec<AsyncOutcome<T, E>> = items.into_iter().collect();

        AsyncOutcome::new(async move {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match item.inner.await {
                    Outcome::Ok(value) => values.push(value),
                    Outcome::Fail(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(index = values.len(), "aggregation short-circuited on Fail");
                        return Outcome::Fail(error);
                    }
                }
            }
            Outcome::Ok(values)
        })
    }

    /// Alias for [`all`](Self::all).
    pub fn sequence<I>(items: I) -> AsyncOutcome<Vec<T>, E>
    where
        I: IntoIterator<Item = AsyncOutcome<T, E>>,
    {
        Self::all(items)
    }
}
