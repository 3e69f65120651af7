//! Bridge between tokio tasks and [`AsyncOutcome`]
//!
//! A spawned task can end in three ways: it returns `Ok`, it returns `Err`, or
//! it never returns because it panicked or was aborted. The adapters here fold
//! all three into an `Outcome`, so a crash in spawned work lands in the `Fail`
//! branch instead of propagating through `JoinHandle::await`.
//!
//! Requires the `async` feature.

use std::future::IntoFuture;

use tokio::task::{JoinError, JoinHandle};

use crate::{AsyncOutcome, Outcome};

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Await a spawned task that returns a `Result`.
    ///
    /// `Err` from the task becomes `Fail`. A task that panicked or was aborted
    /// becomes `Fail(on_join_error(join_error))`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let handle = tokio::spawn(async { Ok::<_, String>(21) });
    /// let doubled = AsyncOutcome::from_task(handle, |e| e.to_string()).map(|n| n * 2);
    /// assert_eq!(doubled.await, Outcome::ok(42));
    /// # });
    /// ```
    pub fn from_task<F>(handle: JoinHandle<Result<T, E>>, on_join_error: F) -> Self
    where
        F: FnOnce(JoinError) -> E + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match handle.await {
                Ok(result) => Outcome::from(result),
                Err(join_error) => join_failed(join_error, on_join_error),
            }
        })
    }

    /// Run the chain as its own tokio task.
    ///
    /// Unlike every other combinator this is eager: the task is spawned right
    /// away and makes progress whether or not the returned value is awaited.
    /// Must be called from within a tokio runtime.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let background = AsyncOutcome::<_, String>::ok(1)
    ///     .map_async(|n| async move { Ok(n + 1) })
    ///     .spawn(|e| format!("worker died: {}", e));
    /// assert_eq!(background.await, Outcome::ok(2));
    /// # });
    /// ```
    pub fn spawn<F>(self, on_join_error: F) -> Self
    where
        F: FnOnce(JoinError) -> E + Send + 'static,
    {
        let handle = tokio::spawn(self.into_future());
        AsyncOutcome::new(async move {
            match handle.await {
                Ok(outcome) => outcome,
                Err(join_error) => join_failed(join_error, on_join_error),
            }
        })
    }
}

fn join_failed<T, E, F>(join_error: JoinError, on_join_error: F) -> Outcome<T, E>
where
    F: FnOnce(JoinError) -> E,
{
    #[cfg(feature = "tracing")]
    tracing::warn!(
        panicked = join_error.is_panic(),
        cancelled = join_error.is_cancelled(),
        "task did not complete; converting to Fail"
    );
    Outcome::Fail(on_join_error(join_error))
}
