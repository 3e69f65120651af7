//! Deferred outcomes that keep the combinator algebra across `.await`
//!
//! An [`AsyncOutcome<T, E>`] owns one pending computation that will produce an
//! [`Outcome<T, E>`]. It exposes the same combinators as `Outcome`, so a chain
//! that becomes asynchronous halfway through never needs an intermediate
//! `.await` or `match`.
//!
//! # Core Concepts
//!
//! - **Lazy**: nothing runs until the value is awaited. Continuations are called
//!   from inside the future, in order.
//! - **Single owner**: every combinator consumes `self` and returns a new
//!   `AsyncOutcome`. Awaiting it (through [`IntoFuture`]) is the one way out.
//! - **Short-circuiting**: a `Fail` skips every Ok-side continuation after it.
//! - **No escaping failures**: a continuation that returns `Err` or `Fail`, or a
//!   future that rejects, always lands in the `Fail` branch. Add
//!   [`catch_panic`](AsyncOutcome::catch_panic) to extend that to panics.
//!
//! # Examples
//!
//! ```
//! use tideway::AsyncOutcome;
//!
//! # tokio_test::block_on(async {
//! let outcome = AsyncOutcome::<_, String>::ok(2)
//!     .map(|n| n + 1)
//!     .map_async(|n| async move { Ok(n * 10) })
//!     .flat_map(|n| if n > 10 { tideway::ok(n) } else { tideway::fail("too small".into()) })
//!     .await;
//!
//! assert_eq!(outcome, tideway::ok(30));
//! # });
//! ```
//!
//! A rejection inside a continuation becomes a `Fail`:
//!
//! ```
//! use tideway::{AsyncOutcome, Outcome};
//!
//! # tokio_test::block_on(async {
//! let outcome = AsyncOutcome::<i32, _>::ok(1)
//!     .map_async(|_| async { Err::<i32, _>("bad") })
//!     .await;
//!
//! assert_eq!(outcome, Outcome::fail("bad"));
//! # });
//! ```

mod aggregate;
#[cfg(feature = "tracing")]
mod instrument;

use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, Stream};

use crate::error::Panicked;
use crate::{bridge, Outcome};

/// A pending computation of an [`Outcome<T, E>`].
///
/// Awaiting an `AsyncOutcome` yields the `Outcome`; it never yields a panic or
/// an unhandled `Err` produced by the continuations chained onto it.
///
/// # Examples
///
/// ```
/// use tideway::{AsyncOutcome, Outcome};
///
/// # tokio_test::block_on(async {
/// let greeting = AsyncOutcome::from_future(async { Ok::<_, String>("hello") })
///     .map(|s| s.to_uppercase());
/// assert_eq!(greeting.await, Outcome::ok("HELLO".to_string()));
/// # });
/// ```
#[must_use = "an `AsyncOutcome` does nothing unless awaited"]
pub struct AsyncOutcome<T, E> {
    inner: BoxFuture<'static, Outcome<T, E>>,
}

impl<T, E> std::fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncOutcome")
            .field("inner", &"<future>")
            .finish()
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    // ========== Constructors ==========

    /// Wrap a future that resolves to an [`Outcome`].
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(future),
        }
    }

    /// An already-resolved `Ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(AsyncOutcome::<_, ()>::ok(1).await, Outcome::ok(1));
    /// # });
    /// ```
    pub fn ok(value: T) -> Self {
        Self::from_outcome(Outcome::Ok(value))
    }

    /// An already-resolved `Fail`.
    pub fn fail(error: E) -> Self {
        Self::from_outcome(Outcome::Fail(error))
    }

    /// Lift a resolved [`Outcome`].
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self::new(futures::future::ready(outcome))
    }

    /// Wrap a future of `Result`: resolution becomes `Ok`, rejection becomes `Fail`.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::new(bridge::from_future(future))
    }

    /// Wrap the first item of a stream.
    ///
    /// See [`bridge::from_stream`] for the item mapping. The stream is only
    /// polled once this `AsyncOutcome` is awaited.
    pub fn from_stream<S>(stream: S, default_error: E) -> Self
    where
        S: Stream<Item = Result<T, E>> + Send + 'static,
    {
        Self::new(bridge::from_stream(stream, default_error))
    }

    // ========== Synchronous continuations ==========

    /// Transform the Ok value.
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.map(f) })
    }

    /// Transform the Fail value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = AsyncOutcome::<i32, _>::fail("error")
    ///     .map_fail(|e| format!("Failed: {}", e));
    /// assert_eq!(outcome.await, Outcome::fail("Failed: error".to_string()));
    /// # });
    /// ```
    pub fn map_fail<E2, F>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.map_fail(f) })
    }

    /// Chain a synchronous computation that may fail.
    pub fn flat_map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E> + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.flat_map(f) })
    }

    /// Chain a computation returning an `Option`; `None` becomes `Fail(error)`.
    pub fn flat_map_maybe<U, F>(self, f: F, error: E) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> Option<U> + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.flat_map_maybe(f, error) })
    }

    /// Turn an `Ok` into a `Fail` built from the Ok value.
    pub fn to_fail_when_ok<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> E + Send + 'static,
        U: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.to_fail_when_ok(f) })
    }

    /// Turn an `Ok` into `Fail(error)`. An existing `Fail` is kept.
    pub fn to_fail_when_ok_from<U>(self, error: E) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.to_fail_when_ok_from(error) })
    }

    /// Replace a `Fail` with an `Ok` computed from the error.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T + Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.recover(f) })
    }

    /// Replace a `Fail` with the outcome computed from the error.
    pub fn recover_with<E2, F>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2> + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.recover_with(f) })
    }

    /// Fall back to `fallback` when `self` fails.
    ///
    /// The fallback is built eagerly by the caller but is only awaited when
    /// `self` resolves to `Fail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let cached = AsyncOutcome::<i32, _>::fail("cache miss");
    /// let fresh = AsyncOutcome::<_, &str>::from_future(async { Ok(42) });
    /// assert_eq!(cached.or(fresh).await, Outcome::ok(42));
    /// # });
    /// ```
    pub fn or<E2>(self, fallback: AsyncOutcome<T, E2>) -> AsyncOutcome<T, E2>
    where
        E2: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Fail(_) => fallback.inner.await,
            }
        })
    }

    /// Swap `Ok` and `Fail`.
    pub fn swap(self) -> AsyncOutcome<E, T> {
        AsyncOutcome::new(async move { self.inner.await.swap() })
    }

    /// Combine with another `AsyncOutcome`.
    ///
    /// `self` is awaited first; if it fails, `other` is never polled.
    pub fn zip_with<U, V, F>(self, other: AsyncOutcome<U, E>, f: F) -> AsyncOutcome<V, E>
    where
        F: FnOnce(T, U) -> V + Send + 'static,
        U: Send + 'static,
        V: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(left) => other.inner.await.map(|right| f(left, right)),
                Outcome::Fail(error) => Outcome::Fail(error),
            }
        })
    }

    /// Run a side effect for whichever variant resolves.
    pub fn tap<F, G>(self, on_ok: F, on_fail: G) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
        G: FnOnce(&E) + Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.tap_thru(on_ok, on_fail) })
    }

    /// Run a side effect on the Ok value.
    pub fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.tap_ok_thru(f) })
    }

    /// Run a side effect on the Fail value.
    pub fn tap_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        AsyncOutcome::new(async move { self.inner.await.tap_fail_thru(f) })
    }

    // ========== Asynchronous continuations ==========

    /// Chain a future of `Result` onto the Ok value.
    ///
    /// Delegates to [`flat_map_async`](Self::flat_map_async) through
    /// [`bridge::from_future`], so an `Err` from the future becomes `Fail`.
    pub fn map_async<M, F, Fut>(self, f: F) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        self.flat_map_async(move |value| bridge::from_future(f(value)))
    }

    /// Chain a future of `Outcome` onto the Ok value.
    ///
    /// On `Fail`, `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = AsyncOutcome::<_, &str>::ok(5)
    ///     .flat_map_async(|x| async move {
    ///         if x > 3 { Outcome::ok(x * 2) } else { Outcome::fail("small") }
    ///     });
    /// assert_eq!(outcome.await, Outcome::ok(10));
    /// # });
    /// ```
    pub fn flat_map_async<M, F, Fut>(self, f: F) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => f(value).await,
                Outcome::Fail(error) => Outcome::Fail(error),
            }
        })
    }

    /// Chain another `AsyncOutcome` onto the Ok value.
    ///
    /// `f` runs inside the resulting future, so a panic in it is covered by a
    /// later [`catch_panic`](Self::catch_panic).
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// fn load_user(id: u32) -> AsyncOutcome<String, String> {
    ///     AsyncOutcome::from_future(async move { Ok(format!("user-{}", id)) })
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let name = AsyncOutcome::ok(7).chain(load_user).await;
    /// assert_eq!(name, Outcome::ok("user-7".to_string()));
    /// # });
    /// ```
    pub fn chain<M, F>(self, f: F) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> AsyncOutcome<M, E> + Send + 'static,
        M: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => f(value).inner.await,
                Outcome::Fail(error) => Outcome::Fail(error),
            }
        })
    }

    /// Chain a stream onto the Ok value, keeping only its first item.
    pub fn flat_map_stream<M, F, S>(self, f: F, default_error: E) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> S + Send + 'static,
        S: Stream<Item = Result<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => bridge::from_stream(f(value), default_error).await,
                Outcome::Fail(error) => Outcome::Fail(error),
            }
        })
    }

    /// Recover from a `Fail` with an asynchronous computation.
    pub fn recover_async<E2, F, Fut>(self, f: F) -> AsyncOutcome<T, E2>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E2>> + Send + 'static,
        E2: Send + 'static,
    {
        AsyncOutcome::new(async move {
            match self.inner.await {
                Outcome::Ok(value) => Outcome::Ok(value),
                Outcome::Fail(error) => f(error).await,
            }
        })
    }

    /// Turn a panic anywhere upstream into `Fail(into_fail(panicked))`.
    ///
    /// Covers every continuation chained before this call, both the closure
    /// itself and the future it returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::{AsyncOutcome, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = AsyncOutcome::<i32, String>::ok(1)
    ///     .chain(|_| -> AsyncOutcome<i32, String> { panic!("lost connection") })
    ///     .catch_panic(|p| p.message().to_string())
    ///     .await;
    /// assert_eq!(outcome, Outcome::fail("lost connection".to_string()));
    /// # });
    /// ```
    pub fn catch_panic<F>(self, into_fail: F) -> Self
    where
        F: FnOnce(Panicked) -> E + Send + 'static,
    {
        AsyncOutcome::new(async move {
            match AssertUnwindSafe(self.inner).catch_unwind().await {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let panicked = Panicked::from_payload(payload);
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        panic = panicked.message(),
                        "continuation panicked; converting to Fail"
                    );
                    Outcome::Fail(into_fail(panicked))
                }
            }
        })
    }

    // ========== Leaving the async world ==========

    /// Await and apply whichever handler matches the variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use tideway::AsyncOutcome;
    ///
    /// # tokio_test::block_on(async {
    /// let text = AsyncOutcome::<i32, &str>::fail("e")
    ///     .fold(|n| n.to_string(), |e| format!("error: {}", e))
    ///     .await;
    /// assert_eq!(text, "error: e");
    /// # });
    /// ```
    pub async fn fold<U, F, G>(self, on_ok: F, on_fail: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        self.inner.await.fold(on_ok, on_fail)
    }

    /// Await and apply whichever asynchronous handler matches the variant.
    pub async fn fold_async<U, F, G, FutOk, FutFail>(self, on_ok: F, on_fail: G) -> U
    where
        F: FnOnce(T) -> FutOk,
        G: FnOnce(E) -> FutFail,
        FutOk: Future<Output = U>,
        FutFail: Future<Output = U>,
    {
        match self.inner.await {
            Outcome::Ok(value) => on_ok(value).await,
            Outcome::Fail(error) => on_fail(error).await,
        }
    }

    /// Await the Ok value, or `default` on `Fail`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.inner.await.unwrap_or(default)
    }

    /// Await as a standard `Result`; `Fail` comes out as `Err`.
    pub async fn into_result(self) -> Result<T, E> {
        self.inner.await.into_result()
    }

    /// A stream that yields the resolved outcome once as a `Result`.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Send + 'static {
        stream::once(self.into_result())
    }
}

impl<T, E> IntoFuture for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;
    type IntoFuture = BoxFuture<'static, Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.inner
    }
}

impl<T, E> From<Outcome<T, E>> for AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        AsyncOutcome::from_outcome(outcome)
    }
}
