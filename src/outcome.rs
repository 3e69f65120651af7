//! A two-variant sum type for computations that either succeed or fail.
//!
//! # Outcome vs Result
//!
//! `Outcome<T, E>` carries the same information as `std::result::Result<T, E>`,
//! but exposes a closed combinator algebra that also reaches across futures and
//! streams (see [`AsyncOutcome`](crate::AsyncOutcome)). Convert freely between the
//! two with `From`/`Into` or [`Outcome::into_result`].
//!
//! # Short-circuiting
//!
//! Every Ok-side operator (`map`, `flat_map`, ...) is a no-op on `Fail`, and every
//! Fail-side operator (`map_fail`, `recover`, ...) is a no-op on `Ok`. The
//! continuation passed to a short-circuited operator is never invoked.
//!
//! # Examples
//!
//! ```rust
//! use tideway::{ok, Outcome};
//!
//! let outcome = ok::<_, String>(2)
//!     .map(|n| n + 1)
//!     .flat_map(|x| Outcome::ok(x.to_string()));
//!
//! assert_eq!(outcome, Outcome::ok("3".to_string()));
//!
//! let described = outcome.fold(
//!     |value| format!("got {}", value),
//!     |error| format!("failed: {}", error),
//! );
//! assert_eq!(described, "got 3");
//! ```

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::Stream;

use crate::error::{InvalidStateError, Panicked};
use crate::{bridge, AsyncOutcome};

/// A value that is either `Ok(T)` or `Fail(E)`.
///
/// Exactly one branch is populated. Combinators consume the value and return a
/// new one; nothing is mutated in place.
///
/// # Example
///
/// ```rust
/// use tideway::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     raw.parse::<u16>()
///         .map_err(|e| format!("bad port {:?}: {}", raw, e))
///         .into()
/// }
///
/// assert_eq!(parse_port("8080"), Outcome::ok(8080));
/// assert!(parse_port("http").is_fail());
///
/// match parse_port("443") {
///     Outcome::Ok(port) => assert_eq!(port, 443),
///     Outcome::Fail(e) => panic!("unexpected: {}", e),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Fail` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant
    Ok(T),
    /// The failure variant
    Fail(E),
}

/// Create an `Ok` outcome.
///
/// ```rust
/// use tideway::{ok, Outcome};
///
/// assert_eq!(ok::<_, ()>(1), Outcome::Ok(1));
/// ```
#[inline]
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Create a `Fail` outcome.
///
/// ```rust
/// use tideway::{fail, Outcome};
///
/// assert_eq!(fail::<(), _>("e"), Outcome::Fail("e"));
/// ```
#[inline]
pub fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Fail(error)
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create an `Ok` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::ok(42);
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a `Fail` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::fail("nope");
    /// assert!(o.is_fail());
    /// ```
    #[inline]
    pub fn fail(error: E) -> Self {
        Outcome::Fail(error)
    }

    /// Turn an `Option` into an outcome, using `error` when it is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::from_option(Some(0), "missing"), Outcome::ok(0));
    /// assert_eq!(Outcome::<i32, _>::from_option(None, "missing"), Outcome::fail("missing"));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Fail(error),
        }
    }

    /// Run `f`, turning a panic into `Fail(into_fail(panicked))`.
    ///
    /// A `Fail` returned by `f` itself passes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> =
    ///     Outcome::catching(|| Outcome::ok(1), |p| p.message().to_string());
    /// assert_eq!(outcome, Outcome::ok(1));
    /// ```
    pub fn catching<F, H>(f: F, into_fail: H) -> Self
    where
        F: FnOnce() -> Outcome<T, E>,
        H: FnOnce(Panicked) -> E,
    {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let panicked = Panicked::from_payload(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!(panic = panicked.message(), "closure panicked; converting to Fail");
                Outcome::Fail(into_fail(panicked))
            }
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::ok(1).is_ok());
    /// assert!(!Outcome::<i32, ()>::fail(()).is_ok());
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is a `Fail` value.
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    // ========== Extractors ==========

    /// Extract the Ok value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::UnwrapOnFail`] if the value is a `Fail`.
    /// Use [`try_unwrap`](Self::try_unwrap) for a checked version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::<_, ()>::ok(42).unwrap(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => panic!("{}", InvalidStateError::UnwrapOnFail),
        }
    }

    /// Extract the Fail value.
    ///
    /// # Panics
    ///
    /// Panics with [`InvalidStateError::UnwrapFailOnOk`] if the value is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_fail(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("{}", InvalidStateError::UnwrapFailOnOk),
            Outcome::Fail(error) => error,
        }
    }

    /// Extract the Ok value, or report which variant was present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::{InvalidStateError, Outcome};
    ///
    /// assert_eq!(Outcome::<_, ()>::ok(1).try_unwrap(), Ok(1));
    /// assert_eq!(
    ///     Outcome::<i32, _>::fail(()).try_unwrap(),
    ///     Err(InvalidStateError::UnwrapOnFail)
    /// );
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, InvalidStateError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(_) => Err(InvalidStateError::UnwrapOnFail),
        }
    }

    /// Extract the Fail value, or report which variant was present.
    #[inline]
    pub fn try_unwrap_fail(self) -> Result<E, InvalidStateError> {
        match self {
            Outcome::Ok(_) => Err(InvalidStateError::UnwrapFailOnOk),
            Outcome::Fail(error) => Ok(error),
        }
    }

    /// Extract the Ok value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is a `Fail`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => panic!("{}", msg),
        }
    }

    /// Extract the Fail value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_fail(self, msg: &str) -> E {
        match self {
            Outcome::Ok(_) => panic!("{}", msg),
            Outcome::Fail(error) => error,
        }
    }

    /// Return the Ok value or `default`. Never panics.
    ///
    /// Any Ok value is returned as-is, including `0`, `""` or `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::ok(0).unwrap_or(7), 0);
    /// assert_eq!(Outcome::<i32, _>::fail("e").unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(_) => default,
        }
    }

    /// Return the Ok value or compute one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Fail(error) => f(error),
        }
    }

    /// The Ok value as an `Option`.
    #[inline]
    pub fn maybe_ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Fail(_) => None,
        }
    }

    /// The Fail value as an `Option`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, _>::fail("e").maybe_fail(), Some("e"));
    /// assert_eq!(Outcome::<_, &str>::ok(1).maybe_fail(), None);
    /// ```
    #[inline]
    pub fn maybe_fail(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Fail(error) => Some(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Fail(error) => Err(error),
        }
    }

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Convert to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Iterate over the Ok value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().maybe_ok().into_iter()
    }

    // ========== Dispatch ==========

    /// Apply whichever handler matches the variant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::fail("boom");
    /// assert_eq!(o.fold(|n| n * 2, |e| e.len() as i32), 4);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_ok: F, on_fail: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Fail(error) => on_fail(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the Ok value, passing Fail through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::ok(21).map(|x| x * 2), Outcome::ok(42));
    /// assert_eq!(Outcome::<i32, _>::fail("e").map(|x| x * 2), Outcome::fail("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Transform the Fail value, passing Ok through unchanged.
    #[inline]
    pub fn map_fail<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    /// Chain a computation that may itself fail.
    ///
    /// `f` is not invoked when `self` is a `Fail`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::fail(format!("{} is odd", n))
    ///     }
    /// };
    ///
    /// assert_eq!(Outcome::ok(8).flat_map(half).flat_map(half), Outcome::ok(2));
    /// assert_eq!(
    ///     Outcome::ok(6).flat_map(half).flat_map(half),
    ///     Outcome::fail("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Chain a computation that returns an `Option`.
    ///
    /// `Some` becomes `Ok`, `None` becomes `Fail(error)`. An existing `Fail` is
    /// kept and `f` is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let lookup = |id: u32| if id == 1 { Some("ada") } else { None };
    ///
    /// assert_eq!(Outcome::ok(1).flat_map_maybe(lookup, "missing"), Outcome::ok("ada"));
    /// assert_eq!(Outcome::ok(5).flat_map_maybe(lookup, "missing"), Outcome::fail("missing"));
    /// ```
    #[inline]
    pub fn flat_map_maybe<U, F>(self, f: F, error: E) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Outcome::Ok(value) => Outcome::from_option(f(value), error),
            Outcome::Fail(original) => Outcome::Fail(original),
        }
    }

    /// Turn an `Ok` into a `Fail` built from the Ok value.
    ///
    /// An existing `Fail` is kept unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<(), String> =
    ///     Outcome::ok(404).to_fail_when_ok(|code| format!("status {}", code));
    /// assert_eq!(o, Outcome::fail("status 404".to_string()));
    /// ```
    #[inline]
    pub fn to_fail_when_ok<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Outcome::Ok(value) => Outcome::Fail(f(value)),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Turn an `Ok` into `Fail(error)`.
    ///
    /// An existing `Fail` keeps its original error; `error` is dropped.
    #[inline]
    pub fn to_fail_when_ok_from<U>(self, error: E) -> Outcome<U, E> {
        match self {
            Outcome::Ok(_) => Outcome::Fail(error),
            Outcome::Fail(original) => Outcome::Fail(original),
        }
    }

    /// Replace a `Fail` with an `Ok` computed from the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<usize, &str> = Outcome::fail("oops");
    /// assert_eq!(o.recover(|e| e.len()), Outcome::ok(4));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => Outcome::Ok(f(error)),
        }
    }

    /// Replace a `Fail` with the outcome computed from the error.
    ///
    /// The error type may change, since the recovery can fail differently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::fail("orig".to_string());
    /// assert_eq!(
    ///     o.recover_with(|e| Outcome::<i32, String>::fail(format!("wrapped:{}", e))),
    ///     Outcome::fail("wrapped:orig".to_string())
    /// );
    /// ```
    #[inline]
    pub fn recover_with<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(error) => f(error),
        }
    }

    /// Return `self` if it is `Ok`, otherwise `fallback`.
    ///
    /// The fallback is evaluated eagerly by the caller; use
    /// [`recover_with`](Self::recover_with) for a lazily computed one.
    #[inline]
    pub fn or<E2>(self, fallback: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Fail(_) => fallback,
        }
    }

    /// Swap `Ok` and `Fail`, keeping the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(1).swap(), Outcome::fail(1));
    /// assert_eq!(Outcome::<i32, &str>::fail("e").swap(), Outcome::ok("e"));
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Outcome::Ok(value) => Outcome::Fail(value),
            Outcome::Fail(error) => Outcome::Ok(error),
        }
    }

    /// Combine two outcomes positionally.
    ///
    /// The first `Fail`, checking `self` before `other`, wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::ok(2);
    /// let b: Outcome<i32, &str> = Outcome::ok(3);
    /// assert_eq!(a.zip_with(b, |x, y| x * y), Outcome::ok(6));
    ///
    /// let a: Outcome<i32, &str> = Outcome::fail("left");
    /// let b: Outcome<i32, &str> = Outcome::fail("right");
    /// assert_eq!(a.zip_with(b, |x, y| x * y), Outcome::fail("left"));
    /// ```
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Outcome<U, E>, f: F) -> Outcome<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Outcome::Ok(left), Outcome::Ok(right)) => Outcome::Ok(f(left, right)),
            (Outcome::Fail(error), _) => Outcome::Fail(error),
            (Outcome::Ok(_), Outcome::Fail(error)) => Outcome::Fail(error),
        }
    }

    // ========== Taps ==========

    /// Run a side effect for whichever variant is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o: Outcome<i32, &str> = Outcome::ok(1);
    /// o.tap(|v| seen.push(*v), |_| {});
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn tap<F, G>(&self, on_ok: F, on_fail: G)
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Fail(error) => on_fail(error),
        }
    }

    /// Run a side effect on the Ok value.
    #[inline]
    pub fn tap_ok<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = self {
            f(value);
        }
    }

    /// Run a side effect on the Fail value.
    #[inline]
    pub fn tap_fail<F>(&self, f: F)
    where
        F: FnOnce(&E),
    {
        if let Outcome::Fail(error) = self {
            f(error);
        }
    }

    /// Like [`tap`](Self::tap), but hands `self` back for further chaining.
    #[inline]
    pub fn tap_thru<F, G>(self, on_ok: F, on_fail: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        self.tap(on_ok, on_fail);
        self
    }

    /// Like [`tap_ok`](Self::tap_ok), but hands `self` back for further chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let o = Outcome::<_, ()>::ok(2)
    ///     .tap_ok_thru(|v| log.push(format!("before: {}", v)))
    ///     .map(|v| v * 10);
    ///
    /// assert_eq!(o, Outcome::ok(20));
    /// assert_eq!(log, vec!["before: 2"]);
    /// ```
    #[inline]
    pub fn tap_ok_thru<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.tap_ok(f);
        self
    }

    /// Like [`tap_fail`](Self::tap_fail), but hands `self` back for further chaining.
    #[inline]
    pub fn tap_fail_thru<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.tap_fail(f);
        self
    }

    // ========== Aggregation ==========

    /// Collect outcomes into one, stopping at the first `Fail`.
    ///
    /// The first `Fail` in iteration order is returned verbatim and nothing
    /// after it is pulled from the iterator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// let all_ok: Vec<Outcome<i32, &str>> = vec![Outcome::ok(1), Outcome::ok(2)];
    /// assert_eq!(Outcome::sequence(all_ok), Outcome::ok(vec![1, 2]));
    ///
    /// let mixed = vec![Outcome::ok(1), Outcome::fail("a"), Outcome::fail("b")];
    /// assert_eq!(Outcome::sequence(mixed), Outcome::fail("a"));
    /// ```
    pub fn sequence<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        items.into_iter().collect()
    }

    /// Alias for [`sequence`](Self::sequence).
    #[inline]
    pub fn all<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        Self::sequence(items)
    }

    // ========== Futures and streams ==========

    /// Await a future of `Result`, mapping resolution to `Ok` and rejection to `Fail`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::from_future(async { Err::<i32, _>("rejected") }).await;
    /// assert_eq!(o, Outcome::fail("rejected"));
    /// # });
    /// ```
    pub async fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>>,
    {
        bridge::from_future(future).await
    }

    /// Take the first item of a stream.
    ///
    /// An `Ok` item becomes `Ok`, an `Err` item becomes `Fail`, and a stream
    /// that ends without items becomes `Fail(default_error)`. The stream is
    /// dropped as soon as the first item arrives.
    pub async fn from_stream<S>(stream: S, default_error: E) -> Self
    where
        S: Stream<Item = Result<T, E>>,
    {
        bridge::from_stream(stream, default_error).await
    }

    /// A stream that yields this outcome once as a `Result` and then ends.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use tideway::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let items: Vec<_> = Outcome::<_, ()>::ok(5).into_stream().collect().await;
    /// assert_eq!(items, vec![Ok(5)]);
    /// # });
    /// ```
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> {
        bridge::to_stream(self)
    }
}

impl<T, E> Outcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Lift into an already-resolved [`AsyncOutcome`].
    #[inline]
    pub fn into_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_outcome(self)
    }

    /// Chain a future of `Result` onto the Ok value.
    ///
    /// Resolution becomes `Ok`, rejection (`Err`) becomes `Fail`. On `Fail`,
    /// `f` is not invoked and the returned `AsyncOutcome` resolves to the same
    /// `Fail`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tideway::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::<_, String>::ok(20)
    ///     .flat_map_future(|n| async move { Ok(n + 1) })
    ///     .await;
    /// assert_eq!(o, Outcome::ok(21));
    ///
    /// let o = Outcome::<i32, _>::ok(20)
    ///     .flat_map_future(|_| async { Err::<i32, _>("rejected".to_string()) })
    ///     .await;
    /// assert_eq!(o, Outcome::fail("rejected".to_string()));
    /// # });
    /// ```
    pub fn flat_map_future<M, F, Fut>(self, f: F) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        self.into_async().map_async(f)
    }

    /// Chain a future of `Outcome` onto the Ok value.
    pub fn flat_map_async<M, F, Fut>(self, f: F) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        self.into_async().flat_map_async(f)
    }

    /// Chain a stream onto the Ok value, keeping only its first item.
    ///
    /// See [`Outcome::from_stream`] for the item mapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futures::stream;
    /// use tideway::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::ok(3)
    ///     .flat_map_stream(|n| stream::iter(vec![Ok(n), Ok(n + 1)]), "empty")
    ///     .await;
    /// assert_eq!(o, Outcome::ok(3));
    ///
    /// let o = Outcome::ok(3)
    ///     .flat_map_stream(|_| stream::empty::<Result<i32, &str>>(), "empty")
    ///     .await;
    /// assert_eq!(o, Outcome::fail("empty"));
    /// # });
    /// ```
    pub fn flat_map_stream<M, F, S>(self, f: F, default_error: E) -> AsyncOutcome<M, E>
    where
        F: FnOnce(T) -> S + Send + 'static,
        S: Stream<Item = Result<M, E>> + Send + 'static,
        M: Send + 'static,
    {
        self.into_async().flat_map_stream(f, default_error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Fail(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<C, E>>()
            .into()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.maybe_ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn half(n: i32) -> Outcome<i32, String> {
        if n % 2 == 0 {
            Outcome::ok(n / 2)
        } else {
            Outcome::fail(format!("{} is odd", n))
        }
    }

    fn shrink(n: i32) -> Outcome<i32, String> {
        if n > 100 {
            Outcome::fail("too big".to_string())
        } else {
            Outcome::ok(n.wrapping_sub(3))
        }
    }

    proptest! {
        #[test]
        fn prop_variants_are_exclusive(x: i32) {
            let o: Outcome<i32, i32> = Outcome::ok(x);
            prop_assert!(o.is_ok() && !o.is_fail());
            let f: Outcome<i32, i32> = Outcome::fail(x);
            prop_assert!(f.is_fail() && !f.is_ok());
        }

        #[test]
        fn prop_functor_identity(x: i32, is_ok: bool) {
            let o: Outcome<i32, i32> = if is_ok { Outcome::ok(x) } else { Outcome::fail(x) };
            prop_assert_eq!(o.map(|v| v), o);
        }

        #[test]
        fn prop_flat_map_associativity(x: i32, is_ok: bool) {
            let o: Outcome<i32, String> =
                if is_ok { Outcome::ok(x) } else { Outcome::fail(x.to_string()) };
            prop_assert_eq!(
                o.clone().flat_map(half).flat_map(shrink),
                o.flat_map(|v| half(v).flat_map(shrink))
            );
        }

        #[test]
        fn prop_left_identity(x: i32) {
            prop_assert_eq!(Outcome::ok(x).flat_map(half), half(x));
        }

        #[test]
        fn prop_swap_involution(x: i32, is_ok: bool) {
            let o: Outcome<i32, i32> = if is_ok { Outcome::ok(x) } else { Outcome::fail(x) };
            prop_assert_eq!(o.swap().swap(), o);
        }

        #[test]
        fn prop_fail_short_circuits_flat_map(e: String) {
            let mut calls = 0;
            let o: Outcome<i32, String> = Outcome::fail(e.clone());
            let out = o.flat_map(|v| {
                calls += 1;
                Outcome::<i32, String>::ok(v)
            });
            prop_assert_eq!(out, Outcome::fail(e));
            prop_assert_eq!(calls, 0);
        }

        #[test]
        fn prop_result_roundtrip(x: i32, is_ok: bool) {
            let o: Outcome<i32, i32> = if is_ok { Outcome::ok(x) } else { Outcome::fail(x) };
            let r: Result<i32, i32> = o.into();
            prop_assert_eq!(Outcome::from(r), o);
        }
    }
}
