//! Error types raised by the crate itself
//!
//! Domain failures travel inside [`Outcome::Fail`](crate::Outcome) and never show
//! up here. This module only covers the two situations the crate reports on its
//! own behalf:
//!
//! - [`InvalidStateError`]: programmer misuse, such as calling `unwrap()` on a
//!   `Fail` value.
//! - [`Panicked`]: a panic captured at a continuation boundary, handed to the
//!   caller so it can be turned into a `Fail` value.
//!
//! # Examples
//!
//! ```
//! use tideway::{InvalidStateError, Outcome};
//!
//! let outcome: Outcome<i32, &str> = Outcome::fail("boom");
//! let err = outcome.try_unwrap().unwrap_err();
//!
//! assert_eq!(err, InvalidStateError::UnwrapOnFail);
//! assert_eq!(err.to_string(), "called `Outcome::unwrap()` on a `Fail` value");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// An extraction was attempted on the wrong variant.
///
/// This is the only condition under which the crate panics: `unwrap()` and
/// `unwrap_fail()` panic with this error's `Display` text. The checked
/// `try_unwrap()` / `try_unwrap_fail()` return it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidStateError {
    /// `unwrap()` was called on a `Fail` value.
    UnwrapOnFail,
    /// `unwrap_fail()` was called on an `Ok` value.
    UnwrapFailOnOk,
}

impl InvalidStateError {
    /// The name of the variant that was actually present.
    pub fn found(&self) -> &'static str {
        match self {
            InvalidStateError::UnwrapOnFail => "Fail",
            InvalidStateError::UnwrapFailOnOk => "Ok",
        }
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidStateError::UnwrapOnFail => {
                write!(f, "called `Outcome::unwrap()` on a `Fail` value")
            }
            InvalidStateError::UnwrapFailOnOk => {
                write!(f, "called `Outcome::unwrap_fail()` on an `Ok` value")
            }
        }
    }
}

impl StdError for InvalidStateError {}

/// A panic captured while running a continuation.
///
/// The original payload is kept so it can be re-raised with
/// [`std::panic::resume_unwind`] if the caller decides the panic should not be
/// absorbed after all.
///
/// # Examples
///
/// ```
/// use tideway::{Outcome, Panicked};
///
/// let outcome: Outcome<i32, String> = Outcome::catching(
///     || panic!("disk on fire"),
///     |p: Panicked| p.message().to_string(),
/// );
///
/// assert_eq!(outcome, Outcome::fail("disk on fire".to_string()));
/// ```
pub struct Panicked {
    message: String,
    payload: Box<dyn Any + Send + 'static>,
}

impl Panicked {
    /// Wrap a payload produced by `catch_unwind`.
    ///
    /// String payloads (the ones `panic!` produces) are copied into the message;
    /// anything else is reported as an unknown panic.
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "unknown panic".to_string()
        };
        Panicked { message, payload }
    }

    /// The panic message, or `"unknown panic"` for non-string payloads.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Give back the raw payload, e.g. for `resume_unwind`.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message)
            .field("payload", &"<any>")
            .finish()
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "continuation panicked: {}", self.message)
    }
}

impl StdError for Panicked {}

impl From<Panicked> for String {
    fn from(panicked: Panicked) -> Self {
        panicked.message
    }
}
