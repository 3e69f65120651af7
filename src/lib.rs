//! # Tideway
//!
//! Railway-style success/failure values that keep composing when the
//! computation crosses into futures and streams.
//!
//! ## Overview
//!
//! - [`Outcome<T, E>`] is a closed `Ok`/`Fail` sum type with a combinator
//!   algebra: map, flat-map, recover, fold, tap, aggregate.
//! - [`AsyncOutcome<T, E>`] is a pending `Outcome` with the same algebra. Any
//!   async continuation on an `Outcome` upgrades the chain to one.
//! - [`bridge`] lifts `Future<Output = Result<..>>` and `Stream<Item = Result<..>>`
//!   into outcomes and back. A rejected future, an erroring stream, or an empty
//!   stream always lands in the `Fail` branch.
//!
//! ## Quick Example
//!
//! ```rust
//! use tideway::{AsyncOutcome, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<u32, String> {
//!     raw.parse::<u32>().map_err(|e| e.to_string()).into()
//! }
//!
//! async fn lookup(id: u32) -> Result<String, String> {
//!     if id == 7 { Ok("seven".into()) } else { Err(format!("no record {}", id)) }
//! }
//!
//! # tokio_test::block_on(async {
//! let found = parse("7").flat_map_future(lookup).await;
//! assert_eq!(found, Outcome::ok("seven".to_string()));
//!
//! let missing = parse("8").flat_map_future(lookup).await;
//! assert_eq!(missing, Outcome::fail("no record 8".to_string()));
//!
//! let bad_input: AsyncOutcome<String, String> = parse("x").flat_map_future(lookup);
//! assert!(bad_input.await.is_fail());
//! # });
//! ```
//!
//! ## Features
//!
//! - `async`: tokio task adapter (`AsyncOutcome::from_task`, `AsyncOutcome::spawn`).
//! - `tracing`: trace events at the bridges and span instrumentation.
//! - `serde`: `Serialize`/`Deserialize` for `Outcome`.
//! - `proptest`: `Arbitrary` for `Outcome`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod async_outcome;
pub mod bridge;
pub mod error;
pub mod outcome;
#[cfg(feature = "async")]
pub mod task;
pub mod testing;

// Re-exports
pub use async_outcome::AsyncOutcome;
pub use error::{InvalidStateError, Panicked};
pub use outcome::{fail, ok, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::async_outcome::AsyncOutcome;
    pub use crate::bridge;
    pub use crate::error::{InvalidStateError, Panicked};
    pub use crate::outcome::{fail, ok, Outcome};
}
