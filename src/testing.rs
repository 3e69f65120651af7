//! Testing utilities for code built on `Outcome`
//!
//! Assertion macros that report the unexpected variant's payload on failure,
//! plus (with the `proptest` feature) an [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementation for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use tideway::{Outcome, assert_ok, assert_fail, assert_fail_eq};
//!
//! let parsed = Outcome::<_, String>::ok(42);
//! assert_ok!(parsed);
//!
//! let rejected = Outcome::<i32, _>::fail("too large");
//! assert_fail!(rejected);
//! assert_fail_eq!(rejected, "too large");
//! ```

/// Assert that an outcome is `Ok`.
///
/// With a second argument, also asserts the Ok value equals it.
///
/// # Example
///
/// ```rust
/// use tideway::{Outcome, assert_ok};
///
/// assert_ok!(Outcome::<_, ()>::ok(1));
/// assert_ok!(Outcome::<_, ()>::ok(1), 1);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Fail(e) => {
                panic!("Expected Ok, got Fail: {:?}", e);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Ok(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Outcome::Fail(e) => {
                panic!("Expected Ok({:?}), got Fail: {:?}", $expected, e);
            }
        }
    };
}

/// Assert that an outcome is `Fail`.
///
/// # Example
///
/// ```rust
/// use tideway::{Outcome, assert_fail};
///
/// assert_fail!(Outcome::<i32, _>::fail("error"));
/// ```
#[macro_export]
macro_rules! assert_fail {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Fail(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Fail, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is `Fail` with a specific error.
///
/// # Example
///
/// ```rust
/// use tideway::{Outcome, assert_fail_eq};
///
/// let outcome = Outcome::<i32, _>::fail(vec!["missing name"]);
/// assert_fail_eq!(outcome, vec!["missing name"]);
/// ```
#[macro_export]
macro_rules! assert_fail_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Fail(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Ok(v) => {
                panic!("Expected Fail({:?}), got Ok: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Outcome;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::Ok),
            any_with::<E>(e_params).prop_map(Outcome::Fail),
        ]
        .boxed()
    }
}
