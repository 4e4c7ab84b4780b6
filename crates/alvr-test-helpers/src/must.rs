//! Unwrap helpers for test code.
//!
//! Tests use these instead of `unwrap()`/`expect()` so that a failure names
//! the value that was wrong and points at the calling line.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error value.
///
/// ```rust
/// use alvr_test_helpers::must;
///
/// let result: Result<u32, &str> = Ok(7);
/// assert_eq!(must(result), 7);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` on `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with `context` and the error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Unwrap an `Err`, panicking if the result unexpectedly succeeded.
///
/// Activation and config tests assert on the error value itself.
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: unexpected Ok: {v:?}"),
        Err(e) => e,
    }
}
