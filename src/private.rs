//! Helpers used in `#[as_optional]` and `#[as_outcome]` macros expansion.

use exception_core::{adapter, Optional, Outcome, Raised, Selector};

/// Runs the `body` of an adapted function, converting its result into an
/// [`Optional`].
#[inline]
pub fn optional<T, F>(body: F) -> Optional<T>
where
    F: FnOnce() -> Option<T>,
{
    body().into()
}

/// Runs the `body` of an adapted function, capturing any of its failures.
#[inline]
pub fn outcome<T, R, F>(body: F) -> Outcome<T, Raised>
where
    F: FnOnce() -> Result<T, R>,
    R: Into<Raised>,
{
    adapter::capture_all(body())
}

/// Runs the `body` of an adapted function, capturing its failures selected by
/// `S` and propagating the rest.
///
/// # Errors
///
/// With the original [`Raised`] failure, if it's not selected by `S`.
#[inline]
pub fn catching<S, T, R, F>(body: F) -> Result<Outcome<T, S::Caught>, Raised>
where
    S: Selector,
    F: FnOnce() -> Result<T, R>,
    R: Into<Raised>,
{
    adapter::catching::<S>().capture(body())
}
