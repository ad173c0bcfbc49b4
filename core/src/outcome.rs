//! [`Outcome`] of a fallible operation.

use std::panic;

use crate::{
    failure::{Fault, InvalidState},
    optional::Optional,
};

/// Outcome of an operation: either a [`Success`] with a value, or a
/// [`Failure`] with an error.
///
/// # Example
///
/// ```rust
/// # use std::num::ParseIntError;
/// #
/// # use exception_core::{Optional, Outcome};
/// #
/// let parsed: Outcome<i32, ParseIntError> = "42".parse::<i32>().into();
/// assert_eq!(parsed.ok(), Optional::Present(42));
///
/// let failed: Outcome<i32, ParseIntError> = "nope".parse::<i32>().into();
/// assert!(failed.is_err());
/// assert_eq!(failed.unwrap_or_else(|_| -1), -1);
/// ```
///
/// [`Failure`]: Outcome::Failure
/// [`Success`]: Outcome::Success
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Outcome<T, E: Fault> {
    /// Operation succeeded with a value.
    Success(T),

    /// Operation failed with an error.
    Failure(E),
}

impl<T, E: Fault> Outcome<T, E> {
    /// Indicates whether this [`Outcome`] is a [`Success`](Outcome::Success).
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Indicates whether this [`Outcome`] is a [`Failure`](Outcome::Failure).
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts this [`Outcome`] into an [`Optional`] success value.
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Success(v) => Optional::Present(v),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Converts this [`Outcome`] into an [`Optional`] error.
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(e) => Optional::Present(e),
        }
    }

    /// Returns the [`Success`] value.
    ///
    /// Prefer [`Outcome::unwrap_or()`] or [`Outcome::unwrap_or_else()`], as
    /// this method is the last resort.
    ///
    /// # Panics
    ///
    /// If this [`Outcome`] is a [`Failure`], with the held error itself as the
    /// panic payload, so it can be recovered unchanged with
    /// [`Box::downcast()`] after [`std::panic::catch_unwind()`].
    ///
    /// [`Failure`]: Outcome::Failure
    /// [`Success`]: Outcome::Success
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(v) => v,
            Self::Failure(e) => panic::panic_any(e),
        }
    }

    /// Returns the [`Success`](Outcome::Success) value, or the provided
    /// `default` one.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(v) => v,
            Self::Failure(_) => default,
        }
    }

    /// Returns the [`Success`](Outcome::Success) value, or recovers it from the
    /// [`Failure`](Outcome::Failure) error with the provided `handler`.
    #[must_use]
    pub fn unwrap_or_else<F>(self, handler: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(v) => v,
            Self::Failure(e) => handler(e),
        }
    }

    /// Returns the [`Success`](Outcome::Success) value.
    ///
    /// # Panics
    ///
    /// With an [`InvalidState`] payload carrying the provided `message`, if
    /// this [`Outcome`] is a [`Failure`](Outcome::Failure). The held error is
    /// dropped, unlike [`Outcome::unwrap()`] does.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(v) => v,
            Self::Failure(_) => panic::panic_any(InvalidState::new(message)),
        }
    }

    /// Maps the [`Failure`](Outcome::Failure) error into a new one with the
    /// provided `transform`, leaving a [`Success`](Outcome::Success) as is.
    ///
    /// The `transform` receives the error as an [`Optional`] to keep the
    /// signature uniform with the other combinators, though it's only ever
    /// invoked with a [`Present`](Optional::Present) one.
    ///
    /// ```rust
    /// # use std::{io, num::ParseIntError};
    /// #
    /// # use exception_core::Outcome;
    /// #
    /// let failed = Outcome::<i32, _>::from("x".parse::<i32>());
    /// let failed = failed.map_error(|e: exception_core::Optional<ParseIntError>| {
    ///     io::Error::new(io::ErrorKind::InvalidData, e.unwrap())
    /// });
    /// assert_eq!(failed.err().unwrap().kind(), io::ErrorKind::InvalidData);
    /// ```
    pub fn map_error<NE, F>(self, transform: F) -> Outcome<T, NE>
    where
        NE: Fault,
        F: FnOnce(Optional<E>) -> NE,
    {
        match self {
            Self::Success(v) => Outcome::Success(v),
            Self::Failure(e) => {
                Outcome::Failure(transform(Optional::Present(e)))
            }
        }
    }

    /// Converts this [`Outcome`] into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// If this [`Outcome`] is a [`Failure`](Outcome::Failure).
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: Fault> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e),
        }
    }
}

impl<T, E: Fault> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(out: Outcome<T, E>) -> Self {
        match out {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(e) => Err(e),
        }
    }
}
