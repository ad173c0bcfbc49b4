//! Adapters of conventional functions into [`Optional`]- and
//! [`Outcome`]-returning ones.
//!
//! Functions here wrap single-argument closures (use a tuple to pass more
//! arguments). To adapt a function definition of any signature in place, use
//! the `#[as_optional]` and `#[as_outcome]` attributes of the `exception`
//! crate, which expand into calls of this module.

use std::{error::Error as StdError, fmt, marker::PhantomData};

use sealed::sealed;

use crate::{
    failure::{Fault, Raised},
    optional::Optional,
    outcome::Outcome,
};

/// Adapts the provided `f`unction returning an [`Option`] into one returning
/// an [`Optional`].
///
/// [`None`] becomes [`Optional::Absent`], anything else is
/// [`Optional::Present`]. Arguments are passed through untouched.
///
/// # Example
///
/// ```rust
/// # use exception_core::{adapter, Optional};
/// #
/// let mut lookup = adapter::as_optional(|data: &str| {
///     (data == "a").then_some(42)
/// });
///
/// assert_eq!(lookup("a"), Optional::Present(42));
/// assert_eq!(lookup("b"), Optional::Absent);
/// ```
pub fn as_optional<A, T, F>(mut f: F) -> impl FnMut(A) -> Optional<T>
where
    F: FnMut(A) -> Option<T>,
{
    move |args| f(args).into()
}

/// Adapts the provided fallible `f`unction into one returning an [`Outcome`],
/// capturing any failure into an [`Outcome::Failure`].
///
/// To capture only some kinds of failures, use [`catching()`].
///
/// # Example
///
/// ```rust
/// # use std::num::ParseIntError;
/// #
/// # use exception_core::{adapter, Outcome};
/// #
/// let mut parse = adapter::as_outcome(|s: &str| s.parse::<i32>());
///
/// assert_eq!(parse("42"), Outcome::Success(42));
/// assert!(parse("x").err().unwrap().is::<ParseIntError>());
/// ```
pub fn as_outcome<A, T, R, F>(mut f: F) -> impl FnMut(A) -> Outcome<T, Raised>
where
    F: FnMut(A) -> Result<T, R>,
    R: Into<Raised>,
{
    move |args| capture_all(f(args))
}

/// Captures any failure of the provided `result` into an
/// [`Outcome::Failure`].
pub fn capture_all<T, R>(result: Result<T, R>) -> Outcome<T, Raised>
where
    R: Into<Raised>,
{
    match catching::<AnyFailure>().capture(result) {
        Ok(out) => out,
        Err(raised) => Outcome::Failure(raised),
    }
}

/// Creates a [`Catching`] adapter capturing only failures selected by `S`.
///
/// # Example
///
/// ```rust
/// # use std::{io, num::ParseIntError};
/// #
/// # use exception_core::{adapter, Kind, Outcome};
/// #
/// let mut parse = adapter::catching::<Kind<ParseIntError>>().adapt(
///     |s: &str| -> Result<i32, exception_core::Raised> {
///         if s.is_empty() {
///             return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
///         }
///         Ok(s.parse::<i32>()?)
///     },
/// );
///
/// assert_eq!(parse("42").unwrap(), Outcome::Success(42));
/// assert!(parse("x").unwrap().is_err());
/// assert!(parse("").unwrap_err().is::<io::Error>());
/// ```
#[must_use]
pub const fn catching<S: Selector>() -> Catching<S> {
    Catching(PhantomData)
}

/// Adapter of fallible functions, capturing failures selected by `S` into an
/// [`Outcome::Failure`] and propagating the rest unchanged.
pub struct Catching<S>(PhantomData<fn() -> S>);

impl<S: Selector> Catching<S> {
    /// Captures a failure of the provided `result` into an
    /// [`Outcome::Failure`], if it's selected by `S`.
    ///
    /// # Errors
    ///
    /// With the original [`Raised`] failure, if it's not selected by `S`.
    pub fn capture<T, R>(
        self,
        result: Result<T, R>,
    ) -> Result<Outcome<T, S::Caught>, Raised>
    where
        R: Into<Raised>,
    {
        let raised = match result {
            Ok(v) => return Ok(Outcome::Success(v)),
            Err(e) => e.into(),
        };
        match S::select(raised) {
            Ok(caught) => {
                log::trace!("failure captured into `Outcome`: {caught:?}");
                Ok(Outcome::Failure(caught))
            }
            Err(raised) => {
                log::trace!("failure is not selected, propagating: {raised:?}");
                Err(raised)
            }
        }
    }

    /// Adapts the provided fallible `f`unction to [`Catching::capture()`] its
    /// failures.
    pub fn adapt<A, T, R, F>(
        self,
        mut f: F,
    ) -> impl FnMut(A) -> Result<Outcome<T, S::Caught>, Raised>
    where
        F: FnMut(A) -> Result<T, R>,
        R: Into<Raised>,
    {
        move |args| self.capture(f(args))
    }
}

impl<S> Clone for Catching<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Catching<S> {}

impl<S> fmt::Debug for Catching<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Catching")
            .field(&std::any::type_name::<S>())
            .finish()
    }
}

/// Type-level selector of failure kinds to be captured.
///
/// Implemented for:
/// - [`AnyFailure`], capturing any failure as a [`Raised`] one;
/// - [`Kind<K>`], capturing failures of the `K` type, downcast into `K`;
/// - tuples of up to 8 [`Selector`]s, capturing a failure if any of them
///   selects it.
///
/// Tuples always capture a failure as a [`Raised`] one, since its kind may be
/// any of their members'. This holds even for a single-element tuple: use a
/// bare [`Kind<K>`] to have the failure downcast.
#[sealed]
pub trait Selector {
    /// Type of a captured failure.
    type Caught: Fault;

    /// Indicates whether the provided `raised` failure is selected.
    #[must_use]
    fn matches(raised: &Raised) -> bool;

    /// Selects the provided `raised` failure.
    ///
    /// # Errors
    ///
    /// With the provided `raised` failure, if it's not selected.
    fn select(raised: Raised) -> Result<Self::Caught, Raised>;
}

/// [`Selector`] of any failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyFailure;

#[sealed]
impl Selector for AnyFailure {
    type Caught = Raised;

    fn matches(_: &Raised) -> bool {
        true
    }

    fn select(raised: Raised) -> Result<Raised, Raised> {
        Ok(raised)
    }
}

/// [`Selector`] of failures of the concrete `K` type.
pub struct Kind<K>(PhantomData<fn() -> K>);

#[sealed]
impl<K> Selector for Kind<K>
where
    K: StdError + Send + Sync + 'static,
{
    type Caught = K;

    fn matches(raised: &Raised) -> bool {
        raised.is::<K>()
    }

    fn select(raised: Raised) -> Result<K, Raised> {
        raised.downcast::<K>()
    }
}

impl<K> Clone for Kind<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Kind<K> {}

impl<K> Default for Kind<K> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<K> fmt::Debug for Kind<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kind")
            .field(&std::any::type_name::<K>())
            .finish()
    }
}

/// Implements [`Selector`] for a tuple of [`Selector`]s, selecting a failure
/// if any of them does.
///
/// The captured failure is left as a [`Raised`] one, without downcasting.
macro_rules! impl_selector_for_tuple {
    ($($sel:ident),+) => {
        #[sealed]
        impl<$($sel: Selector),+> Selector for ($($sel,)+) {
            type Caught = Raised;

            fn matches(raised: &Raised) -> bool {
                $( $sel::matches(raised) )||+
            }

            fn select(raised: Raised) -> Result<Raised, Raised> {
                if Self::matches(&raised) {
                    Ok(raised)
                } else {
                    Err(raised)
                }
            }
        }
    };
}

impl_selector_for_tuple!(S1);
impl_selector_for_tuple!(S1, S2);
impl_selector_for_tuple!(S1, S2, S3);
impl_selector_for_tuple!(S1, S2, S3, S4);
impl_selector_for_tuple!(S1, S2, S3, S4, S5);
impl_selector_for_tuple!(S1, S2, S3, S4, S5, S6);
impl_selector_for_tuple!(S1, S2, S3, S4, S5, S6, S7);
impl_selector_for_tuple!(S1, S2, S3, S4, S5, S6, S7, S8);
