//! Failures carried by an [`Outcome`] or raised by accessors.
//!
//! [`Outcome`]: crate::Outcome

use std::{error::Error as StdError, fmt, ptr};

use derive_more::{Display, Error};

/// Capability of being carried in an [`Outcome::Failure`].
///
/// Implemented for every [`std::error::Error`] which can cross a panic
/// boundary, and for the type-erased [`Raised`] failure.
///
/// [`Outcome::Failure`]: crate::Outcome::Failure
pub trait Fault: fmt::Debug + Send + 'static {}

impl<E: StdError + Send + 'static> Fault for E {}

impl Fault for Raised {}

/// Error of accessing a value which isn't there.
///
/// Used as a panic payload by [`Optional::unwrap()`], [`Optional::expect()`]
/// and [`Outcome::expect()`], so it may be recovered with
/// [`Box::downcast()`] after [`std::panic::catch_unwind()`].
///
/// [`Optional::expect()`]: crate::Optional::expect
/// [`Optional::unwrap()`]: crate::Optional::unwrap
/// [`Outcome::expect()`]: crate::Outcome::expect
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display(fmt = "{}", message)]
pub struct InvalidState {
    /// Diagnostic message of this [`InvalidState`].
    message: String,
}

impl InvalidState {
    /// Creates a new [`InvalidState`] error with the provided `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the diagnostic message of this [`InvalidState`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Type-erased failure returned by a fallible function.
///
/// Remembers its concrete kind, so it can be tested with [`Raised::is()`] and
/// recovered with [`Raised::downcast()`].
///
/// Two [`Raised`] values are equal only if they're the same failure object.
#[derive(Display)]
#[display(fmt = "{}", _0)]
pub struct Raised(anyhow::Error);

impl Raised {
    /// Wraps the provided `error` into a [`Raised`] failure.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(anyhow::Error::new(error))
    }

    /// Wraps the provided type-erased `boxed` error into a [`Raised`] failure.
    ///
    /// Useful for functions failing with a `Box<dyn Error + Send + Sync>`,
    /// which doesn't implement [`StdError`] itself, so can't be converted with
    /// [`From`]. The concrete kind of such failure is erased, so select it
    /// with [`AnyFailure`].
    ///
    /// [`AnyFailure`]: crate::AnyFailure
    #[must_use]
    pub fn from_boxed(
        boxed: Box<dyn StdError + Send + Sync + 'static>,
    ) -> Self {
        Self(anyhow::Error::from_boxed(boxed))
    }

    /// Indicates whether this failure is of the `K` kind.
    #[must_use]
    pub fn is<K>(&self) -> bool
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.is::<K>()
    }

    /// Borrows this failure as the `K` kind, if it's of that kind.
    #[must_use]
    pub fn downcast_ref<K>(&self) -> Option<&K>
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<K>()
    }

    /// Recovers the concrete `K` failure.
    ///
    /// # Errors
    ///
    /// Gives back this [`Raised`] unchanged if it's not of the `K` kind.
    pub fn downcast<K>(self) -> Result<K, Self>
    where
        K: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast::<K>().map_err(Self)
    }

    /// Unwraps the underlying [`anyhow::Error`].
    #[must_use]
    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl<E> From<E> for Raised
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Raised {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

// Renders the concrete failure, so `Failure(Raised)` reads as
// `Failure(NameError)`.
impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl PartialEq for Raised {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(&*self.0, &*other.0)
    }
}

#[cfg(test)]
mod spec {
    use derive_more::{Display, Error};

    use super::{InvalidState, Raised};

    #[derive(Debug, Display, Error)]
    #[display(fmt = "name error")]
    struct NameError;

    #[derive(Debug, Display, Error)]
    #[display(fmt = "attribute error")]
    struct AttributeError;

    #[test]
    fn invalid_state_displays_its_message() {
        let err = InvalidState::new("nothing here");

        assert_eq!(err.message(), "nothing here");
        assert_eq!(err.to_string(), "nothing here");
    }

    #[test]
    fn raised_remembers_its_kind() {
        let raised = Raised::from(NameError);

        assert!(raised.is::<NameError>());
        assert!(!raised.is::<AttributeError>());
        assert!(raised.downcast_ref::<NameError>().is_some());
        assert_eq!(raised.to_string(), "name error");
        assert_eq!(format!("{raised:?}"), "NameError");
    }

    #[test]
    fn raised_wraps_boxed_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(NameError);

        let raised = Raised::from_boxed(boxed);

        assert_eq!(raised.to_string(), "name error");
    }

    #[test]
    fn raised_downcast_gives_back_on_mismatch() {
        let raised = Raised::new(NameError);

        let raised = raised.downcast::<AttributeError>().unwrap_err();
        assert!(raised.downcast::<NameError>().is_ok());
    }

    #[test]
    fn raised_compares_by_identity() {
        let first = Raised::new(NameError);
        let second = Raised::new(NameError);

        let same = &first;
        assert_eq!(same, &first);
        assert_ne!(first, second);
    }
}
