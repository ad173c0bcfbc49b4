//! [`Optional`] value machinery.

use std::panic;

use crate::failure::InvalidState;

/// Optional value: either [`Present`] and holding a value, or [`Absent`] and
/// holding nothing.
///
/// Unlike a sentinel value, an [`Optional`] must be inspected explicitly
/// before its value can be used.
///
/// # Example
///
/// ```rust
/// # use exception_core::Optional;
/// #
/// let answer = Optional::Present(42);
/// assert!(answer.is_present());
/// assert_eq!(answer.map(|v| v + 1), Optional::Present(43));
///
/// let nothing = Optional::<i32>::ABSENT;
/// assert_eq!(nothing.unwrap_or(7), 7);
/// assert_eq!(format!("{nothing:?}"), "Absent");
/// ```
///
/// [`Absent`]: Optional::Absent
/// [`Present`]: Optional::Present
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Optional<T> {
    /// Value is there.
    Present(T),

    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// The one and only [`Absent`](Optional::Absent) value.
    pub const ABSENT: Self = Self::Absent;

    /// Indicates whether this [`Optional`] is [`Present`](Optional::Present).
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Indicates whether this [`Optional`] is [`Absent`](Optional::Absent).
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the [`Present`] value.
    ///
    /// Prefer [`Optional::unwrap_or()`] or [`Optional::unwrap_or_else()`],
    /// as this method is the last resort.
    ///
    /// # Panics
    ///
    /// With an [`InvalidState`] payload if this [`Optional`] is [`Absent`].
    ///
    /// [`Absent`]: Optional::Absent
    /// [`Present`]: Optional::Present
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(v) => v,
            Err(e) => panic::panic_any(e),
        }
    }

    /// Returns the [`Present`](Optional::Present) value, or [`InvalidState`]
    /// error otherwise.
    ///
    /// # Errors
    ///
    /// If this [`Optional`] is [`Absent`](Optional::Absent).
    pub fn try_unwrap(self) -> Result<T, InvalidState> {
        match self {
            Self::Present(v) => Ok(v),
            Self::Absent => {
                Err(InvalidState::new("trying to unwrap an `Absent` value"))
            }
        }
    }

    /// Returns the [`Present`](Optional::Present) value, or the provided
    /// `default` one.
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => default,
        }
    }

    /// Returns the [`Present`](Optional::Present) value, or computes it with
    /// the provided `supplier`.
    ///
    /// The `supplier` is invoked on [`Absent`](Optional::Absent) only.
    #[must_use]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(v) => v,
            Self::Absent => supplier(),
        }
    }

    /// Maps the [`Present`](Optional::Present) value with the provided
    /// `transform`, leaving [`Absent`](Optional::Absent) as is.
    ///
    /// The `transform` is never invoked on [`Absent`](Optional::Absent).
    pub fn map<U, F>(self, transform: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(v) => Optional::Present(transform(v)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns the [`Present`](Optional::Present) value.
    ///
    /// # Panics
    ///
    /// With an [`InvalidState`] payload carrying the provided `message`, if
    /// this [`Optional`] is [`Absent`](Optional::Absent).
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(v) => v,
            Self::Absent => panic::panic_any(InvalidState::new(message)),
        }
    }

    /// Borrows the [`Present`](Optional::Present) value.
    ///
    /// Behaves exactly as [`Optional::unwrap()`], but doesn't consume this
    /// [`Optional`].
    ///
    /// # Panics
    ///
    /// With an [`InvalidState`] payload if this [`Optional`] is
    /// [`Absent`](Optional::Absent).
    #[track_caller]
    pub fn value(&self) -> &T {
        self.as_ref().unwrap()
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(v) => Optional::Present(v),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts this [`Optional`] into a standard [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Absent, Self::Present)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(opt: Optional<T>) -> Self {
        match opt {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, panic};

    use super::{InvalidState, Optional};

    /// Runs the provided `f`, expecting it to panic with an [`InvalidState`]
    /// payload, and returns that payload.
    fn invalid_state<R>(f: impl FnOnce() -> R) -> InvalidState {
        let payload = panic::catch_unwind(panic::AssertUnwindSafe(f))
            .map(drop)
            .unwrap_err();
        *payload.downcast::<InvalidState>().unwrap()
    }

    #[test]
    fn queries_variant() {
        assert!(Optional::Present("some").is_present());
        assert!(!Optional::Present("some").is_absent());
        assert!(Optional::<&str>::ABSENT.is_absent());
        assert!(!Optional::<&str>::ABSENT.is_present());
    }

    #[test]
    fn compares_by_value() {
        assert_eq!(Optional::Present("a"), Optional::Present("a"));
        assert_ne!(Optional::Present(1), Optional::Present(2));
        assert_ne!(Optional::Present("a"), Optional::Absent);
        assert_eq!(Optional::<i32>::Absent, Optional::ABSENT);
    }

    #[test]
    fn renders_variant_name() {
        assert_eq!(format!("{:?}", Optional::Present("a")), r#"Present("a")"#);
        assert_eq!(format!("{:?}", Optional::<u8>::ABSENT), "Absent");
    }

    #[test]
    fn unwraps_present() {
        assert_eq!(Optional::Present("some").unwrap(), "some");
        assert_eq!(Optional::Present("some").value(), &"some");
    }

    #[test]
    fn unwrap_panics_on_absent() {
        let err = invalid_state(|| Optional::<u8>::ABSENT.unwrap());
        assert_eq!(err.message(), "trying to unwrap an `Absent` value");

        let err = invalid_state(|| *Optional::<u8>::ABSENT.value());
        assert_eq!(err.message(), "trying to unwrap an `Absent` value");
    }

    #[test]
    fn try_unwrap_doesnt_panic() {
        assert_eq!(Optional::Present(1).try_unwrap(), Ok(1));
        assert!(Optional::<u8>::ABSENT.try_unwrap().is_err());
    }

    #[test]
    fn unwraps_or_default() {
        assert_eq!(Optional::Present("some").unwrap_or("other"), "some");
        assert_eq!(Optional::ABSENT.unwrap_or("other"), "other");
    }

    #[test]
    fn unwraps_or_else_lazily() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            "other"
        };

        assert_eq!(Optional::Present("some").unwrap_or_else(supplier), "some");
        assert_eq!(calls.get(), 0);

        assert_eq!(Optional::ABSENT.unwrap_or_else(supplier), "other");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn maps_present_only() {
        let calls = Cell::new(0);
        let inc = |x: i32| {
            calls.set(calls.get() + 1);
            x + 1
        };

        assert_eq!(Optional::Present(5).map(inc), Optional::Present(6));
        assert_eq!(Optional::ABSENT.map(inc), Optional::Absent);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn expect_panics_with_message() {
        assert_eq!(Optional::Present("some").expect("other error"), "some");

        let err = invalid_state(|| Optional::<u8>::ABSENT.expect("other error"));
        assert_eq!(err.message(), "other error");
    }

    #[test]
    fn destructures() {
        match Optional::Present("some") {
            Optional::Present(v) => assert_eq!(v, "some"),
            Optional::Absent => panic!("expected `Present`"),
        }
    }

    #[test]
    fn converts_from_and_into_option() {
        assert_eq!(Optional::from(Some(3)), Optional::Present(3));
        assert_eq!(Optional::<u8>::from(None), Optional::Absent);
        assert_eq!(Optional::Present(3).into_option(), Some(3));
        assert_eq!(Option::<u8>::from(Optional::Absent), None);
        assert_eq!(Optional::<u8>::default(), Optional::ABSENT);
    }
}
