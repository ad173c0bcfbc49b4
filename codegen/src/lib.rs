#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", deny(rustdoc::all))]
#![deny(
    macro_use_extern_crate,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_qualifications,
    unused_results
)]

// Only for doc tests.
#[cfg(test)]
use exception as _;
// Only for generating documentation.
#[cfg(feature = "doc")]
use exception_core as _;

use exception_codegen_impl as codegen;
use proc_macro::TokenStream;

/// Macro adapting a function returning an [`Option<T>`] into one returning an
/// `Optional<T>`.
///
/// The adapted function keeps its name, attributes, visibility, generics and
/// arguments. Only its return type changes: [`None`] becomes
/// `Optional::Absent`, and anything else becomes `Optional::Present`.
///
/// `async` and `const` functions cannot be adapted.
///
/// # Example
///
/// ```rust
/// # use exception::{as_optional, Optional};
/// #
/// #[as_optional]
/// fn sample(data: &str) -> Option<i32> {
///     (data == "a").then_some(42)
/// }
///
/// assert_eq!(sample("a"), Optional::Present(42));
/// assert_eq!(sample("b"), Optional::Absent);
/// ```
#[proc_macro_attribute]
pub fn as_optional(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::optional::expand(args.into(), input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Macro adapting a fallible function returning a [`Result<T, E>`] into one
/// returning an `Outcome`.
///
/// The adapted function keeps its name, attributes, visibility, generics and
/// arguments. Only its return type changes, depending on the failure kinds
/// listed in the attribute arguments.
///
/// `async` and `const` functions cannot be adapted.
///
/// # Attribute arguments
///
/// #### `#[as_outcome]`
///
/// Any failure is captured, so the function returns an
/// `Outcome<T, Raised>`.
///
/// #### `#[as_outcome(Kind)]`
///
/// Only failures of the `Kind` type are captured, so the function returns a
/// `Result<Outcome<T, Kind>, Raised>`, where the [`Err`] holds any other
/// failure propagated unchanged.
///
/// #### `#[as_outcome(Kind1, Kind2, ...)]`
///
/// Only failures of any of the listed types are captured, so the function
/// returns a `Result<Outcome<T, Raised>, Raised>`, where the [`Err`] holds any
/// other failure propagated unchanged.
///
/// # Failure types
///
/// The function's error type must convert into a `Raised` failure, which any
/// `std::error::Error + Send + Sync + 'static` does. A boxed
/// `Box<dyn Error + Send + Sync>` doesn't, so return a `Result<T, Raised>`
/// and convert it with `Raised::from_boxed()` instead.
///
/// # Example
///
/// ```rust
/// # use std::{io, num::ParseIntError};
/// #
/// # use exception::{as_outcome, Outcome, Raised};
/// #
/// #[as_outcome(ParseIntError)]
/// fn parse(s: &str) -> Result<i32, Raised> {
///     if s.is_empty() {
///         return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
///     }
///     Ok(s.parse()?)
/// }
///
/// # fn main() -> Result<(), Raised> {
/// assert_eq!(parse("42")?, Outcome::Success(42));
/// assert!(parse("x")?.is_err());
/// assert!(parse("").unwrap_err().is::<io::Error>());
/// # Ok(())
/// # }
/// ```
#[proc_macro_attribute]
pub fn as_outcome(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::outcome::expand(args.into(), input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
