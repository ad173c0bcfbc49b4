#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_qualifications,
    unused_results
)]

#[doc(hidden)]
pub mod private;

#[doc(inline)]
pub use exception_core::{
    adapter, as_optional, as_outcome, catching, failure, optional, outcome,
    AnyFailure, Fault, InvalidState, Kind, Optional, Outcome, Raised, Selector,
};

#[cfg(feature = "codegen")]
#[doc(inline)]
pub use exception_codegen::{as_optional, as_outcome};
