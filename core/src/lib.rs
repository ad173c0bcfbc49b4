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

pub mod adapter;
pub mod failure;
pub mod optional;
pub mod outcome;

#[doc(inline)]
pub use self::{
    adapter::{as_optional, as_outcome, catching, AnyFailure, Kind, Selector},
    failure::{Fault, InvalidState, Raised},
    optional::Optional,
    outcome::Outcome,
};
