//! Wire-format domain names and label sequences.
//!
//! This crate provides the low-level building blocks for working with
//! domain names in their DNS wire format: a validated, immutable encoded
//! name and a cheap, trimmable view of a run of its labels that carries
//! the comparison rules of the DNS.
//!
//! The two main types are:
//!
//! * [`WireName`], an encoded domain name atop any octets sequence,
//!   validated on construction and carrying a precomputed table of label
//!   offsets, and
//! * [`LabelSequence`], a non-owning view of a contiguous run of a name’s
//!   labels that can be narrowed label by label from either end and
//!   compared, matched, and hashed with or without ASCII case folding.
//!
//! Comparing two sequences yields a [`NameComparison`] describing their
//! [relation][NameRelation] in the name tree, the number of labels they
//! share, and the ordering at the point where they diverge. This is the
//! primitive behind zone-cut lookup, canonical ordering of names, and
//! name compression.
//!
//! Individual labels are represented by [`Label`], an unsized wrapper
//! around the label’s content octets.
//!
//! The crate is `no_std` by default. The `std` feature, enabled by
//! default, adds `std::error::Error` impls for the error types.
#![no_std]
#![allow(clippy::uninlined_format_args)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

mod cmp;
mod label;
mod name;
mod sequence;

pub use self::cmp::{NameComparison, NameRelation};
pub use self::label::{
    Label, LabelTypeError, LongLabelError, SplitLabelError,
};
pub use self::name::{NameError, WireName};
pub use self::sequence::{LabelIter, LabelSequence, OutOfRangeError};
