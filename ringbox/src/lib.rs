#![deny(missing_docs)]
//! # ringbox — first-class algebraic structures
//!
//! Semigroups, monoids, groups, and rings, available two ways:
//!
//! - [`class`]: a **trait hierarchy** for compile-time dispatch —
//!   `Semigroup::combine`, `Monoid::empty`/`concat`, `Group::inverse`,
//!   with marker traits for commutativity.
//! - [`instance`]: the same structures as **first-class values**
//!   (dictionaries of operations) that can be constructed at runtime,
//!   transformed along bijections with `map`, and composed — e.g. a
//!   [`instance::Ring`] from a caller-chosen additive group and
//!   multiplicative monoid.
//!
//! Plus:
//!
//! - [`primitives`]: newtype wrappers picking an operation for plain
//!   carriers ([`primitives::Sum`], [`primitives::Product`],
//!   [`primitives::Xor`], [`primitives::Endo`], …).
//! - [`concat_stream_ext`] *(feature = "async")*: fold a
//!   `futures::Stream` with `combine`.
//! - [`sequenced`] *(feature = "async")*: sequence asynchronous
//!   computations and combine their results under an inner structure.
//! - Derive macros *(feature = "derive")*: componentwise
//!   `#[derive(Semigroup)]`, `Monoid`, `CommutativeMonoid`, `Group`,
//!   `AbelianGroup` for product types.
//!
//! ## Laws
//!
//! Every structure carries laws — associativity, identity, inverse,
//! commutativity, distributivity — that are **caller obligations**:
//! the records and traits are opaque, so nothing is (or can be)
//! checked at runtime. Each constructor documents what it demands; the
//! crate's test suite covers the provided instances with property
//! tests.
//!
//! ## Quick start
//!
//! ```rust
//! use ringbox::class::{Monoid, Semigroup};
//! use ringbox::primitives::Sum;
//!
//! // Trait path: compile-time dispatch.
//! assert_eq!(Sum::concat(vec![Sum(1), Sum(2), Sum(3), Sum(4)]), Sum(10));
//!
//! // Dictionary path: structures as values.
//! use ringbox::instance::monoid;
//! let m = monoid::add_mod(12); // modulus chosen at runtime
//! assert_eq!(m.concat(vec![7, 8, 11]), 2);
//! ```
//!
//! ## Features
//!
//! - **`async`** *(enabled by default)*: [`concat_stream_ext`] and
//!   [`sequenced`]; requires `futures` (and `tokio` for the tests).
//! - **`derive`** *(enabled by default)*: the derive macros.
//!
//! To use only the core algebra:
//! ```toml
//! ringbox = { version = "…", default-features = false }
//! ```

// Make the current crate visible as `ringbox` so the derive macros
// that expand to `::ringbox::...` work both here and in downstream
// crates.
extern crate self as ringbox;

pub mod class;
pub mod instance;
pub mod primitives;

#[cfg(feature = "async")]
pub mod concat_stream_ext;

#[cfg(feature = "async")]
pub mod sequenced;

pub use class::AbelianGroup;
pub use class::Appendable;
pub use class::CommutativeMonoid;
pub use class::CommutativeSemigroup;
pub use class::Group;
pub use class::Monoid;
pub use class::Semigroup;

#[cfg(feature = "derive")]
pub use ringbox_derive::AbelianGroup;
#[cfg(feature = "derive")]
pub use ringbox_derive::CommutativeMonoid;
#[cfg(feature = "derive")]
pub use ringbox_derive::Group;
#[cfg(feature = "derive")]
pub use ringbox_derive::Monoid;
#[cfg(feature = "derive")]
pub use ringbox_derive::Semigroup;
