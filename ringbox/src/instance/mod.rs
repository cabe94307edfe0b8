//! First-class algebraic structures: dictionaries as ordinary values.
//!
//! Where [`crate::class`] resolves structure statically through trait
//! bounds, this module represents each structure as a **record of
//! operations** that can be constructed at runtime, stored, passed to
//! functions, and composed. This is what makes runtime-selected
//! composition expressible: a [`Ring`] is built from whichever
//! [`AbelianGroup`] and [`Monoid`] the caller hands it, a decision no
//! trait resolution can defer to runtime.
//!
//! Operations are held behind [`std::sync::Arc`], so every record is
//! immutable, cheap to clone, and freely shared across threads.
//! Dictionary operations take their arguments **by value**
//! (`prepend(A, A) -> A`), which also admits non-`Clone` carriers such
//! as boxed futures (see [`crate::sequenced`]).
//!
//! # Laws
//!
//! None of the algebraic laws are checked at runtime; the records are
//! opaque and the library has no way to inspect a supplied function's
//! mathematical properties. Each constructor documents the obligation
//! it places on the caller.
//!
//! # Example
//!
//! ```rust
//! use ringbox::instance::{monoid, ring, Monoid};
//!
//! // Instances are values: pick one at runtime.
//! let wrap_at: Option<u64> = None;
//! let m: Monoid<u64> = match wrap_at {
//!     Some(n) => monoid::add_mod(n).into_monoid(),
//!     None => monoid::sum().into_monoid(),
//! };
//! assert_eq!(m.concat(vec![1, 2, 3, 4]), 10);
//!
//! // Rings are pure pairings of caller-chosen components.
//! let b = ring::boolean();
//! assert_eq!(b.add(true, true), false);
//! assert_eq!(b.mul(true, false), false);
//! ```

pub mod group;
pub mod monoid;
pub mod ring;
pub mod semigroup;

pub use group::AbelianGroup;
pub use group::Group;
pub use monoid::CommutativeMonoid;
pub use monoid::Monoid;
pub use ring::CommutativeRing;
pub use ring::Ring;
pub use semigroup::CommutativeSemigroup;
pub use semigroup::Semigroup;
