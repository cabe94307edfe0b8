//! Newtype wrappers attaching a specific operation to a plain carrier.
//!
//! Bare numeric types have no canonical monoid (addition and
//! multiplication are both reasonable), so this crate never implements
//! the algebra traits for `i32` or `f64` directly. Instead, a wrapper
//! picks the operation:
//!
//! - [`Sum`] / [`Product`]: numeric addition / multiplication
//! - [`Any`] / [`All`]: boolean OR / AND
//! - [`Xor`]: boolean exclusive-or (every element is its own inverse)
//! - [`First`]: first present optional value wins
//! - [`Endo`]: endofunction composition
//! - [`Modular`]: addition modulo a const `N`
//! - [`Effect`]: opaque batched side-effect descriptor
//!
//! # Example
//!
//! ```rust
//! use ringbox::class::{Monoid, Semigroup};
//! use ringbox::primitives::Sum;
//!
//! let total = Sum::concat(vec![Sum(1), Sum(2), Sum(3), Sum(4)]);
//! assert_eq!(total, Sum(10));
//! ```

use std::ops::Neg;
use std::sync::Arc;

use num_traits::One;
use num_traits::Zero;

use crate::class::AbelianGroup;
use crate::class::CommutativeMonoid;
use crate::class::CommutativeSemigroup;
use crate::class::Group;
use crate::class::Monoid;
use crate::class::Semigroup;

// combine = +

/// Newtype wrapper turning a numeric type into its **additive** monoid.
///
/// - `Sum(a).combine(&Sum(b)) == Sum(a + b)`
/// - Identity is `Sum(0)`
/// - With `T: Neg`, the inverse is negation, giving the additive
///   [`AbelianGroup`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T: Zero + Clone> Semigroup for Sum<T> {
    fn combine(&self, other: &Self) -> Self {
        Sum(self.0.clone() + other.0.clone())
    }
}

impl<T: Zero + Clone> CommutativeSemigroup for Sum<T> {}

impl<T: Zero + Clone> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::zero())
    }
}

impl<T: Zero + Clone> CommutativeMonoid for Sum<T> {}

impl<T: Zero + Clone + Neg<Output = T>> Group for Sum<T> {
    fn inverse(&self) -> Self {
        Sum(-self.0.clone())
    }
}

impl<T: Zero + Clone + Neg<Output = T>> AbelianGroup for Sum<T> {}

// combine = *

/// Newtype wrapper turning a numeric type into its **multiplicative**
/// monoid.
///
/// - `Product(a).combine(&Product(b)) == Product(a * b)`
/// - Identity is `Product(1)`
///
/// No `Group` impl: zero has no multiplicative inverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

impl<T: One + Clone> Semigroup for Product<T> {
    fn combine(&self, other: &Self) -> Self {
        Product(self.0.clone() * other.0.clone())
    }
}

impl<T: One + Clone> CommutativeSemigroup for Product<T> {}

impl<T: One + Clone> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

impl<T: One + Clone> CommutativeMonoid for Product<T> {}

// combine = OR

/// Boolean wrapper where `combine` is logical OR; identity is `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(&self, other: &Self) -> Self {
        Any(self.0 || other.0)
    }
}

impl CommutativeSemigroup for Any {}

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }
}

impl CommutativeMonoid for Any {}

// combine = AND

/// Boolean wrapper where `combine` is logical AND; identity is `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(&self, other: &Self) -> Self {
        All(self.0 && other.0)
    }
}

impl CommutativeSemigroup for All {}

impl Monoid for All {
    fn empty() -> Self {
        All(true)
    }
}

impl CommutativeMonoid for All {}

// combine = XOR

/// Boolean wrapper where `combine` is exclusive-or.
///
/// - Identity is `Xor(false)`
/// - Every element is its own inverse: `x ^ x == false`, so this is an
///   [`AbelianGroup`] with `inverse` the identity function. Paired with
///   [`All`] as multiplication it forms the Boolean ring (see
///   [`crate::instance::ring::boolean`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Xor(pub bool);

impl Semigroup for Xor {
    fn combine(&self, other: &Self) -> Self {
        Xor(self.0 ^ other.0)
    }
}

impl CommutativeSemigroup for Xor {}

impl Monoid for Xor {
    fn empty() -> Self {
        Xor(false)
    }
}

impl CommutativeMonoid for Xor {}

impl Group for Xor {
    fn inverse(&self) -> Self {
        *self
    }
}

impl AbelianGroup for Xor {}

// combine = first Some wins

/// Optional-value wrapper where the **first present value wins**.
///
/// Unlike the `Option<M>` lift in [`crate::class`], which combines two
/// present values with the inner semigroup, `First` always keeps the
/// left one:
///
/// - `First(Some(3)).combine(&First(Some(5))) == First(Some(3))`
/// - `First(None).combine(&First(Some(5))) == First(Some(5))`
/// - Identity is `First(None)`
///
/// Not commutative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<T>(pub Option<T>);

impl<T: Clone> Semigroup for First<T> {
    fn combine(&self, other: &Self) -> Self {
        if self.0.is_some() {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<T: Clone> Monoid for First<T> {
    fn empty() -> Self {
        First(None)
    }
}

// combine = function composition

/// An endofunction `A -> A` as a monoid under composition.
///
/// `combine` runs `self` first, then `other` (left-to-right pipeline):
///
/// ```rust
/// use ringbox::class::{Monoid, Semigroup};
/// use ringbox::primitives::Endo;
///
/// let add_one = Endo::new(|x: i32| x + 1);
/// let double = Endo::new(|x: i32| x * 2);
///
/// // (add_one ; double)(3) = (3 + 1) * 2
/// assert_eq!(add_one.combine(&double).apply(3), 8);
/// // Composition is not commutative
/// assert_eq!(double.combine(&add_one).apply(3), 7);
/// // Identity is the identity function
/// assert_eq!(Endo::<i32>::empty().apply(3), 3);
/// ```
///
/// The function is held behind an [`Arc`], so cloning an `Endo` is
/// cheap and composition shares the originals.
pub struct Endo<A>(Arc<dyn Fn(A) -> A + Send + Sync>);

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Endo(Arc::clone(&self.0))
    }
}

impl<A> Endo<A> {
    /// Wrap a function.
    pub fn new(f: impl Fn(A) -> A + Send + Sync + 'static) -> Self {
        Endo(Arc::new(f))
    }

    /// Apply the function.
    pub fn apply(&self, a: A) -> A {
        (self.0)(a)
    }
}

impl<A> std::fmt::Debug for Endo<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Endo(..)")
    }
}

impl<A: 'static> Semigroup for Endo<A> {
    fn combine(&self, other: &Self) -> Self {
        let f = Arc::clone(&self.0);
        let g = Arc::clone(&other.0);
        Endo(Arc::new(move |a| g(f(a))))
    }
}

impl<A: 'static> Monoid for Endo<A> {
    fn empty() -> Self {
        Endo(Arc::new(|a| a))
    }
}

// combine = addition mod N

/// Addition modulo a const `N`, as an [`AbelianGroup`].
///
/// Values are kept reduced: construct with [`Modular::new`], which
/// reduces its argument mod `N`.
///
/// ```rust
/// use ringbox::class::{Group, Monoid, Semigroup};
///
/// type Z5 = ringbox::primitives::Modular<5>;
///
/// let x = Z5::new(3);
/// let y = Z5::new(4);
/// assert_eq!(x.combine(&y), Z5::new(2));
/// assert_eq!(x.combine(&x.inverse()), Z5::empty());
/// ```
///
/// For a modulus chosen at runtime, use
/// [`crate::instance::monoid::add_mod`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Modular<const N: u64>(u64);

impl<const N: u64> Modular<N> {
    /// Wrap a value, reducing it mod `N`.
    pub fn new(x: u64) -> Self {
        Modular(x % N)
    }

    /// The reduced representative in `0..N`.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl<const N: u64> Semigroup for Modular<N> {
    fn combine(&self, other: &Self) -> Self {
        Modular((self.0 + other.0) % N)
    }
}

impl<const N: u64> CommutativeSemigroup for Modular<N> {}

impl<const N: u64> Monoid for Modular<N> {
    fn empty() -> Self {
        Modular(0)
    }
}

impl<const N: u64> CommutativeMonoid for Modular<N> {}

impl<const N: u64> Group for Modular<N> {
    fn inverse(&self) -> Self {
        Modular((N - self.0) % N)
    }
}

impl<const N: u64> AbelianGroup for Modular<N> {}

// combine = batching

/// An opaque descriptor of side effects that combine by **batching**.
///
/// An `Effect` never runs anything; it is a value describing work to be
/// done, labelled for inspection. Combining two descriptors produces a
/// batch that performs the left one's operations before the right
/// one's, and the no-op descriptor is the identity.
///
/// ```rust
/// use ringbox::class::{Monoid, Semigroup};
/// use ringbox::primitives::Effect;
///
/// let batch = Effect::concat(vec![
///     Effect::op("write a"),
///     Effect::noop(),
///     Effect::op("write b"),
/// ]);
/// assert_eq!(batch.ops(), ["write a", "write b"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effect {
    ops: Vec<String>,
}

impl Effect {
    /// The descriptor that performs nothing.
    pub fn noop() -> Self {
        Effect { ops: Vec::new() }
    }

    /// A descriptor of a single labelled operation.
    pub fn op(label: impl Into<String>) -> Self {
        Effect {
            ops: vec![label.into()],
        }
    }

    /// Does this descriptor perform nothing?
    pub fn is_noop(&self) -> bool {
        self.ops.is_empty()
    }

    /// The labels of the batched operations, in execution order.
    pub fn ops(&self) -> &[String] {
        &self.ops
    }
}

impl Semigroup for Effect {
    fn combine(&self, other: &Self) -> Self {
        let mut ops = self.ops.clone();
        ops.extend(other.ops.iter().cloned());
        Effect { ops }
    }
}

impl Monoid for Effect {
    fn empty() -> Self {
        Effect::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_concat() {
        assert_eq!(Sum::concat(vec![Sum(1), Sum(2), Sum(3), Sum(4)]), Sum(10));
        assert_eq!(Sum::<i32>::empty(), Sum(0));
    }

    #[test]
    fn sum_associates() {
        let (x, y, z) = (Sum(1), Sum(2), Sum(3));
        assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
        assert_eq!(x.combine(&y).combine(&z), Sum(6));
    }

    #[test]
    fn sum_group_inverse() {
        let x = Sum(5i64);
        assert_eq!(x.combine(&x.inverse()), Sum::empty());
        assert_eq!(x.inverse().combine(&x), Sum::empty());
    }

    #[test]
    fn product_concat() {
        assert_eq!(
            Product::concat(vec![Product(1), Product(2), Product(3), Product(4)]),
            Product(24)
        );
        assert_eq!(Product::<i32>::empty(), Product(1));
    }

    #[test]
    fn boolean_identities() {
        assert_eq!(Any::empty(), Any(false));
        assert_eq!(All::empty(), All(true));
        assert_eq!(Any(false).combine(&Any(true)), Any(true));
        assert_eq!(All(true).combine(&All(false)), All(false));
    }

    #[test]
    fn xor_concat_and_self_inverse() {
        assert_eq!(Xor::concat(vec![Xor(true), Xor(true), Xor(false)]), Xor(false));
        for b in [true, false] {
            let x = Xor(b);
            assert_eq!(x.inverse(), x);
            assert_eq!(x.combine(&x.inverse()), Xor::empty());
        }
    }

    #[test]
    fn first_some_wins() {
        assert_eq!(First(None).combine(&First(Some(5))), First(Some(5)));
        assert_eq!(First(Some(3)).combine(&First(Some(5))), First(Some(3)));
        assert_eq!(First::<i32>::empty(), First(None));
    }

    #[test]
    fn endo_composes_left_to_right() {
        let add_one = Endo::new(|x: i32| x + 1);
        let double = Endo::new(|x: i32| x * 2);
        assert_eq!(add_one.combine(&double).apply(3), 8);
        assert_eq!(double.combine(&add_one).apply(3), 7);
        assert_eq!(Endo::<i32>::empty().apply(42), 42);
    }

    #[test]
    fn modular_wraps_and_inverts() {
        type Z7 = Modular<7>;
        assert_eq!(Z7::new(5).combine(&Z7::new(4)), Z7::new(2));
        assert_eq!(Z7::new(0).inverse(), Z7::new(0));
        let x = Z7::new(3);
        assert_eq!(x.combine(&x.inverse()), Z7::empty());
    }

    #[test]
    fn effects_batch_in_order() {
        let e = Effect::op("a").combine(&Effect::noop()).combine(&Effect::op("b"));
        assert_eq!(e.ops(), ["a", "b"]);
        assert!(Effect::empty().is_noop());
    }
}
