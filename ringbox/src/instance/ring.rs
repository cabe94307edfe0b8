//! First-class rings: an additive abelian group paired with a
//! multiplicative monoid.

use std::ops::Neg;

use num_traits::One;
use num_traits::Zero;

use crate::instance::group;
use crate::instance::monoid;
use crate::instance::AbelianGroup;
use crate::instance::CommutativeMonoid;
use crate::instance::Monoid;

/// A first-class **ring** over `A`.
///
/// A ring asserts no new operations: it is purely a named pairing of
/// an additive [`AbelianGroup`] and a multiplicative [`Monoid`] over
/// the same carrier. Distributivity of multiplication over addition
/// (`mul(a, add(b, c)) == add(mul(a, b), mul(a, c))`, and
/// symmetrically on the right) is a law the caller must uphold when
/// choosing the two components; it cannot be mechanically checked.
///
/// # Example
///
/// ```rust
/// use ringbox::instance::ring;
///
/// let z = ring::numeric::<i64>();
/// assert_eq!(z.add(2, 3), 5);
/// assert_eq!(z.mul(2, 3), 6);
/// assert_eq!(z.neg(5), -5);
/// assert_eq!(z.zero(), 0);
/// assert_eq!(z.one(), 1);
/// ```
pub struct Ring<A> {
    addition: AbelianGroup<A>,
    multiplication: Monoid<A>,
}

impl<A: Clone> Clone for Ring<A> {
    fn clone(&self) -> Self {
        Ring {
            addition: self.addition.clone(),
            multiplication: self.multiplication.clone(),
        }
    }
}

impl<A> std::fmt::Debug for Ring<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Ring(..)")
    }
}

impl<A> Ring<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Pair caller-chosen addition and multiplication (distributivity
    /// is the caller's obligation).
    pub fn new(addition: AbelianGroup<A>, multiplication: Monoid<A>) -> Self {
        Ring {
            addition,
            multiplication,
        }
    }

    /// The additive group.
    pub fn addition(&self) -> &AbelianGroup<A> {
        &self.addition
    }

    /// The multiplicative monoid.
    pub fn multiplication(&self) -> &Monoid<A> {
        &self.multiplication
    }

    /// Add two elements.
    pub fn add(&self, x: A, y: A) -> A {
        self.addition.prepend(x, y)
    }

    /// Multiply two elements.
    pub fn mul(&self, x: A, y: A) -> A {
        self.multiplication.prepend(x, y)
    }

    /// The additive inverse.
    pub fn neg(&self, x: A) -> A {
        self.addition.inverse(x)
    }

    /// The additive identity.
    pub fn zero(&self) -> A {
        self.addition.identity()
    }

    /// The multiplicative identity.
    pub fn one(&self) -> A {
        self.multiplication.identity()
    }

    /// Transport along a bijection `A ↔ B`, mapping both components.
    /// Same round-trip obligation as
    /// [`crate::instance::Semigroup::map`].
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + Clone + 'static,
        from: impl Fn(B) -> A + Send + Sync + Clone + 'static,
    ) -> Ring<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        Ring {
            addition: self.addition.map(to.clone(), from.clone()),
            multiplication: self.multiplication.map(to, from),
        }
    }
}

/// A ring whose multiplication is additionally commutative.
pub struct CommutativeRing<A> {
    addition: AbelianGroup<A>,
    multiplication: CommutativeMonoid<A>,
}

impl<A: Clone> Clone for CommutativeRing<A> {
    fn clone(&self) -> Self {
        CommutativeRing {
            addition: self.addition.clone(),
            multiplication: self.multiplication.clone(),
        }
    }
}

impl<A> std::fmt::Debug for CommutativeRing<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CommutativeRing(..)")
    }
}

impl<A> CommutativeRing<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Pair caller-chosen addition and commutative multiplication.
    pub fn new(addition: AbelianGroup<A>, multiplication: CommutativeMonoid<A>) -> Self {
        CommutativeRing {
            addition,
            multiplication,
        }
    }

    /// The additive group.
    pub fn addition(&self) -> &AbelianGroup<A> {
        &self.addition
    }

    /// The multiplicative monoid.
    pub fn multiplication(&self) -> &CommutativeMonoid<A> {
        &self.multiplication
    }

    /// Add two elements.
    pub fn add(&self, x: A, y: A) -> A {
        self.addition.prepend(x, y)
    }

    /// Multiply two elements; order does not matter.
    pub fn mul(&self, x: A, y: A) -> A {
        self.multiplication.prepend(x, y)
    }

    /// The additive inverse.
    pub fn neg(&self, x: A) -> A {
        self.addition.inverse(x)
    }

    /// The additive identity.
    pub fn zero(&self) -> A {
        self.addition.identity()
    }

    /// The multiplicative identity.
    pub fn one(&self) -> A {
        self.multiplication.identity()
    }

    /// Forget commutativity of multiplication.
    pub fn into_ring(self) -> Ring<A> {
        Ring {
            addition: self.addition,
            multiplication: self.multiplication.into_monoid(),
        }
    }

    /// Transport along a bijection; both tags survive.
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + Clone + 'static,
        from: impl Fn(B) -> A + Send + Sync + Clone + 'static,
    ) -> CommutativeRing<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        CommutativeRing {
            addition: self.addition.map(to.clone(), from.clone()),
            multiplication: self.multiplication.map(to, from),
        }
    }
}

// Instance catalog

/// The numeric ring: addition group + multiplication monoid.
pub fn numeric<T>() -> CommutativeRing<T>
where
    T: Zero + One + Clone + Neg<Output = T> + Send + Sync + 'static,
{
    CommutativeRing::new(group::sum(), monoid::product())
}

/// The Boolean ring: addition is XOR, multiplication is AND.
pub fn boolean() -> CommutativeRing<bool> {
    CommutativeRing::new(group::xor(), monoid::all())
}

/// The trivial one-element ring.
pub fn trivial() -> CommutativeRing<()> {
    CommutativeRing::new(group::trivial(), monoid::trivial())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ring_arithmetic() {
        let z = numeric::<i64>();
        assert_eq!(z.add(2, 3), 5);
        assert_eq!(z.mul(2, 3), 6);
        assert_eq!(z.zero(), 0);
        assert_eq!(z.one(), 1);
        assert_eq!(z.add(5, z.neg(5)), 0);
    }

    #[test]
    fn numeric_ring_distributes() {
        let z = numeric::<i64>();
        for (a, b, c) in [(2, 3, 4), (-1, 5, 7), (0, -2, 9)] {
            assert_eq!(z.mul(a, z.add(b, c)), z.add(z.mul(a, b), z.mul(a, c)));
            assert_eq!(z.mul(z.add(b, c), a), z.add(z.mul(b, a), z.mul(c, a)));
        }
    }

    #[test]
    fn boolean_ring_tables() {
        let b = boolean();
        assert_eq!(b.add(true, true), false);
        assert_eq!(b.add(true, false), true);
        assert_eq!(b.mul(true, false), false);
        assert_eq!(b.mul(true, true), true);
        assert_eq!(b.zero(), false);
        assert_eq!(b.one(), true);
    }

    #[test]
    fn boolean_ring_distributes_everywhere() {
        let r = boolean();
        for a in [false, true] {
            for x in [false, true] {
                for y in [false, true] {
                    assert_eq!(r.mul(a, r.add(x, y)), r.add(r.mul(a, x), r.mul(a, y)));
                    assert_eq!(r.mul(r.add(x, y), a), r.add(r.mul(x, a), r.mul(y, a)));
                }
            }
        }
    }

    #[test]
    fn trivial_ring_is_inert() {
        let t = trivial();
        assert_eq!(t.add((), ()), ());
        assert_eq!(t.mul((), ()), ());
    }

    #[test]
    fn runtime_selected_pairing() {
        // The whole point of the dictionary layer: choose components
        // at runtime and pair them.
        let odd_modulus = 7u64;
        let r = Ring::new(
            group::add_mod(odd_modulus),
            monoid::mul_mod(odd_modulus).into_monoid(),
        );
        assert_eq!(r.add(5, 4), 2);
        assert_eq!(r.mul(5, 4), 6);
    }

    #[test]
    fn map_transports_both_components() {
        // Transport the numeric ring along the bijection x <-> -x.
        // Addition is preserved; multiplication picks up a sign.
        let z = numeric::<i64>();
        let w = z.map(|x: i64| -x, |y: i64| -y);
        assert_eq!(w.add(2, 3), 5);
        assert_eq!(w.zero(), 0);
        assert_eq!(w.mul(2, 3), -6);
        assert_eq!(w.one(), -1);
    }
}
