//! First-class groups and abelian groups.

use std::ops::Neg;
use std::sync::Arc;

use num_traits::Zero;

use crate::class;
use crate::instance::monoid;
use crate::instance::CommutativeMonoid;
use crate::instance::Monoid;

/// A first-class **group** over `A`: a [`Monoid`] plus an inverse
/// operation.
///
/// Law (caller obligation): `prepend(x, inverse(x)) == identity` and
/// `prepend(inverse(x), x) == identity` for all `x`.
pub struct Group<A> {
    monoid: Monoid<A>,
    inverse: Arc<dyn Fn(A) -> A + Send + Sync>,
}

impl<A: Clone> Clone for Group<A> {
    fn clone(&self) -> Self {
        Group {
            monoid: self.monoid.clone(),
            inverse: Arc::clone(&self.inverse),
        }
    }
}

impl<A> std::fmt::Debug for Group<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Group(..)")
    }
}

impl<A> Group<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Pair a monoid with an inverse function (caller obligation:
    /// `inverse` genuinely inverts under the monoid's operation).
    pub fn from_monoid_and_inverse(
        monoid: Monoid<A>,
        inverse: impl Fn(A) -> A + Send + Sync + 'static,
    ) -> Self {
        Group {
            monoid,
            inverse: Arc::new(inverse),
        }
    }

    /// The dictionary backed by a [`class::Group`] trait impl.
    pub fn of() -> Self
    where
        A: class::Group,
    {
        Group::from_monoid_and_inverse(Monoid::of(), |x: A| x.inverse())
    }

    /// Combine two values.
    pub fn prepend(&self, x: A, y: A) -> A {
        self.monoid.prepend(x, y)
    }

    /// A copy of the identity element.
    pub fn identity(&self) -> A {
        self.monoid.identity()
    }

    /// Fold a sequence into one value.
    pub fn concat(&self, xs: Vec<A>) -> A {
        self.monoid.concat(xs)
    }

    /// The inverse of a value.
    pub fn inverse(&self, x: A) -> A {
        (self.inverse)(x)
    }

    /// The underlying monoid.
    pub fn monoid(&self) -> &Monoid<A> {
        &self.monoid
    }

    /// Transport along a bijection `A ↔ B`: the monoid is mapped and
    /// the inverse becomes `to ∘ inverse ∘ from`. Same round-trip
    /// obligation as [`crate::instance::Semigroup::map`].
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> Group<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        let to = Arc::new(to);
        let from = Arc::new(from);
        let monoid = {
            let to = Arc::clone(&to);
            let from = Arc::clone(&from);
            self.monoid.map(move |x| to(x), move |y| from(y))
        };
        let inverse = {
            let inv = Arc::clone(&self.inverse);
            Arc::new(move |b: B| to(inv(from(b))))
        };
        Group { monoid, inverse }
    }
}

/// A commutative (abelian) first-class group: built over a
/// [`CommutativeMonoid`], so the additive half of a
/// [`Ring`](crate::instance::Ring) can demand it by type.
pub struct AbelianGroup<A> {
    monoid: CommutativeMonoid<A>,
    inverse: Arc<dyn Fn(A) -> A + Send + Sync>,
}

impl<A: Clone> Clone for AbelianGroup<A> {
    fn clone(&self) -> Self {
        AbelianGroup {
            monoid: self.monoid.clone(),
            inverse: Arc::clone(&self.inverse),
        }
    }
}

impl<A> std::fmt::Debug for AbelianGroup<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AbelianGroup(..)")
    }
}

impl<A> AbelianGroup<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// Pair a commutative monoid with an inverse function.
    pub fn from_commutative_monoid_and_inverse(
        monoid: CommutativeMonoid<A>,
        inverse: impl Fn(A) -> A + Send + Sync + 'static,
    ) -> Self {
        AbelianGroup {
            monoid,
            inverse: Arc::new(inverse),
        }
    }

    /// The dictionary backed by a [`class::AbelianGroup`] trait impl.
    pub fn of() -> Self
    where
        A: class::AbelianGroup,
    {
        AbelianGroup::from_commutative_monoid_and_inverse(CommutativeMonoid::of(), |x: A| {
            x.inverse()
        })
    }

    /// Combine two values; order does not matter.
    pub fn prepend(&self, x: A, y: A) -> A {
        self.monoid.prepend(x, y)
    }

    /// A copy of the identity element.
    pub fn identity(&self) -> A {
        self.monoid.identity()
    }

    /// Fold a sequence into one value.
    pub fn concat(&self, xs: Vec<A>) -> A {
        self.monoid.concat(xs)
    }

    /// The inverse of a value.
    pub fn inverse(&self, x: A) -> A {
        (self.inverse)(x)
    }

    /// The underlying commutative monoid.
    pub fn commutative_monoid(&self) -> &CommutativeMonoid<A> {
        &self.monoid
    }

    /// Forget commutativity, keeping the group structure.
    pub fn into_group(self) -> Group<A> {
        let inv = self.inverse;
        Group {
            monoid: self.monoid.into_monoid(),
            inverse: inv,
        }
    }

    /// Transport along a bijection; commutativity survives.
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> AbelianGroup<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        let to = Arc::new(to);
        let from = Arc::new(from);
        let monoid = {
            let to = Arc::clone(&to);
            let from = Arc::clone(&from);
            self.monoid.map(move |x| to(x), move |y| from(y))
        };
        let inverse = {
            let inv = Arc::clone(&self.inverse);
            Arc::new(move |b: B| to(inv(from(b))))
        };
        AbelianGroup { monoid, inverse }
    }
}

// Instance catalog

/// Numeric sum under negation.
pub fn sum<T>() -> AbelianGroup<T>
where
    T: Zero + Clone + Neg<Output = T> + Send + Sync + 'static,
{
    AbelianGroup::from_commutative_monoid_and_inverse(monoid::sum(), |x: T| -x)
}

/// Boolean exclusive-or: every element is its own inverse.
pub fn xor() -> AbelianGroup<bool> {
    AbelianGroup::from_commutative_monoid_and_inverse(monoid::xor(), |x| x)
}

/// The trivial one-element group.
pub fn trivial() -> AbelianGroup<()> {
    AbelianGroup::of()
}

/// Addition modulo `modulus` under the inverse `x ↦ (modulus − x) mod
/// modulus`.
pub fn add_mod(modulus: u64) -> AbelianGroup<u64> {
    AbelianGroup::from_commutative_monoid_and_inverse(monoid::add_mod(modulus), move |x| {
        (modulus - x % modulus) % modulus
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_inverse_cancels() {
        let g = sum::<i64>();
        for x in [-3, 0, 7] {
            assert_eq!(g.prepend(x, g.inverse(x)), g.identity());
            assert_eq!(g.prepend(g.inverse(x), x), g.identity());
        }
    }

    #[test]
    fn xor_is_self_inverse() {
        let g = xor();
        for b in [true, false] {
            assert_eq!(g.inverse(b), b);
            assert_eq!(g.prepend(b, g.inverse(b)), g.identity());
        }
    }

    #[test]
    fn trivial_group_is_inert() {
        let g = trivial();
        assert_eq!(g.prepend((), ()), ());
        assert_eq!(g.inverse(()), ());
        assert_eq!(g.identity(), ());
    }

    #[test]
    fn add_mod_inverse() {
        let g = add_mod(12);
        for x in [0, 1, 5, 11] {
            assert_eq!(g.prepend(x, g.inverse(x)), 0);
        }
    }

    #[test]
    fn of_bridges_from_trait_impl() {
        use crate::primitives::Xor;
        let g = AbelianGroup::<Xor>::of();
        assert_eq!(g.prepend(Xor(true), Xor(true)), Xor(false));
        assert_eq!(g.inverse(Xor(true)), Xor(true));
    }

    #[test]
    fn map_transports_inverse() {
        let g = sum::<i64>().map(|x| x + 10, |y| y - 10);
        assert_eq!(g.identity(), 10);
        // inverse in shifted coordinates: -(x - 10) + 10
        assert_eq!(g.inverse(13), 7);
        assert_eq!(g.prepend(13, g.inverse(13)), g.identity());
    }
}
