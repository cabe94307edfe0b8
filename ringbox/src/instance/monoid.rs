//! First-class monoids and their instance catalog.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use num_traits::One;
use num_traits::Zero;

use crate::class;
use crate::class::Appendable;
use crate::instance::semigroup;
use crate::instance::CommutativeSemigroup;
use crate::instance::Semigroup;
use crate::primitives::Effect;
use crate::primitives::Endo;

/// A first-class **monoid** over `A`: a [`Semigroup`] plus an identity
/// element and a bulk `concat` operation.
///
/// Laws (caller obligations, never checked):
///
/// - the semigroup's associativity;
/// - **Two-sided identity**: `prepend(identity, x) == x` and
///   `prepend(x, identity) == x`;
/// - **Concat coherence**: `concat(xs)` equals folding `xs` left to
///   right with `prepend`, seeded with `identity`. The stored `concat`
///   may be an independently optimized implementation, but must agree
///   with that fold.
///
/// # Example
///
/// ```rust
/// use ringbox::instance::{Monoid, Semigroup};
///
/// let joined = Monoid::from_semigroup_and_identity(
///     Semigroup::new(|x: String, y: String| x + &y),
///     String::new(),
/// );
/// assert_eq!(
///     joined.concat(vec!["ab".into(), "cd".into(), "ef".into()]),
///     "abcdef",
/// );
/// ```
pub struct Monoid<A> {
    semigroup: Semigroup<A>,
    identity: A,
    concat: Arc<dyn Fn(Vec<A>) -> A + Send + Sync>,
}

impl<A: Clone> Clone for Monoid<A> {
    fn clone(&self) -> Self {
        Monoid {
            semigroup: self.semigroup.clone(),
            identity: self.identity.clone(),
            concat: Arc::clone(&self.concat),
        }
    }
}

impl<A> std::fmt::Debug for Monoid<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Monoid(..)")
    }
}

impl<A> Monoid<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// The default, general construction: derive `concat` as the left
    /// fold of the sequence with `prepend`, seeded with `identity`.
    ///
    /// The identity law is the caller's obligation. The derived
    /// `concat` is O(n) with one `prepend` call per element.
    pub fn from_semigroup_and_identity(semigroup: Semigroup<A>, identity: A) -> Self {
        let sg = semigroup.clone();
        let id = identity.clone();
        let concat = Arc::new(move |xs: Vec<A>| {
            xs.into_iter().fold(id.clone(), |acc, x| sg.prepend(acc, x))
        });
        Monoid {
            semigroup,
            identity,
            concat,
        }
    }

    /// Construct from an identity element and a bulk concatenation
    /// function; `prepend(x, y)` is derived as `concat(vec![x, y])`.
    ///
    /// `concat` must agree with the fold law above; in exchange it may
    /// be arbitrarily better than element-at-a-time folding.
    pub fn from_identity_and_concat(
        identity: A,
        concat: impl Fn(Vec<A>) -> A + Send + Sync + 'static,
    ) -> Self {
        let concat: Arc<dyn Fn(Vec<A>) -> A + Send + Sync> = Arc::new(concat);
        let c = Arc::clone(&concat);
        Monoid {
            semigroup: Semigroup::new(move |x, y| c(vec![x, y])),
            identity,
            concat,
        }
    }

    /// Convenience for carriers with a native append operation
    /// ([`String`], [`Vec<T>`]): the full monoid from a zero value.
    ///
    /// The supplied `empty` must be a two-sided identity for
    /// [`Appendable::append`].
    pub fn for_appendable(empty: A) -> Self
    where
        A: Appendable,
    {
        Monoid::from_semigroup_and_identity(
            Semigroup::new(|x: A, y: A| x.append(y)),
            empty,
        )
    }

    /// The dictionary backed by a [`class::Monoid`] trait impl.
    pub fn of() -> Self
    where
        A: class::Monoid,
    {
        Monoid {
            semigroup: Semigroup::of(),
            identity: A::empty(),
            concat: Arc::new(|xs: Vec<A>| A::concat(xs)),
        }
    }

    /// Combine two values.
    pub fn prepend(&self, x: A, y: A) -> A {
        self.semigroup.prepend(x, y)
    }

    /// A copy of the identity element.
    pub fn identity(&self) -> A {
        self.identity.clone()
    }

    /// Fold an ordered sequence into one value.
    pub fn concat(&self, xs: Vec<A>) -> A {
        (self.concat)(xs)
    }

    /// [`Monoid::concat`] over any iterator.
    pub fn concat_iter<I>(&self, iter: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        (self.concat)(iter.into_iter().collect())
    }

    /// The underlying semigroup.
    pub fn semigroup(&self) -> &Semigroup<A> {
        &self.semigroup
    }

    /// Transport this monoid along a bijection `A ↔ B`: the semigroup
    /// is mapped, the identity goes through `to`, and `concat` maps
    /// the sequence through `from`, folds in `A`, and returns through
    /// `to` (preserving any optimized bulk implementation).
    ///
    /// Same round-trip obligation as [`Semigroup::map`].
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> Monoid<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        let to = Arc::new(to);
        let from = Arc::new(from);
        let identity = to(self.identity.clone());
        let semigroup = {
            let to = Arc::clone(&to);
            let from = Arc::clone(&from);
            let op = self.semigroup.clone();
            Semigroup::new(move |x, y| to(op.prepend(from(x), from(y))))
        };
        let concat = {
            let inner = Arc::clone(&self.concat);
            Arc::new(move |xs: Vec<B>| {
                let mapped: Vec<A> = xs.into_iter().map(|x| from(x)).collect();
                to(inner(mapped))
            })
        };
        Monoid {
            semigroup,
            identity,
            concat,
        }
    }
}

/// A monoid tagged as **commutative**: built over a
/// [`CommutativeSemigroup`].
///
/// Distinct wrapped variant, not a subtype — required wherever an
/// unordered combine is assumed, notably the additive half of a
/// [`Ring`](crate::instance::Ring).
pub struct CommutativeMonoid<A> {
    inner: Monoid<A>,
}

impl<A: Clone> Clone for CommutativeMonoid<A> {
    fn clone(&self) -> Self {
        CommutativeMonoid {
            inner: self.inner.clone(),
        }
    }
}

impl<A> std::fmt::Debug for CommutativeMonoid<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CommutativeMonoid(..)")
    }
}

impl<A> CommutativeMonoid<A>
where
    A: Clone + Send + Sync + 'static,
{
    /// The general construction over a commutative semigroup.
    pub fn from_commutative_semigroup_and_identity(
        semigroup: CommutativeSemigroup<A>,
        identity: A,
    ) -> Self {
        CommutativeMonoid {
            inner: Monoid::from_semigroup_and_identity(semigroup.into_semigroup(), identity),
        }
    }

    /// Tag an existing monoid as commutative (caller obligation).
    pub fn from_monoid(inner: Monoid<A>) -> Self {
        CommutativeMonoid { inner }
    }

    /// The dictionary backed by a [`class::CommutativeMonoid`] impl.
    pub fn of() -> Self
    where
        A: class::CommutativeMonoid,
    {
        CommutativeMonoid {
            inner: Monoid::of(),
        }
    }

    /// Combine two values; order does not matter.
    pub fn prepend(&self, x: A, y: A) -> A {
        self.inner.prepend(x, y)
    }

    /// A copy of the identity element.
    pub fn identity(&self) -> A {
        self.inner.identity()
    }

    /// Fold a sequence into one value.
    pub fn concat(&self, xs: Vec<A>) -> A {
        self.inner.concat(xs)
    }

    /// View as a plain monoid (forgetting commutativity).
    pub fn as_monoid(&self) -> &Monoid<A> {
        &self.inner
    }

    /// Unwrap into the plain monoid.
    pub fn into_monoid(self) -> Monoid<A> {
        self.inner
    }

    /// Transport along a bijection; the commutative tag survives.
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> CommutativeMonoid<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        CommutativeMonoid {
            inner: self.inner.map(to, from),
        }
    }
}

// Instance catalog

/// Numeric sum; identity `0`.
pub fn sum<T>() -> CommutativeMonoid<T>
where
    T: Zero + Clone + Send + Sync + 'static,
{
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::sum(), T::zero())
}

/// Numeric product; identity `1`.
pub fn product<T>() -> CommutativeMonoid<T>
where
    T: One + Clone + Send + Sync + 'static,
{
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::product(), T::one())
}

/// String concatenation; identity `""`. `concat` pre-sizes the output
/// buffer rather than folding pair-at-a-time.
pub fn string_concat() -> Monoid<String> {
    Monoid::from_identity_and_concat(String::new(), |xs: Vec<String>| {
        let len = xs.iter().map(String::len).sum();
        let mut out = String::with_capacity(len);
        for x in &xs {
            out.push_str(x);
        }
        out
    })
}

/// First present optional value; identity `None`.
pub fn first_some<T>() -> Monoid<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Monoid::from_semigroup_and_identity(semigroup::first_some(), None)
}

/// List concatenation; identity `[]`.
pub fn list_concat<T>() -> Monoid<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    Monoid::from_semigroup_and_identity(semigroup::list_append(), Vec::new())
}

/// Set union; identity is the empty set.
pub fn set_union<T>() -> CommutativeMonoid<HashSet<T>>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
{
    CommutativeMonoid::from_commutative_semigroup_and_identity(
        semigroup::set_union(),
        HashSet::new(),
    )
}

/// Set difference with the empty set as identity.
///
/// **Warning**: inherits the non-associativity of
/// [`semigroup::set_difference`], and the empty set is only a *right*
/// identity (`x − ∅ == x`, but `∅ − x == ∅`). Kept for practical use;
/// not a lawful monoid.
pub fn set_difference<T>() -> Monoid<HashSet<T>>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
{
    Monoid::from_semigroup_and_identity(semigroup::set_difference(), HashSet::new())
}

/// Logical AND; identity `true`.
pub fn all() -> CommutativeMonoid<bool> {
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::and(), true)
}

/// Logical OR; identity `false`.
pub fn any() -> CommutativeMonoid<bool> {
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::or(), false)
}

/// Exclusive-or; identity `false`.
pub fn xor() -> CommutativeMonoid<bool> {
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::xor(), false)
}

/// Endofunction composition; identity is the identity function.
pub fn endo<A>() -> Monoid<Endo<A>>
where
    A: 'static,
{
    Monoid::from_semigroup_and_identity(semigroup::compose(), Endo::new(|a| a))
}

/// Batched side-effect descriptors; identity is the no-op, `concat`
/// batches.
pub fn effects() -> Monoid<Effect> {
    Monoid::of()
}

/// The unit (trivial) monoid: a single value, trivially commutative.
pub fn trivial() -> CommutativeMonoid<()> {
    CommutativeMonoid::of()
}

/// Addition modulo a runtime-supplied `modulus`; identity `0`.
pub fn add_mod(modulus: u64) -> CommutativeMonoid<u64> {
    CommutativeMonoid::from_commutative_semigroup_and_identity(semigroup::add_mod(modulus), 0)
}

/// Multiplication modulo a runtime-supplied `modulus`; identity `1`.
///
/// Pairs with [`crate::instance::group::add_mod`] to form the ring of
/// integers mod `modulus`.
pub fn mul_mod(modulus: u64) -> CommutativeMonoid<u64> {
    CommutativeMonoid::from_commutative_semigroup_and_identity(
        CommutativeSemigroup::new(move |x: u64, y: u64| (x % modulus) * (y % modulus) % modulus),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_concat_and_identity() {
        let m = sum::<i32>();
        assert_eq!(m.concat(vec![1, 2, 3, 4]), 10);
        assert_eq!(m.identity(), 0);
        assert_eq!(m.prepend(m.identity(), 7), 7);
        assert_eq!(m.prepend(7, m.identity()), 7);
    }

    #[test]
    fn product_concat() {
        let m = product::<i32>();
        assert_eq!(m.concat(vec![1, 2, 3, 4]), 24);
        assert_eq!(m.identity(), 1);
    }

    #[test]
    fn string_concat_bulk_matches_fold() {
        let m = string_concat();
        let xs: Vec<String> = vec!["ab".into(), "cd".into(), "ef".into()];
        assert_eq!(m.concat(xs.clone()), "abcdef");
        let folded = xs
            .into_iter()
            .fold(m.identity(), |acc, x| m.prepend(acc, x));
        assert_eq!(folded, "abcdef");
    }

    #[test]
    fn from_identity_and_concat_derives_prepend() {
        let m = Monoid::from_identity_and_concat(0i32, |xs: Vec<i32>| xs.into_iter().sum());
        assert_eq!(m.prepend(3, 4), 7);
        assert_eq!(m.concat(vec![1, 2, 3]), 6);
    }

    #[test]
    fn for_appendable_string() {
        let m = Monoid::for_appendable(String::new());
        assert_eq!(m.concat(vec!["a".into(), "b".into()]), "ab");
    }

    #[test]
    fn first_some_monoid() {
        let m = first_some::<i32>();
        assert_eq!(m.concat(vec![None, Some(5), Some(3)]), Some(5));
        assert_eq!(m.concat(vec![]), None);
    }

    #[test]
    fn set_difference_right_identity_only() {
        let m = set_difference::<i32>();
        let x: HashSet<_> = [1, 2].into_iter().collect();
        assert_eq!(m.prepend(x.clone(), m.identity()), x);
        // Left identity fails; the instance is documented as unlawful.
        assert_eq!(m.prepend(m.identity(), x), HashSet::new());
    }

    #[test]
    fn boolean_monoids() {
        assert!(all().concat(vec![true, true]));
        assert!(!all().concat(vec![true, false]));
        assert!(any().concat(vec![false, true]));
        assert!(!xor().concat(vec![true, true, false]));
        assert_eq!(xor().identity(), false);
    }

    #[test]
    fn endo_identity_function() {
        let m = endo::<i32>();
        let f = m.concat(vec![Endo::new(|x| x + 1), Endo::new(|x| x * 2)]);
        assert_eq!(f.apply(3), 8);
        assert_eq!(m.identity().apply(9), 9);
    }

    #[test]
    fn effects_batch() {
        let m = effects();
        let e = m.concat(vec![Effect::op("a"), Effect::noop(), Effect::op("b")]);
        assert_eq!(e.ops(), ["a", "b"]);
        assert!(m.identity().is_noop());
    }

    #[test]
    fn add_mod_monoid() {
        let m = add_mod(12);
        assert_eq!(m.concat(vec![7, 8, 11]), 2);
        assert_eq!(m.identity(), 0);
    }

    #[test]
    fn map_transports_identity_and_concat() {
        // Bijection between i64 and a shifted copy of itself.
        let m = sum::<i64>().into_monoid();
        let shifted = m.map(|x| x + 100, |y| y - 100);
        assert_eq!(shifted.identity(), 100);
        // prepend in shifted coordinates: (x-100)+(y-100)+100
        assert_eq!(shifted.prepend(103, 104), 107);
        assert_eq!(shifted.concat(vec![101, 102, 103]), 106);
    }
}
