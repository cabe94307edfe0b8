//! First-class semigroups and their instance catalog.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use num_traits::One;
use num_traits::Zero;

use crate::class;
use crate::primitives::Endo;

/// A first-class **semigroup** over `A`: one associative binary
/// operation, held as a value.
///
/// Law (caller obligation, never checked):
///
/// - **Associative**:
///   `prepend(prepend(x, y), z) == prepend(x, prepend(y, z))`
///
/// # Example
///
/// ```rust
/// use ringbox::instance::Semigroup;
///
/// let min = Semigroup::new(|x: i32, y: i32| x.min(y));
/// assert_eq!(min.prepend(3, 5), 3);
/// ```
pub struct Semigroup<A> {
    op: Arc<dyn Fn(A, A) -> A + Send + Sync>,
}

impl<A> Clone for Semigroup<A> {
    fn clone(&self) -> Self {
        Semigroup {
            op: Arc::clone(&self.op),
        }
    }
}

impl<A> std::fmt::Debug for Semigroup<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Semigroup(..)")
    }
}

impl<A> Semigroup<A> {
    /// Wrap a binary operation.
    ///
    /// The associativity of `op` is the caller's obligation; the
    /// library only documents it.
    pub fn new(op: impl Fn(A, A) -> A + Send + Sync + 'static) -> Self {
        Semigroup { op: Arc::new(op) }
    }

    /// Wrap a user-supplied associative binary function.
    ///
    /// Alias of [`Semigroup::new`], named for the obligation it
    /// carries.
    pub fn from_associative_op(op: impl Fn(A, A) -> A + Send + Sync + 'static) -> Self {
        Semigroup::new(op)
    }

    /// Derive `prepend(x, y)` from a bulk concatenation function, as
    /// `concat_fn(vec![x, y])`.
    ///
    /// Useful when a structure is naturally defined over sequences
    /// (the identity-and-concat construction in
    /// [`Monoid`](crate::instance::Monoid)).
    pub fn from_concat(concat_fn: impl Fn(Vec<A>) -> A + Send + Sync + 'static) -> Self {
        Semigroup::new(move |x, y| concat_fn(vec![x, y]))
    }

    /// The dictionary backed by a [`class::Semigroup`] trait impl.
    pub fn of() -> Self
    where
        A: class::Semigroup + Send + Sync + 'static,
    {
        Semigroup::new(|x: A, y: A| x.combine(&y))
    }

    /// Combine two values with the wrapped operation.
    pub fn prepend(&self, x: A, y: A) -> A {
        (self.op)(x, y)
    }

    /// Transport this semigroup along a bijection `A ↔ B`.
    ///
    /// The operation on `B` is `to(op(from(x), from(y)))`. If `to` and
    /// `from` do not form a true bijection (round-trip:
    /// `from(to(x)) == x` and `to(from(y)) == y` on the respective
    /// images), associativity on `B` is not guaranteed. This is a
    /// caller obligation, not checked.
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> Semigroup<B>
    where
        A: 'static,
    {
        let op = Arc::clone(&self.op);
        Semigroup::new(move |x, y| to(op(from(x), from(y))))
    }
}

/// A semigroup tagged as additionally **commutative**.
///
/// A distinct wrapped variant, not a subtype: APIs that need
/// commutativity (unordered combination, the additive side of a ring)
/// take this type and reject a merely-associative [`Semigroup`] at
/// compile time.
///
/// Additional law (caller obligation): `prepend(x, y) == prepend(y, x)`.
pub struct CommutativeSemigroup<A> {
    inner: Semigroup<A>,
}

impl<A> Clone for CommutativeSemigroup<A> {
    fn clone(&self) -> Self {
        CommutativeSemigroup {
            inner: self.inner.clone(),
        }
    }
}

impl<A> std::fmt::Debug for CommutativeSemigroup<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CommutativeSemigroup(..)")
    }
}

impl<A> CommutativeSemigroup<A> {
    /// Wrap a binary operation the caller asserts to be associative
    /// **and** commutative.
    pub fn new(op: impl Fn(A, A) -> A + Send + Sync + 'static) -> Self {
        CommutativeSemigroup {
            inner: Semigroup::new(op),
        }
    }

    /// Tag an existing semigroup as commutative (caller obligation).
    pub fn from_semigroup(inner: Semigroup<A>) -> Self {
        CommutativeSemigroup { inner }
    }

    /// The dictionary backed by a [`class::CommutativeSemigroup`] impl.
    pub fn of() -> Self
    where
        A: class::CommutativeSemigroup + Send + Sync + 'static,
    {
        CommutativeSemigroup::from_semigroup(Semigroup::of())
    }

    /// Combine two values; order does not matter.
    pub fn prepend(&self, x: A, y: A) -> A {
        self.inner.prepend(x, y)
    }

    /// View as a plain semigroup (forgetting commutativity).
    pub fn as_semigroup(&self) -> &Semigroup<A> {
        &self.inner
    }

    /// Unwrap into the plain semigroup.
    pub fn into_semigroup(self) -> Semigroup<A> {
        self.inner
    }

    /// Transport along a bijection. Commutativity survives any
    /// bijection, so the result keeps the tag; associativity carries
    /// the same round-trip obligation as [`Semigroup::map`].
    pub fn map<B>(
        &self,
        to: impl Fn(A) -> B + Send + Sync + 'static,
        from: impl Fn(B) -> A + Send + Sync + 'static,
    ) -> CommutativeSemigroup<B>
    where
        A: 'static,
    {
        CommutativeSemigroup {
            inner: self.inner.map(to, from),
        }
    }
}

// Instance catalog

/// Numeric addition.
pub fn sum<T>() -> CommutativeSemigroup<T>
where
    T: Zero + Send + Sync + 'static,
{
    CommutativeSemigroup::new(|x: T, y: T| x + y)
}

/// Numeric multiplication.
pub fn product<T>() -> CommutativeSemigroup<T>
where
    T: One + Send + Sync + 'static,
{
    CommutativeSemigroup::new(|x: T, y: T| x * y)
}

/// String append. Not commutative.
pub fn string_append() -> Semigroup<String> {
    Semigroup::new(|mut x: String, y: String| {
        x.push_str(&y);
        x
    })
}

/// First `Some` wins.
///
/// `prepend(None, Some(5)) == Some(5)`;
/// `prepend(Some(3), Some(5)) == Some(3)`. Not commutative.
pub fn first_some<T>() -> Semigroup<Option<T>>
where
    T: Send + Sync + 'static,
{
    Semigroup::new(|x: Option<T>, y| x.or(y))
}

/// List concatenation. Not commutative.
pub fn list_append<T>() -> Semigroup<Vec<T>>
where
    T: Send + Sync + 'static,
{
    Semigroup::new(|mut x: Vec<T>, mut y: Vec<T>| {
        x.append(&mut y);
        x
    })
}

/// Set union.
pub fn set_union<T>() -> CommutativeSemigroup<HashSet<T>>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    CommutativeSemigroup::new(|mut x: HashSet<T>, y: HashSet<T>| {
        x.extend(y);
        x
    })
}

/// Set difference: `prepend(x, y)` removes the elements of `y` from
/// `x` (the first operand is the set subtracted *from*).
///
/// **Warning**: set difference is not associative in general —
/// `(a − b) − c` and `a − (b − c)` differ whenever `b` and `c`
/// overlap — so this does not satisfy the semigroup law. It is kept
/// for its practical value as a combining operation; callers relying
/// on associativity must not use it.
pub fn set_difference<T>() -> Semigroup<HashSet<T>>
where
    T: Eq + Hash + Send + Sync + 'static,
{
    Semigroup::new(|mut x: HashSet<T>, y: HashSet<T>| {
        x.retain(|e| !y.contains(e));
        x
    })
}

/// Logical AND.
pub fn and() -> CommutativeSemigroup<bool> {
    CommutativeSemigroup::new(|x, y| x && y)
}

/// Logical OR.
pub fn or() -> CommutativeSemigroup<bool> {
    CommutativeSemigroup::new(|x, y| x || y)
}

/// Exclusive-or.
pub fn xor() -> CommutativeSemigroup<bool> {
    CommutativeSemigroup::new(|x, y| x ^ y)
}

/// Endofunction composition, left to right: the composite applies the
/// first operand, then the second. Not commutative.
pub fn compose<A>() -> Semigroup<Endo<A>>
where
    A: 'static,
{
    Semigroup::new(|f: Endo<A>, g: Endo<A>| class::Semigroup::combine(&f, &g))
}

/// Addition modulo a runtime-supplied `modulus`.
///
/// Operands need not be reduced; the result always is. `modulus` must
/// be nonzero.
pub fn add_mod(modulus: u64) -> CommutativeSemigroup<u64> {
    CommutativeSemigroup::new(move |x, y| (x % modulus + y % modulus) % modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(xs: &[i32]) -> HashSet<i32> {
        xs.iter().copied().collect()
    }

    #[test]
    fn sum_associates() {
        let s = sum::<i32>();
        assert_eq!(s.prepend(s.prepend(1, 2), 3), s.prepend(1, s.prepend(2, 3)));
        assert_eq!(s.prepend(s.prepend(1, 2), 3), 6);
    }

    #[test]
    fn first_some_prefers_left() {
        let s = first_some::<i32>();
        assert_eq!(s.prepend(None, Some(5)), Some(5));
        assert_eq!(s.prepend(Some(3), Some(5)), Some(3));
        assert_eq!(s.prepend(None, None), None);
    }

    #[test]
    fn string_append_keeps_order() {
        let s = string_append();
        assert_eq!(s.prepend("ab".into(), "cd".into()), "abcd");
    }

    #[test]
    fn set_union_is_unordered() {
        let s = set_union::<i32>();
        assert_eq!(s.prepend(set(&[1, 2]), set(&[2, 3])), set(&[1, 2, 3]));
        assert_eq!(
            s.prepend(set(&[1, 2]), set(&[2, 3])),
            s.prepend(set(&[2, 3]), set(&[1, 2]))
        );
    }

    #[test]
    fn set_difference_subtracts_from_left() {
        let s = set_difference::<i32>();
        assert_eq!(s.prepend(set(&[1, 2, 3]), set(&[2])), set(&[1, 3]));
        assert_eq!(s.prepend(set(&[2]), set(&[1, 2, 3])), set(&[]));
    }

    #[test]
    fn from_concat_derives_binary_op() {
        let s = Semigroup::from_concat(|xs: Vec<i32>| xs.into_iter().sum());
        assert_eq!(s.prepend(3, 4), 7);
    }

    #[test]
    fn of_bridges_from_trait_impl() {
        use crate::primitives::Sum;
        let s = Semigroup::<Sum<i32>>::of();
        assert_eq!(s.prepend(Sum(3), Sum(5)), Sum(8));
    }

    #[test]
    fn map_transports_along_bijection() {
        // Negation is a bijection on i64, and addition is preserved.
        let s = sum::<i64>().into_semigroup();
        let negated = s.map(|x: i64| -x, |y: i64| -y);
        assert_eq!(negated.prepend(3, 4), 7);
    }

    #[test]
    fn compose_is_left_to_right() {
        let s = compose::<i32>();
        let f = Endo::new(|x: i32| x + 1);
        let g = Endo::new(|x: i32| x * 2);
        assert_eq!(s.prepend(f, g).apply(3), 8);
    }

    #[test]
    fn add_mod_wraps() {
        let s = add_mod(12);
        assert_eq!(s.prepend(7, 8), 3);
        assert_eq!(s.prepend(25, 1), 2); // unreduced operands
    }
}
