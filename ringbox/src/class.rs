//! The trait hierarchy: algebraic structures as compile-time bounds.
//!
//! This is the statically-dispatched face of the crate. Each trait
//! carries its laws in the documentation; none of them are enforced by
//! the type system.
//!
//! - [`Semigroup`]: associative binary operation
//! - [`CommutativeSemigroup`]: marker for commutative `combine`
//! - [`Monoid`]: semigroup with identity element
//! - [`CommutativeMonoid`]: monoid with commutative operation
//! - [`Group`]: monoid with inverse elements
//! - [`AbelianGroup`]: commutative group
//!
//! The same structures exist as first-class values in
//! [`crate::instance`]; [`crate::instance::Semigroup::of`] and friends
//! bridge from a trait impl to a dictionary.

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::hash::Hash;

/// A **semigroup**: a type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use ringbox::class::Semigroup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Max(i32);
///
/// impl Semigroup for Max {
///     fn combine(&self, other: &Self) -> Self {
///         Max(self.0.max(other.0))
///     }
/// }
///
/// let x = Max(3);
/// let y = Max(5);
/// let z = Max(2);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}

/// Marker for semigroups whose `combine` is additionally commutative.
///
/// Additional law:
///
/// - **Commutative**: `a.combine(b) == b.combine(a)`
///
/// Expressing commutativity as a distinct trait lets APIs that need it
/// (unordered reduction, abelian group construction) demand it as a
/// bound and reject merely-associative operations at compile time.
pub trait CommutativeSemigroup: Semigroup {}

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use ringbox::class::{Semigroup, Monoid};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Product(i32);
///
/// impl Semigroup for Product {
///     fn combine(&self, other: &Self) -> Self {
///         Product(self.0 * other.0)
///     }
/// }
///
/// impl Monoid for Product {
///     fn empty() -> Self {
///         Product(1)
///     }
/// }
///
/// let x = Product(3);
/// let y = Product(5);
/// assert_eq!(x.combine(&y), Product(15));
/// assert_eq!(Product::empty().combine(&x), x);
/// assert_eq!(Product::concat(vec![Product(1), Product(2), Product(3), Product(4)]), Product(24));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

/// A **commutative monoid**: a monoid where combine is commutative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Commutative**: `a.combine(b) == b.combine(a)`
/// - **Identity**: `a.combine(empty()) == a == empty().combine(a)`
pub trait CommutativeMonoid: Monoid + CommutativeSemigroup {}

/// A **group**: a monoid where every element has an inverse.
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Identity**: `a.combine(empty()) == a == empty().combine(a)`
/// - **Inverse**: `a.combine(a.inverse()) == empty() == a.inverse().combine(a)`
///
/// # Example
///
/// ```rust
/// use ringbox::class::{Semigroup, Monoid, Group};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct AddInt(i32);
///
/// impl Semigroup for AddInt {
///     fn combine(&self, other: &Self) -> Self {
///         AddInt(self.0 + other.0)
///     }
/// }
///
/// impl Monoid for AddInt {
///     fn empty() -> Self {
///         AddInt(0)
///     }
/// }
///
/// impl Group for AddInt {
///     fn inverse(&self) -> Self {
///         AddInt(-self.0)
///     }
/// }
///
/// let x = AddInt(5);
/// assert_eq!(x.combine(&x.inverse()), AddInt::empty());
/// ```
pub trait Group: Monoid {
    /// Return the inverse of this element.
    fn inverse(&self) -> Self;
}

/// An **abelian group** (commutative group): a group where combine is
/// commutative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Commutative**: `a.combine(b) == b.combine(a)`
/// - **Identity**: `a.combine(empty()) == a == empty().combine(a)`
/// - **Inverse**: `a.combine(a.inverse()) == empty() == a.inverse().combine(a)`
///
/// Named after mathematician Niels Henrik Abel.
pub trait AbelianGroup: Group + CommutativeMonoid {}

/// Types with a native append/concatenation operation.
///
/// This is the "appendable-like" hook used by
/// [`crate::instance::Monoid::for_appendable`]: given a zero value, a
/// full monoid dictionary is derived from `append`.
///
/// `append` must be associative; the supplied zero value must be a
/// two-sided identity for it.
pub trait Appendable {
    /// Concatenate, consuming both operands.
    fn append(self, other: Self) -> Self;
}

impl Appendable for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Appendable for Vec<T> {
    fn append(mut self, mut other: Self) -> Self {
        self.extend(other.drain(..));
        self
    }
}

// Implementations for standard library types

// String: combine = concatenation

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.push_str(other);
        out
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

// Vec: combine = concatenation

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.extend(other.iter().cloned());
        out
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

// HashSet: combine = union

impl<T: Eq + Hash + Clone> Semigroup for HashSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Monoid for HashSet<T> {
    fn empty() -> Self {
        HashSet::new()
    }
}

impl<T: Eq + Hash + Clone> CommutativeSemigroup for HashSet<T> {}

impl<T: Eq + Hash + Clone> CommutativeMonoid for HashSet<T> {}

// BTreeSet: combine = union

impl<T: Ord + Clone> Semigroup for BTreeSet<T> {
    fn combine(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Ord + Clone> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }
}

impl<T: Ord + Clone> CommutativeSemigroup for BTreeSet<T> {}

impl<T: Ord + Clone> CommutativeMonoid for BTreeSet<T> {}

// Option: lifted semigroup; None is the identity

impl<M: Semigroup + Clone> Semigroup for Option<M> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(a.combine(b)),
        }
    }
}

impl<M: Semigroup + Clone> Monoid for Option<M> {
    fn empty() -> Self {
        None
    }
}

impl<M: CommutativeSemigroup + Clone> CommutativeSemigroup for Option<M> {}

impl<M: CommutativeSemigroup + Clone> CommutativeMonoid for Option<M> {}

// Unit type: the trivial group

impl Semigroup for () {
    fn combine(&self, _other: &Self) -> Self {}
}

impl CommutativeSemigroup for () {}

impl Monoid for () {
    fn empty() -> Self {}
}

impl CommutativeMonoid for () {}

impl Group for () {
    fn inverse(&self) -> Self {}
}

impl AbelianGroup for () {}

// Tuples: product algebras, componentwise

macro_rules! impl_product_algebra {
    ( $( $T:ident : $idx:tt ),+ ) => {
        impl<$( $T ),+> Semigroup for ( $( $T, )+ )
        where
            $( $T: Semigroup ),+
        {
            fn combine(&self, other: &Self) -> Self {
                (
                    $( self.$idx.combine(&other.$idx), )+
                )
            }
        }

        impl<$( $T ),+> CommutativeSemigroup for ( $( $T, )+ )
        where
            $( $T: CommutativeSemigroup ),+
        {
        }

        impl<$( $T ),+> Monoid for ( $( $T, )+ )
        where
            $( $T: Monoid ),+
        {
            fn empty() -> Self {
                (
                    $( $T::empty(), )+
                )
            }
        }

        impl<$( $T ),+> CommutativeMonoid for ( $( $T, )+ )
        where
            $( $T: CommutativeMonoid ),+
        {
        }

        impl<$( $T ),+> Group for ( $( $T, )+ )
        where
            $( $T: Group ),+
        {
            fn inverse(&self) -> Self {
                (
                    $( self.$idx.inverse(), )+
                )
            }
        }

        impl<$( $T ),+> AbelianGroup for ( $( $T, )+ )
        where
            $( $T: AbelianGroup ),+
        {
        }
    }
}

impl_product_algebra!(A:0);
impl_product_algebra!(A:0, B:1);
impl_product_algebra!(A:0, B:1, C:2);
impl_product_algebra!(A:0, B:1, C:2, D:3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Sum;

    #[test]
    fn string_concat() {
        let parts = vec!["ab".to_string(), "cd".to_string(), "ef".to_string()];
        assert_eq!(String::concat(parts), "abcdef");
        assert_eq!(String::empty(), "");
    }

    #[test]
    fn vec_concat() {
        let xs = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(<Vec<i32> as Monoid>::concat(xs), vec![1, 2, 3]);
    }

    #[test]
    fn set_union_is_commutative() {
        let a: HashSet<_> = [1, 2].into_iter().collect();
        let b: HashSet<_> = [2, 3].into_iter().collect();
        assert_eq!(a.combine(&b), b.combine(&a));
        assert_eq!(a.combine(&b), [1, 2, 3].into_iter().collect());
    }

    #[test]
    fn option_lift_first_identity() {
        let none: Option<Sum<i32>> = None;
        let some = Some(Sum(5));
        assert_eq!(none.combine(&some), some);
        assert_eq!(some.combine(&none), some);
        // Both present: inner combine, not first-wins.
        assert_eq!(Some(Sum(3)).combine(&Some(Sum(5))), Some(Sum(8)));
    }

    #[test]
    fn concat_empty_is_identity() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::concat(empty), String::empty());
    }

    #[test]
    fn tuple_algebra_is_componentwise() {
        let x = (Sum(1), "a".to_string());
        let y = (Sum(2), "b".to_string());
        assert_eq!(x.combine(&y), (Sum(3), "ab".to_string()));
        assert_eq!(<(Sum<i32>, String)>::empty(), (Sum(0), String::new()));
    }

    #[test]
    fn tuple_group_inverts_componentwise() {
        let x = (Sum(3), Sum(-7));
        assert_eq!(x.combine(&x.inverse()), <(Sum<i32>, Sum<i32>)>::empty());
    }

    #[test]
    fn appendable_string_and_vec() {
        assert_eq!(Appendable::append("ab".to_string(), "cd".to_string()), "abcd");
        assert_eq!(Appendable::append(vec![1], vec![2, 3]), vec![1, 2, 3]);
    }
}
