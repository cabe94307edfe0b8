//! Integration tests for the derive macros (feature = `"derive"`).
#![cfg(feature = "derive")]

use std::collections::HashSet;

use ringbox::primitives::Sum;
use ringbox::{AbelianGroup, CommutativeMonoid, Group, Monoid, Semigroup};

#[derive(Clone, Debug, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid)]
struct Stats {
    count: Sum<u64>,
    tags: HashSet<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid, Group, AbelianGroup)]
struct Balance(Sum<i64>, Sum<i64>);

#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(Semigroup, Monoid, CommutativeMonoid)]
struct Point<T> {
    x: Sum<T>,
    y: Sum<T>,
}

#[test]
fn named_struct_combines_componentwise() {
    let a = Stats {
        count: Sum(2),
        tags: ["x".to_string()].into_iter().collect(),
    };
    let b = Stats {
        count: Sum(3),
        tags: ["y".to_string()].into_iter().collect(),
    };
    let c = a.combine(&b);
    assert_eq!(c.count, Sum(5));
    assert_eq!(c.tags, ["x".to_string(), "y".to_string()].into_iter().collect());
}

#[test]
fn named_struct_empty_is_identity() {
    let a = Stats {
        count: Sum(7),
        tags: ["z".to_string()].into_iter().collect(),
    };
    assert_eq!(Stats::empty().combine(&a), a);
    assert_eq!(a.combine(&Stats::empty()), a);
}

#[test]
fn tuple_struct_group_inverts_componentwise() {
    let b = Balance(Sum(10), Sum(-4));
    assert_eq!(b.inverse(), Balance(Sum(-10), Sum(4)));
    assert_eq!(b.combine(&b.inverse()), Balance::empty());
}

#[test]
fn generic_struct_keeps_generics() {
    let p = Point { x: Sum(1i32), y: Sum(2i32) };
    let q = Point { x: Sum(3i32), y: Sum(4i32) };
    assert_eq!(p.combine(&q), Point { x: Sum(4), y: Sum(6) });
    assert_eq!(Point::<i32>::empty(), Point { x: Sum(0), y: Sum(0) });
}

#[test]
fn derived_structs_bridge_to_dictionaries() {
    let m = ringbox::instance::CommutativeMonoid::<Balance>::of();
    let total = m.concat(vec![
        Balance(Sum(1), Sum(10)),
        Balance(Sum(2), Sum(20)),
    ]);
    assert_eq!(total, Balance(Sum(3), Sum(30)));
}
