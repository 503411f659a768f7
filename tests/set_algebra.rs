#![cfg(all(feature = "hash", feature = "traits"))]

use keyed_set::collections::hash::set::FnHashSet;
use keyed_set::collections::hash::HashSet;
use keyed_set::collections::traits::Set;
use rstest::rstest;

type Tagged = (u32, char);

fn id(item: &Tagged) -> u32 {
    item.0
}

const ID: fn(&Tagged) -> u32 = id;

fn set<const N: usize>(items: [Tagged; N]) -> FnHashSet<Tagged, u32> {
    HashSet::from_iter_with(items, ID)
}

fn tags<'a>(items: impl Iterator<Item = &'a Tagged>) -> String {
    items.map(|item| item.1).collect()
}

fn left() -> FnHashSet<Tagged, u32> {
    set([(1, 'a'), (2, 'b'), (3, 'c')])
}

fn right() -> FnHashSet<Tagged, u32> {
    set([(4, 'D'), (3, 'C'), (2, 'B'), (5, 'E')])
}

#[rstest]
fn test_union_keeps_left_then_right_additions() {
    let (a, b) = (left(), right());

    assert_eq!(tags(a.union(&b)), "abcDE");
    assert_eq!(tags(b.union(&a)), "DCBEa");
    assert_eq!(tags((&a | &b).iter()), "abcDE");
}

#[rstest]
fn test_intersection_prefers_left() {
    let (a, b) = (left(), right());

    assert_eq!(tags(a.intersection(&b)), "bc");
    assert_eq!(tags(b.intersection(&a)), "CB");
    assert_eq!(tags((&a & &b).iter()), "bc");
}

#[rstest]
fn test_difference() {
    let (a, b) = (left(), right());

    assert_eq!(tags(a.difference(&b)), "a");
    assert_eq!(tags(b.difference(&a)), "DE");
    assert_eq!(tags((&a - &b).iter()), "a");
}

#[rstest]
fn test_symmetric_difference() {
    let (a, b) = (left(), right());

    assert_eq!(tags(a.symmetric_difference(&b)), "aDE");
    assert_eq!(tags((&a ^ &b).iter()), "aDE");
}

#[rstest]
fn test_operators_leave_operands_untouched() {
    let (a, b) = (left(), right());

    let union = &a | &b;

    assert_eq!(union.len(), 5);
    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 4);
    assert!(union.contains_key(&5));
}

type Assign = fn(&mut FnHashSet<Tagged, u32>, FnHashSet<Tagged, u32>);

fn or_assign(a: &mut FnHashSet<Tagged, u32>, b: FnHashSet<Tagged, u32>) {
    *a |= b;
}

fn and_assign(a: &mut FnHashSet<Tagged, u32>, b: FnHashSet<Tagged, u32>) {
    *a &= b;
}

fn sub_assign(a: &mut FnHashSet<Tagged, u32>, b: FnHashSet<Tagged, u32>) {
    *a -= b;
}

fn xor_assign(a: &mut FnHashSet<Tagged, u32>, b: FnHashSet<Tagged, u32>) {
    *a ^= b;
}

#[rstest]
#[case::union(or_assign, "abcDE")]
#[case::intersection(and_assign, "bc")]
#[case::difference(sub_assign, "a")]
#[case::symmetric_difference(xor_assign, "aDE")]
fn test_assign_operators(#[case] apply: Assign, #[case] expected: &str) {
    let mut a = left();
    apply(&mut a, right());

    assert_eq!(tags(a.iter()), expected);
}

#[rstest]
fn test_subset_and_superset() {
    let small = set([(2, 'x'), (3, 'y')]);
    let (a, b) = (left(), right());

    assert!(small.is_subset(&a));
    assert!(small.is_subset(&b));
    assert!(a.is_superset(&small));
    assert!(!a.is_subset(&b));
    assert!(a.is_subset(&a));
    assert!(set([]).is_subset(&small));
}

#[rstest]
#[case(set([(1, 'a')]), set([(2, 'b')]), true)]
#[case(set([(1, 'a')]), set([(1, 'b')]), false)]
#[case(set([]), set([(1, 'b')]), true)]
fn test_is_disjoint(
    #[case] a: FnHashSet<Tagged, u32>,
    #[case] b: FnHashSet<Tagged, u32>,
    #[case] expected: bool,
) {
    assert_eq!(a.is_disjoint(&b), expected);
    assert_eq!(b.is_disjoint(&a), expected);
}

#[rstest]
fn test_algebra_through_trait_bound() {
    fn shared<S: Set<Tagged>>(a: &S, b: &S) -> usize {
        a.intersection(b).count()
    }

    assert_eq!(shared(&left(), &right()), 2);
}
