use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{HashSet, Values};
use crate::collections::traits::Set;

/// Membership, and therefore all of the set algebra, is decided by key. Both operands are
/// expected to come from the same family (see [`HashSetFactory`](super::HashSetFactory)), so that
/// their hash functions agree.
impl<T, K, F, B> Set<T> for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    type Iter<'a> = Values<'a, K, T>
    where
        Self: 'a,
        T: 'a;

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T, K, F, B> HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    /// Creates an empty set in the same family as `self`.
    fn sibling(&self) -> Self {
        HashSet::with_hasher(self.hash_fn.clone(), self.hasher().clone())
    }

    fn collect_sibling<'a, I: Iterator<Item = &'a T>>(&self, items: I) -> Self
    where
        T: 'a,
    {
        let mut set = self.sibling();
        set.extend(items.cloned());
        set
    }
}

impl<T, K, F, B> BitOr for &HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = HashSet<T, K, F, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.collect_sibling(self.union(rhs))
    }
}

impl<T, K, F, B> BitOrAssign for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T, K, F, B> BitAnd for &HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = HashSet<T, K, F, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.collect_sibling(self.intersection(rhs))
    }
}

impl<T, K, F, B> BitAndAssign for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item));
    }
}

impl<T, K, F, B> BitXor for &HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = HashSet<T, K, F, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.collect_sibling(self.symmetric_difference(rhs))
    }
}

impl<T, K, F, B> BitXorAssign for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T, K, F, B> Sub for &HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    type Output = HashSet<T, K, F, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.collect_sibling(self.difference(rhs))
    }
}

impl<T, K, F, B> SubAssign for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}
