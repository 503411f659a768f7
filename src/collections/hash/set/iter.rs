use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::HashSet;
use super::slots::{IntoSlots, SlotIter};

impl<T, K, F, B> IntoIterator for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    type Item = T;

    type IntoIter = IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.slots.into_iter())
    }
}

/// A type for owned iteration over a [`HashSet`], in insertion order. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<K, T>(pub(crate) IntoSlots<K, T>);

impl<K, T> Iterator for IntoIter<K, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|slot| slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for IntoIter<K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|slot| slot.value)
    }
}

impl<K, T> ExactSizeIterator for IntoIter<K, T> {}

impl<K, T> FusedIterator for IntoIter<K, T> {}

impl<'a, T, K, F, B> IntoIterator for &'a HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    type Item = &'a T;

    type IntoIter = Values<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        Values(self.slots.iter())
    }
}

/// A type for borrowed iteration over a [`HashSet`], in insertion order. Produces values of type
/// `&T`.
///
/// A clone continues from the same position as the original. Call [`HashSet::values`] again for a
/// sequence from the start.
///
/// See [`HashSet::iter`], [`HashSet::values`] and [`HashSet::keys`].
pub struct Values<'a, K, T>(pub(crate) SlotIter<'a, K, T>);

impl<K, T> Clone for Values<'_, K, T> {
    fn clone(&self) -> Self {
        Values(self.0.clone())
    }
}

impl<'a, K, T> Iterator for Values<'a, K, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|slot| &slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for Values<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|slot| &slot.value)
    }
}

impl<K, T> ExactSizeIterator for Values<'_, K, T> {}

impl<K, T> FusedIterator for Values<'_, K, T> {}

/// Borrowed iteration over `(value, value)` pairs, mirroring the entries of a map.
///
/// See [`HashSet::entries`].
pub struct Entries<'a, K, T>(pub(crate) SlotIter<'a, K, T>);

impl<K, T> Clone for Entries<'_, K, T> {
    fn clone(&self) -> Self {
        Entries(self.0.clone())
    }
}

impl<'a, K, T> Iterator for Entries<'a, K, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|slot| (&slot.value, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for Entries<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|slot| (&slot.value, &slot.value))
    }
}

impl<K, T> ExactSizeIterator for Entries<'_, K, T> {}

impl<K, T> FusedIterator for Entries<'_, K, T> {}

/// Borrowed iteration over the keys produced by a set's hash function.
///
/// See [`HashSet::hash_keys`].
pub struct HashKeys<'a, K, T>(pub(crate) SlotIter<'a, K, T>);

impl<K, T> Clone for HashKeys<'_, K, T> {
    fn clone(&self) -> Self {
        HashKeys(self.0.clone())
    }
}

impl<'a, K, T> Iterator for HashKeys<'a, K, T> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|slot| &slot.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, T> DoubleEndedIterator for HashKeys<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|slot| &slot.key)
    }
}

impl<K, T> ExactSizeIterator for HashKeys<'_, K, T> {}

impl<K, T> FusedIterator for HashKeys<'_, K, T> {}
