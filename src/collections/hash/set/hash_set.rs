use std::borrow::Borrow;
use std::collections::HashSet as StdHashSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::index::{buckets_for, KeyIndex};
use super::slots::Slots;
use super::{Entries, HashKeys, Values};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// An insertion-ordered set of values, where two values are considered the same if the hash
/// function `F` maps them to equal keys.
///
/// The hash function is fixed when the set is created and is the only arbiter of membership: the
/// values themselves don't need to implement [`Hash`] or [`Eq`]. When a value is added whose key is
/// already present, the set keeps the value it already has, in its existing position.
///
/// It is a logic error for the hash function to return different keys for the same value over
/// time (e.g. by reading interior mutability or global state). The set doesn't detect this, and
/// membership queries will give unspecified (but memory-safe) answers.
///
/// Iterators borrow the set, so it can't be mutated while any of them are alive. Each call to
/// [`values`](HashSet::values), [`keys`](HashSet::keys) or [`entries`](HashSet::entries) returns a
/// fresh sequence starting from the oldest element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert`/`add` | `O(1)`**, `O(n)` |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `first/last` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `retain` | `O(n)` |
///
/// \* In the event of a hash collision, these functions will take additional time, while the
/// correct bucket is found.
///
/// \** If the HashSet doesn't have enough capacity for the new element, the bucket index is
/// rebuilt which takes `O(n)`. \* applies as well.
pub struct HashSet<T, K, F, B = RandomState>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    pub(crate) slots: Slots<K, T>,
    pub(crate) index: KeyIndex<B>,
    pub(crate) hash_fn: F,
}

/// A HashSet whose hash function is a plain function pointer, so that the whole family of sets
/// sharing it can be named as a type.
pub type FnHashSet<T, K> = HashSet<T, K, fn(&T) -> K>;

impl<T, K, F> HashSet<T, K, F>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    /// Creates a new, empty HashSet which determines uniqueness with `hash_fn`. No memory is
    /// allocated until the first insertion.
    pub fn new(hash_fn: F) -> HashSet<T, K, F> {
        HashSet::with_hasher(hash_fn, RandomState::new())
    }

    /// Creates a new HashSet able to hold `cap` elements without reallocating.
    ///
    /// # Panics
    /// Panics if `cap` is too large to be indexed.
    pub fn with_cap(cap: usize, hash_fn: F) -> HashSet<T, K, F> {
        HashSet::with_cap_and_hasher(cap, hash_fn, RandomState::new())
    }

    /// Creates a HashSet from an initial sequence of values. Each value is added in sequence order
    /// with the same rule as [`add`](HashSet::add), so later duplicates are dropped.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(values: I, hash_fn: F) -> HashSet<T, K, F> {
        let mut set = HashSet::new(hash_fn);
        set.extend(values);
        set
    }
}

impl<T, K, F, B> HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    /// Describes the kind of collection, this is also what [`Display`] writes.
    pub const KIND: &'static str = "HashSet";

    pub fn with_hasher(hash_fn: F, hasher: B) -> HashSet<T, K, F, B> {
        HashSet {
            slots: Slots::new(),
            index: KeyIndex::with_hasher(hasher),
            hash_fn,
        }
    }

    /// # Panics
    /// Panics if `cap` is too large to be indexed.
    pub fn with_cap_and_hasher(cap: usize, hash_fn: F, hasher: B) -> HashSet<T, K, F, B> {
        let buckets = buckets_for(cap).throw();

        HashSet {
            slots: Slots::with_cap(cap),
            index: KeyIndex::with_buckets_and_hasher(buckets, hasher),
            hash_fn,
        }
    }

    /// Returns the number of unique keys in the HashSet.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements that fit before the bucket index has to grow.
    pub fn cap(&self) -> usize {
        self.index.load_cap()
    }

    pub const fn hash_fn(&self) -> &F {
        &self.hash_fn
    }

    pub const fn hasher(&self) -> &B {
        &self.index.hasher
    }

    /// Computes the key that `value` has within this set.
    pub fn key_of(&self, value: &T) -> K {
        (self.hash_fn)(value)
    }

    /// Adds `value` to the set if no element with an equal key is present. An existing element is
    /// neither replaced nor moved.
    ///
    /// Returns true if the value was added. See [`add`](HashSet::add) for a chainable version.
    pub fn insert(&mut self, value: T) -> bool {
        let key = (self.hash_fn)(&value);
        let hash = self.index.hash_key(&key);

        if self.index.find(hash, &key, &self.slots).is_some() {
            return false;
        }

        if self.index.should_grow() {
            self.index.grow(&self.slots);
        }

        let id = self.slots.push_back(hash, key, value);
        self.index.place(hash, id);
        true
    }

    /// Adds `value` with the same rule as [`insert`](HashSet::insert), returning the set so that
    /// calls can be chained.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.insert(value);
        self
    }

    /// Returns true if an element with the same key as `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.contains_key(&(self.hash_fn)(value))
    }

    /// Returns true if an element with the provided `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the stored element that has the same key as `value`. This may be a different value
    /// to the one provided, if they only agree on their key.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.get_by_key(&(self.hash_fn)(value))
    }

    pub fn get_by_key<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (_, id) = self.find(key)?;
        self.slots.get(id).map(|slot| &slot.value)
    }

    /// Returns the oldest element in the set.
    pub fn first(&self) -> Option<&T> {
        self.slots.get(self.slots.head()?).map(|slot| &slot.value)
    }

    /// Returns the most recently added element in the set.
    pub fn last(&self) -> Option<&T> {
        self.slots.get(self.slots.tail()?).map(|slot| &slot.value)
    }

    /// Removes the element with the same key as `value`, returning true if there was one.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the element with the same key as `value`, returning the stored element.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let key = (self.hash_fn)(value);
        self.remove_key(&key)
    }

    /// Removes the element associated with `key`, returning it if it exists.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (bucket, id) = self.find(key)?;

        self.index.remove_at(bucket, &self.slots);
        self.slots.remove(id).map(|slot| slot.value)
    }

    /// Removes all elements, dropping them. The bucket index keeps its capacity.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
    }

    /// Keeps only the elements for which `keep` returns true, preserving the order of those that
    /// remain.
    pub fn retain<P: FnMut(&T) -> bool>(&mut self, mut keep: P) {
        let mut cursor = self.slots.head();

        while let Some(id) = cursor {
            let Some(slot) = self.slots.get(id) else { break };
            cursor = slot.next;

            if keep(&slot.value) {
                continue;
            }

            if let Some((bucket, _)) = self.index.find(slot.hash, &slot.key, &self.slots) {
                self.index.remove_at(bucket, &self.slots);
            }
            self.slots.remove(id);
        }
    }

    /// Increases the capacity of the HashSet to ensure that len + `extra` elements will fit
    /// without growing the index.
    ///
    /// # Panics
    /// Panics if the new capacity is too large to be indexed.
    pub fn reserve(&mut self, extra: usize) {
        self.index.reserve(extra, &self.slots).throw();
        self.slots.reserve(extra);
    }

    /// Returns an iterator over all elements in insertion order, as references.
    pub fn iter(&self) -> Values<'_, K, T> {
        self.into_iter()
    }

    /// Returns a new sequence over the stored values in insertion order.
    pub fn values(&self) -> Values<'_, K, T> {
        self.iter()
    }

    /// The same sequence as [`values`](HashSet::values). A set has no keys separate from its
    /// values, this mirrors the shape of a map. See [`hash_keys`](HashSet::hash_keys) for the keys
    /// produced by the hash function.
    pub fn keys(&self) -> Values<'_, K, T> {
        self.iter()
    }

    /// Returns a new sequence of `(value, value)` pairs in insertion order.
    pub fn entries(&self) -> Entries<'_, K, T> {
        Entries(self.slots.iter())
    }

    /// Returns a new sequence over the keys computed by the hash function, in insertion order.
    pub fn hash_keys(&self) -> HashKeys<'_, K, T> {
        HashKeys(self.slots.iter())
    }

    /// Invokes `callback` once per element in insertion order with the element as both the value
    /// and the key, followed by the set itself.
    pub fn for_each<C: FnMut(&T, &T, &Self)>(&self, mut callback: C) {
        for value in self {
            callback(value, value, self);
        }
    }

    /// Copies the elements into a standard library set. Uniqueness reverts to `T`'s own [`Eq`], so
    /// the result may be smaller if values are equal without sharing a key, or larger in the
    /// opposite case.
    pub fn to_std_set(&self) -> StdHashSet<T>
    where
        T: Hash + Eq + Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a standard library set, discarding the hash function.
    pub fn into_std_set(self) -> StdHashSet<T>
    where
        T: Hash + Eq,
    {
        self.into_iter().collect()
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.index.hash_key(key);
        self.index.find(hash, key, &self.slots)
    }
}

impl<T, K, F, B> Extend<T> for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, K, F, B> Clone for HashSet<T, K, F, B>
where
    T: Clone,
    K: Hash + Eq + Clone,
    F: Fn(&T) -> K + Clone,
    B: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        HashSet {
            slots: self.slots.clone(),
            index: self.index.clone(),
            hash_fn: self.hash_fn.clone(),
        }
    }
}

/// Two sets are equal if they hold the same keys, regardless of order or of which values were
/// stored for each key.
impl<T, K, F, B> PartialEq for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.hash_keys().all(|key| other.contains_key(key))
    }
}

impl<T, K, F, B> Eq for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
}

impl<T, K, F, B> From<HashSet<T, K, F, B>> for StdHashSet<T>
where
    T: Hash + Eq,
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn from(value: HashSet<T, K, F, B>) -> Self {
        value.into_std_set()
    }
}

impl<T, K, F, B> Debug for HashSet<T, K, F, B>
where
    T: Debug,
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vec<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T, K, F, B> Display for HashSet<T, K, F, B>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    B: BuildHasher,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::KIND)
    }
}
