use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::{cmp, iter, mem};

use super::slots::Slots;
use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// A bucket holds the id of the slot whose key hashes to it (or was displaced into it).
pub(crate) type Bucket = Option<usize>;

/// Calculates the number of buckets needed for `cap` entries to fit without exceeding the load
/// factor.
pub(crate) fn buckets_for(cap: usize) -> Result<usize, CapacityOverflow> {
    let buckets = cap
        .checked_mul(LOAD_FACTOR_DENOMINATOR)
        .map(|scaled| scaled.div_ceil(LOAD_FACTOR_NUMERATOR))
        .ok_or(CapacityOverflow { cap })?;

    if buckets > isize::MAX as usize / mem::size_of::<Bucket>() {
        return Err(CapacityOverflow { cap });
    }
    Ok(buckets)
}

/// An open-addressing table from key hashes to slot ids, resolving collisions by linear probing.
///
/// The index never stores keys itself. Comparisons go through the [`Slots`] arena, which also
/// records the hash of each key so that the table can be rebuilt without calling the hash
/// function or the hasher again.
#[derive(Debug, Clone)]
pub(crate) struct KeyIndex<B> {
    buckets: Box<[Bucket]>,
    len: usize,
    pub(crate) hasher: B,
}

impl<B: BuildHasher> KeyIndex<B> {
    pub fn with_hasher(hasher: B) -> KeyIndex<B> {
        KeyIndex {
            buckets: Box::default(),
            len: 0,
            hasher,
        }
    }

    pub fn with_buckets_and_hasher(buckets: usize, hasher: B) -> KeyIndex<B> {
        KeyIndex {
            buckets: empty_buckets(buckets),
            len: 0,
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of buckets, which is the capacity in the hash table sense. Use
    /// [`KeyIndex::load_cap`] for the number of entries that fit without growing.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_cap(&self) -> usize {
        self.cap().saturating_mul(LOAD_FACTOR_NUMERATOR) / LOAD_FACTOR_DENOMINATOR
    }

    pub fn hash_key<Q: Hash + ?Sized>(&self, key: &Q) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Determines whether the index's length has reached the load capacity, suggesting that it
    /// should grow before another entry is placed.
    pub fn should_grow(&self) -> bool {
        self.len() >= self.load_cap()
    }

    /// Grows the index by the growth factor, ensuring that it can hold additional entries.
    pub fn grow<K, T>(&mut self, slots: &Slots<K, T>) {
        let new_cap = cmp::max(self.cap().saturating_mul(GROWTH_FACTOR), MIN_ALLOCATED_CAP);

        self.realloc_with_cap(new_cap, slots)
    }

    /// Increases the number of buckets so that len + `extra` entries fit without exceeding the
    /// load factor.
    pub fn reserve<K, T>(&mut self, extra: usize, slots: &Slots<K, T>) -> Result<(), CapacityOverflow> {
        let wanted = self.len.checked_add(extra).ok_or(CapacityOverflow { cap: usize::MAX })?;
        let new_cap = buckets_for(wanted)?;
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap, slots);
        }
        Ok(())
    }

    /// Rebuilds the table with `new_cap` buckets, re-placing every slot by its recorded hash. A
    /// capacity that would overload the table is ignored.
    pub fn realloc_with_cap<K, T>(&mut self, new_cap: usize, slots: &Slots<K, T>) {
        if new_cap.saturating_mul(LOAD_FACTOR_NUMERATOR) / LOAD_FACTOR_DENOMINATOR < self.len {
            return;
        }

        self.buckets = empty_buckets(new_cap);

        let mut cursor = slots.head();
        while let Some(id) = cursor {
            // UNREACHABLE: Links only ever point at occupied slots.
            let slot = slots.get(id).unreachable();
            let index = self.find_vacant(slot.hash);
            self.buckets[index] = Some(id);
            cursor = slot.next;
        }
    }

    /// Calculates the ideal bucket for the provided `hash` (or None if there are no buckets). This
    /// doesn't consider collisions, see [`KeyIndex::find`] for that.
    fn ideal_index(&self, hash: u64) -> Option<usize> {
        hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.cap()
    }

    /// Finds the bucket and slot id of the entry whose key equals `key`, if there is one.
    pub fn find<K, T, Q>(&self, hash: u64, key: &Q, slots: &Slots<K, T>) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut index = self.ideal_index(hash)?;

        // Walk the probe sequence until an empty bucket ends it. The load factor guarantees that
        // one exists.
        while let Some(id) = self.buckets[index] {
            let slot = slots.get(id).unreachable();
            if slot.hash == hash && slot.key.borrow() == key {
                return Some((index, id));
            }
            index = self.next_index(index);
        }

        None
    }

    /// Finds the first empty bucket along the probe sequence for `hash`.
    ///
    /// # Panics
    /// Panics if there are no buckets, callers must grow first.
    fn find_vacant(&self, hash: u64) -> usize {
        let mut index = self.ideal_index(hash).unreachable();

        while self.buckets[index].is_some() {
            index = self.next_index(index);
        }

        index
    }

    /// Places the slot `id` along the probe sequence of `hash`. The caller must have checked that
    /// no equal key is indexed and that the index doesn't need to grow.
    pub fn place(&mut self, hash: u64, id: usize) {
        let index = self.find_vacant(hash);
        self.buckets[index] = Some(id);
        self.len += 1;
    }

    /// Empties the bucket at `hole`, then walks the rest of the cluster moving back any entry
    /// whose probe sequence would otherwise be broken by the gap.
    pub fn remove_at<K, T>(&mut self, mut hole: usize, slots: &Slots<K, T>) {
        if self.buckets[hole].take().is_some() {
            self.len -= 1;
        }

        let mut probe = self.next_index(hole);

        while let Some(id) = self.buckets[probe] {
            let ideal = self.ideal_index(slots.get(id).unreachable().hash).unreachable();

            // An entry can stay where it is if its ideal bucket lies cyclically within
            // (hole, probe], because its probe sequence doesn't pass through the hole.
            let reachable = if hole <= probe {
                hole < ideal && ideal <= probe
            } else {
                hole < ideal || ideal <= probe
            };

            if !reachable {
                self.buckets[hole] = self.buckets[probe].take();
                hole = probe;
            }
            probe = self.next_index(probe);
        }
    }

    pub fn clear(&mut self) {
        self.buckets.fill(None);
        self.len = 0;
    }
}

fn empty_buckets(cap: usize) -> Box<[Bucket]> {
    iter::repeat_n(None, cap).collect()
}
