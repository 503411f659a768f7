use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::index::buckets_for;
use super::{ConfigError, HashSet, MissingHashFn};

/// Checked configuration for a family of [`HashSet`]s.
///
/// The hash function is the only required setting. A capacity and a [`BuildHasher`] can be
/// provided as well, they apply to every set the resulting [`HashSetFactory`] creates.
///
/// ```
/// # use keyed_set::collections::hash::set::{HashSetBuilder, ConfigError};
/// let books = HashSetBuilder::new()
///     .hash_fn(|book: &(u32, char)| book.0)
///     .cap(8)
///     .build()?;
///
/// let mut set = books.create();
/// set.add((1, 'a')).add((2, 'b')).add((1, 'c'));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&(1, 'a'), &(2, 'b')]);
/// # Ok::<(), ConfigError>(())
/// ```
pub struct HashSetBuilder<F, B = RandomState> {
    hash_fn: Option<F>,
    cap: usize,
    hasher: B,
}

impl<F> HashSetBuilder<F> {
    pub fn new() -> HashSetBuilder<F> {
        HashSetBuilder {
            hash_fn: None,
            cap: 0,
            hasher: RandomState::new(),
        }
    }
}

impl<F> Default for HashSetBuilder<F> {
    fn default() -> Self {
        HashSetBuilder::new()
    }
}

impl<F, B> HashSetBuilder<F, B> {
    pub fn hash_fn(mut self, hash_fn: F) -> Self {
        self.hash_fn = Some(hash_fn);
        self
    }

    /// Sets the hash function from a value that might not be present, deferring the check to
    /// [`build`](HashSetBuilder::build).
    pub fn maybe_hash_fn(mut self, hash_fn: Option<F>) -> Self {
        self.hash_fn = hash_fn;
        self
    }

    /// Sets the number of elements each new set can hold before reallocating.
    pub fn cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    pub fn hasher<H: BuildHasher>(self, hasher: H) -> HashSetBuilder<F, H> {
        HashSetBuilder {
            hash_fn: self.hash_fn,
            cap: self.cap,
            hasher,
        }
    }

    /// Validates the configuration, producing a factory bound to the hash function.
    ///
    /// # Errors
    /// - [`ConfigError::MissingHashFn`] if no hash function was provided.
    /// - [`ConfigError::CapacityOverflow`] if the capacity can't be indexed.
    pub fn build(self) -> Result<HashSetFactory<F, B>, ConfigError> {
        let hash_fn = self.hash_fn.ok_or(MissingHashFn)?;
        buckets_for(self.cap)?;

        Ok(HashSetFactory {
            hash_fn,
            cap: self.cap,
            hasher: self.hasher,
        })
    }
}

impl<F, B: Debug> Debug for HashSetBuilder<F, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSetBuilder")
            .field("hash_fn", &self.hash_fn.as_ref().map(|_| "<fn>"))
            .field("cap", &self.cap)
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// Creates [`HashSet`]s that all share one hash function (and hasher), making them members of
/// the same family.
///
/// Sets from the same factory agree on what makes two values the same, so set algebra between
/// them is meaningful.
#[derive(Clone)]
pub struct HashSetFactory<F, B = RandomState> {
    hash_fn: F,
    cap: usize,
    hasher: B,
}

impl<F> HashSetFactory<F> {
    pub fn new(hash_fn: F) -> HashSetFactory<F> {
        HashSetFactory {
            hash_fn,
            cap: 0,
            hasher: RandomState::new(),
        }
    }
}

impl<F: Clone, B: BuildHasher + Clone> HashSetFactory<F, B> {
    pub const fn hash_fn(&self) -> &F {
        &self.hash_fn
    }

    /// The capacity that new sets are created with.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Creates a new, empty set.
    pub fn create<T, K>(&self) -> HashSet<T, K, F, B>
    where
        K: Hash + Eq,
        F: Fn(&T) -> K,
    {
        self.create_with_cap(self.cap)
    }

    /// Creates a new, empty set able to hold `cap` elements without reallocating.
    ///
    /// # Panics
    /// Panics if `cap` is too large to be indexed.
    pub fn create_with_cap<T, K>(&self, cap: usize) -> HashSet<T, K, F, B>
    where
        K: Hash + Eq,
        F: Fn(&T) -> K,
    {
        HashSet::with_cap_and_hasher(cap, self.hash_fn.clone(), self.hasher.clone())
    }

    /// Creates a set containing `values`, added in sequence order.
    pub fn create_from<T, K, I>(&self, values: I) -> HashSet<T, K, F, B>
    where
        K: Hash + Eq,
        F: Fn(&T) -> K,
        I: IntoIterator<Item = T>,
    {
        let mut set = self.create();
        set.extend(values);
        set
    }
}

impl<F, B: Debug> Debug for HashSetFactory<F, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSetFactory")
            .field("cap", &self.cap)
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}
