//! The multiset type: a mapping from element to occurrence count.

use std::hash::Hash;

use crate::pipeline::Pipeline;

#[cfg(feature = "fxhash")]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type Map<K, V> = std::collections::HashMap<K, V>;

/// A collection where each distinct element carries an occurrence count.
///
/// Counts are always at least 1: removing the last occurrence of an element
/// removes its key entirely, so "absent" and "count zero" are the same
/// observable state and no sentinel values exist. Two multisets are equal
/// iff every key maps to the same count.
///
/// A multiset derived from a sequence of length `n` has [`mass`](Self::mass)
/// exactly `n`, independent of the sequence's ordering.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::Multiset;
///
/// let from_one_order: Multiset<i32> = [1, 2, 2, 3].into_iter().collect();
/// let from_another: Multiset<i32> = [2, 3, 2, 1].into_iter().collect();
///
/// assert_eq!(from_one_order, from_another);
/// assert_eq!(from_one_order.count(&2), 2);
/// assert_eq!(from_one_order.mass(), 4);
/// assert_eq!(from_one_order.distinct_len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiset<T: Eq + Hash> {
    counts: Map<T, u64>,
}

impl<T: Eq + Hash> Multiset<T> {
    /// Creates an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: Map::default(),
        }
    }

    /// Adds one occurrence of `element`.
    pub fn insert(&mut self, element: T) {
        *self.counts.entry(element).or_insert(0) += 1;
    }

    /// Returns the occurrence count of `element`, zero when absent.
    #[must_use]
    pub fn count(&self, element: &T) -> u64 {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Removes one occurrence of `element`.
    ///
    /// Returns `false` when the element is absent or its occurrences are
    /// already exhausted; the multiset is unchanged in that case. The last
    /// occurrence removes the key entirely.
    pub fn remove_one(&mut self, element: &T) -> bool {
        match self.counts.get_mut(element) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(element);
                true
            }
            None => false,
        }
    }

    /// Returns the number of distinct elements.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of occurrences across all elements.
    #[must_use]
    pub fn mass(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns `true` when the multiset holds no occurrences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(element, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.counts.iter().map(|(element, count)| (element, *count))
    }

    /// Hands the `(element, count)` pairs to the pipeline engine.
    ///
    /// Pair order is unspecified; sort inside the pipeline when a
    /// deterministic order is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::multiset::frequency_count;
    ///
    /// let repeated = frequency_count(vec![1, 2, 2, 3, 3, 3])
    ///     .into_pipeline()
    ///     .filter(|&(_, count)| count >= 2)
    ///     .map(|(element, _)| element)
    ///     .sorted()
    ///     .collect()
    ///     .unwrap();
    /// assert_eq!(repeated, vec![2, 3]);
    /// ```
    #[must_use]
    pub fn into_pipeline(self) -> Pipeline<(T, u64)>
    where
        T: 'static,
    {
        crate::pipeline::from_sequence(self.counts.into_iter().collect())
    }
}

impl<T: Eq + Hash> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(sequence);
        multiset
    }
}

impl<T: Eq + Hash> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, sequence: I) {
        for element in sequence {
            self.insert(element);
        }
    }
}

impl<T: Eq + Hash> IntoIterator for Multiset<T> {
    type Item = (T, u64);
    type IntoIter = std::collections::hash_map::IntoIter<T, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
