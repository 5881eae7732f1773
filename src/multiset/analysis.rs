//! Frequency counting, duplicate classification, and order-independent
//! sequence equivalence.

use std::hash::Hash;

use super::counts::Multiset;

/// Case-folding policy for frequency analysis over text.
///
/// Text analysis never folds case silently: every text entry point takes
/// one of these values, and there is deliberately no default.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::{char_frequencies, CaseFolding};
///
/// let exact = char_frequencies("Aa", CaseFolding::Exact);
/// assert_eq!(exact.count(&'A'), 1);
/// assert_eq!(exact.count(&'a'), 1);
///
/// let folded = char_frequencies("Aa", CaseFolding::CaseInsensitive);
/// assert_eq!(folded.count(&'a'), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseFolding {
    /// Characters are counted exactly as they appear.
    Exact,
    /// Characters are folded to lowercase before counting.
    CaseInsensitive,
}

/// Counts the occurrences of each element of a sequence.
///
/// Runs in O(n) time and O(k) space, where k is the number of distinct
/// elements. The resulting multiset's [`mass`](Multiset::mass) equals the
/// input length.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::frequency_count;
///
/// let frequencies = frequency_count(vec!["tick", "tock", "tick"]);
/// assert_eq!(frequencies.count(&"tick"), 2);
/// assert_eq!(frequencies.count(&"tock"), 1);
/// assert_eq!(frequencies.mass(), 3);
/// ```
pub fn frequency_count<T, I>(sequence: I) -> Multiset<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().collect()
}

/// Counts the characters of a text under an explicit case-folding policy.
///
/// With [`CaseFolding::CaseInsensitive`], each character is folded through
/// its full lowercase expansion before counting (so `'İ'` contributes its
/// two-character lowercase form).
pub fn char_frequencies(text: &str, policy: CaseFolding) -> Multiset<char> {
    match policy {
        CaseFolding::Exact => text.chars().collect(),
        CaseFolding::CaseInsensitive => text.chars().flat_map(char::to_lowercase).collect(),
    }
}

/// Counts the distinct elements that occur at least twice.
///
/// This classifies elements, not occurrences: an element appearing five
/// times contributes one to the result.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::duplicate_count;
///
/// // 2, 4 and 5 each appear at least twice.
/// let sequence = vec![1, 2, 2, 4, 5, 11, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(duplicate_count(sequence), 3);
/// ```
pub fn duplicate_count<T, I>(sequence: I) -> u64
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    frequency_count(sequence)
        .iter()
        .filter(|&(_, count)| count >= 2)
        .count() as u64
}

/// Counts the distinct characters of a text that occur at least twice,
/// under an explicit case-folding policy.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::{char_duplicate_count, CaseFolding};
///
/// assert_eq!(char_duplicate_count("Indivisibility", CaseFolding::CaseInsensitive), 1);
/// assert_eq!(char_duplicate_count("Indivisibility", CaseFolding::Exact), 1);
/// assert_eq!(char_duplicate_count("aA11", CaseFolding::CaseInsensitive), 2);
/// assert_eq!(char_duplicate_count("aA11", CaseFolding::Exact), 1);
/// ```
pub fn char_duplicate_count(text: &str, policy: CaseFolding) -> u64 {
    char_frequencies(text, policy)
        .iter()
        .filter(|&(_, count)| count >= 2)
        .count() as u64
}

/// Checks whether two sequences are order-independent rearrangements of
/// each other.
///
/// Returns `false` immediately when the lengths differ. Otherwise the
/// right sequence's multiset is built and one occurrence is removed for
/// each element of the left sequence; the check fails the moment an
/// element is missing or already exhausted. Because the lengths match, a
/// fully matched left sequence necessarily exhausts the working multiset.
///
/// The relation is symmetric and reflexive, and ignores ordering and the
/// arrangement of duplicates.
///
/// # Examples
///
/// ```rust
/// use seqflow::multiset::is_equivalent_multiset;
///
/// assert!(is_equivalent_multiset(&[1, 2, 3], &[3, 2, 1]));
/// assert!(!is_equivalent_multiset(&[1, 2, 3], &[1, 2, 3, 3]));
/// assert!(!is_equivalent_multiset(&[1, 1, 2], &[1, 2, 2]));
/// ```
pub fn is_equivalent_multiset<T>(left: &[T], right: &[T]) -> bool
where
    T: Eq + Hash + Clone,
{
    if left.len() != right.len() {
        return false;
    }
    let mut remaining: Multiset<T> = right.iter().cloned().collect();
    left.iter().all(|element| remaining.remove_one(element))
}
