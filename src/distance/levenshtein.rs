//! Levenshtein distance
//!
//! The Levenshtein distance measures the minimum number of single element
//! insertions, deletions and substitutions required to change one sequence into
//! the other.
//!
//! ## Performance
//!
//! The implementation fills the Wagner-Fischer table using only two rows, so it has
//! a runtime complexity of `O(N*M)` and a memory usage of `O(min(N, M))`.
//! A prefix and suffix shared by both sequences is stripped before filling the table.
//!

use crate::details::common::remove_common_affix;
use crate::details::distance::Metric;
use crate::HashableChar;
use std::cmp::{max, min};
use std::mem;

/// Wagner-Fischer algorithm with two rolling rows
fn wagner_fischer<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    // a row is as long as the second sequence
    if s1.len() < s2.len() {
        return wagner_fischer(s2, s1);
    }

    let mut prev_row: Vec<usize> = (0..=s2.len()).collect();
    let mut cur_row = vec![0; s2.len() + 1];

    for (i, &ch1) in s1.iter().enumerate() {
        cur_row[0] = i + 1;

        for (j, &ch2) in s2.iter().enumerate() {
            let delete = prev_row[j + 1] + 1;
            let insert = cur_row[j] + 1;
            let substitute = prev_row[j] + usize::from(ch1 != ch2);
            cur_row[j + 1] = min(delete, min(insert, substitute));
        }

        mem::swap(&mut prev_row, &mut cur_row);
    }

    prev_row[s2.len()]
}

fn levenshtein_distance_impl<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
    let (s1, s2) = remove_common_affix(s1, s2);

    // only insertions / deletions left
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    wagner_fischer(s1, s2)
}

pub(crate) struct IndividualComparator;

impl Metric for IndividualComparator {
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        max(len1, len2)
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        levenshtein_distance_impl(s1, s2)
    }
}

/// Levenshtein distance
///
/// Calculates the minimum number of insertions, deletions, and substitutions
/// required to change one sequence into the other.
///
/// # Examples
///
/// ```
/// use string_metrics::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
/// assert_eq!(3, levenshtein::distance("".chars(), "abc".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    IndividualComparator {}._distance(&s1, &s2)
}

/// Levenshtein similarity in the range [max, 0]
///
/// This is calculated as `max(len1, len2) - `[`distance`].
///
/// # Examples
///
/// ```
/// use string_metrics::distance::levenshtein;
///
/// assert_eq!(4, levenshtein::similarity("kitten".chars(), "sitting".chars()));
/// ```
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    IndividualComparator {}._similarity(&s1, &s2)
}

/// Normalized Levenshtein distance in the range [1.0, 0.0]
///
/// This is calculated as [`distance`]` / max(len1, len2)`.
pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    IndividualComparator {}._normalized_distance(&s1, &s2)
}

/// Normalized Levenshtein similarity in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`normalized_distance`].
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    IndividualComparator {}._normalized_similarity(&s1, &s2)
}

/// `One x Many` comparisons using the Levenshtein distance
///
/// # Examples
///
/// ```
/// use string_metrics::distance::levenshtein;
///
/// let scorer = levenshtein::BatchComparator::new("kitten".chars());
/// assert_eq!(3, scorer.distance("sitting".chars()));
/// ```
pub struct BatchComparator<Elem1> {
    s1: Vec<Elem1>,
}

impl<CharT> Metric for BatchComparator<CharT> {
    fn maximum(&self, len1: usize, len2: usize) -> usize {
        max(len1, len2)
    }

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        levenshtein_distance_impl(s1, s2)
    }
}

impl<Elem1> BatchComparator<Elem1>
where
    Elem1: HashableChar + Copy,
{
    pub fn new<Iter1>(s1: Iter1) -> Self
    where
        Iter1: IntoIterator<Item = Elem1>,
    {
        Self {
            s1: s1.into_iter().collect(),
        }
    }

    /// Distance calculated similar to [`distance`]
    pub fn distance<Iter2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        self._distance(&self.s1, &s2)
    }

    /// Similarity calculated similar to [`similarity`]
    pub fn similarity<Iter2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        self._similarity(&self.s1, &s2)
    }

    /// Normalized distance calculated similar to [`normalized_distance`]
    pub fn normalized_distance<Iter2>(&self, s2: Iter2) -> f64
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        self._normalized_distance(&self.s1, &s2)
    }

    /// Normalized similarity calculated similar to [`normalized_similarity`]
    pub fn normalized_similarity<Iter2>(&self, s2: Iter2) -> f64
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        self._normalized_similarity(&self.s1, &s2)
    }
}
