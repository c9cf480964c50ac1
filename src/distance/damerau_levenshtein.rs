//! Damerau-Levenshtein distance
//!
//! The Damerau-Levenshtein distance measures the minimum number of insertions,
//! deletions, substitutions and transpositions of two adjacent elements required
//! to change one sequence into the other. In contrast to the [`OSA`] distance the
//! transposed elements may be edited further, e.g. `"ca"` becomes `"abc"` with
//! a transposition followed by an insertion between the swapped elements.
//!
//! ## Performance
//!
//! The implementation is the algorithm by Lowrance and Wagner: a full `(N+1)*(M+1)`
//! table plus a map storing the last row each element of the first sequence
//! occurred in. It has a runtime complexity and a memory usage of `O(N*M)`.
//!
//! [`OSA`]: ../osa/index.html

use crate::details::common::remove_common_affix;
use crate::details::distance::Metric;
use crate::details::last_occurrence::LastOccurrence;
use crate::details::matrix::Matrix;
use crate::HashableChar;
use std::cmp::{max, min};

fn damerau_levenshtein_distance_impl<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + HashableChar + Copy,
    Elem2: PartialEq<Elem1> + HashableChar + Copy,
{
    // common affix does not affect the distance
    let (s1, s2) = remove_common_affix(s1, s2);
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut d = Matrix::edit_table(len1, len2);
    let mut last_row_id = LastOccurrence::default();

    for (i, &ch1) in s1.iter().enumerate().map(|(i, ch1)| (i + 1, ch1)) {
        // last column in this row where ch1 matched
        let mut last_col_id = 0;

        for (j, &ch2) in s2.iter().enumerate().map(|(j, ch2)| (j + 1, ch2)) {
            let i1 = last_row_id.get(ch2);
            let j1 = last_col_id;

            let cost = if ch1 == ch2 {
                last_col_id = j;
                0
            } else {
                1
            };

            let substitute = *d.get(i - 1, j - 1) + cost;
            let insert = *d.get(i, j - 1) + 1;
            let delete = *d.get(i - 1, j) + 1;
            let mut temp = min(substitute, min(insert, delete));

            // elements between the transposed pair are deleted / inserted
            if i1 > 0 && j1 > 0 {
                let transpose = *d.get(i1 - 1, j1 - 1) + (i - i1 - 1) + (j - j1 - 1) + 1;
                temp = min(temp, transpose);
            }

            *d.get_mut(i, j) = temp;
        }

        // has to happen after the row is complete
        last_row_id.set(ch1, i);
    }

    *d.get(len1, len2)
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
        damerau_levenshtein_distance_impl(s1, s2)
    }
}

/// Damerau-Levenshtein distance
///
/// Calculates the minimum number of insertions, deletions, substitutions and
/// transpositions of adjacent elements required to change one sequence into the other.
///
/// # Examples
///
/// ```
/// use string_metrics::distance::damerau_levenshtein;
///
/// assert_eq!(1, damerau_levenshtein::distance("ab".chars(), "ba".chars()));
/// assert_eq!(2, damerau_levenshtein::distance("ca".chars(), "abc".chars()));
/// assert_eq!(4, damerau_levenshtein::distance("pantera".chars(), "aorta".chars()));
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

/// Damerau-Levenshtein similarity in the range [max, 0]
///
/// This is calculated as `max(len1, len2) - `[`distance`].
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

/// Normalized Damerau-Levenshtein distance in the range [1.0, 0.0]
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

/// Normalized Damerau-Levenshtein similarity in the range [0.0, 1.0]
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

/// `One x Many` comparisons using the Damerau-Levenshtein distance
///
/// # Examples
///
/// ```
/// use string_metrics::distance::damerau_levenshtein;
///
/// let scorer = damerau_levenshtein::BatchComparator::new("a cat".chars());
/// assert_eq!(2, scorer.distance("an act".chars()));
/// assert_eq!(2, scorer.distance("a abct".chars()));
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
        damerau_levenshtein_distance_impl(s1, s2)
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
