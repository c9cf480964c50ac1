//! Optimal String Alignment distance
//!
//! The Optimal String Alignment distance (OSA), also called restricted edit distance,
//! extends the Levenshtein distance with transpositions of two adjacent elements.
//! Unlike the [`Damerau-Levenshtein`] distance it does not allow a substring to be
//! edited more than once, so a transposition can't be combined with further edits
//! of the transposed elements. This makes it an upper bound of the Damerau-Levenshtein
//! distance:
//!
//! ```
//! use string_metrics::distance::{damerau_levenshtein, osa};
//!
//! assert_eq!(3, osa::distance("ca".chars(), "abc".chars()));
//! assert_eq!(2, damerau_levenshtein::distance("ca".chars(), "abc".chars()));
//! ```
//!
//! ## Performance
//!
//! A transposition looks back two rows, so the full `(N+1)*(M+1)` table is kept.
//! Runtime and memory usage are both `O(N*M)`.
//!
//! [`Damerau-Levenshtein`]: ../damerau_levenshtein/index.html

use crate::details::common::remove_common_affix;
use crate::details::distance::Metric;
use crate::details::matrix::Matrix;
use crate::HashableChar;
use std::cmp::{max, min};

fn osa_distance_impl<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: PartialEq<Elem1> + Copy,
{
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

    for i in 0..len1 {
        for j in 0..len2 {
            let cost = usize::from(s1[i] != s2[j]);
            let substitute = *d.get(i, j) + cost;
            let delete = *d.get(i, j + 1) + 1;
            let insert = *d.get(i + 1, j) + 1;
            let mut temp = min(substitute, min(delete, insert));

            // only strictly adjacent elements can be swapped
            if i > 0 && j > 0 && s1[i] == s2[j - 1] && s1[i - 1] == s2[j] {
                temp = min(temp, *d.get(i - 1, j - 1) + cost);
            }

            *d.get_mut(i + 1, j + 1) = temp;
        }
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
        osa_distance_impl(s1, s2)
    }
}

/// Optimal String Alignment distance
///
/// Calculates the minimum number of insertions, deletions, substitutions and
/// transpositions of adjacent elements required to change one sequence into the
/// other, editing no substring more than once.
///
/// # Examples
///
/// ```
/// use string_metrics::distance::osa;
///
/// assert_eq!(1, osa::distance("foobar".chars(), "foboar".chars()));
/// assert_eq!(2, osa::distance("a cat".chars(), "an act".chars()));
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

/// OSA similarity in the range [max, 0]
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

/// Normalized OSA distance in the range [1.0, 0.0]
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

/// Normalized OSA similarity in the range [0.0, 1.0]
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

/// `One x Many` comparisons using the OSA distance
///
/// # Examples
///
/// ```
/// use string_metrics::distance::osa;
///
/// let scorer = osa::BatchComparator::new("Damerau".chars());
/// assert_eq!(1, scorer.distance("Damreau".chars()));
/// assert_eq!(2, scorer.distance("Daremau".chars()));
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
        osa_distance_impl(s1, s2)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_distance<Iter1, Iter2>(s1_: Iter1, s2_: Iter2) -> usize
    where
        Iter1: IntoIterator,
        Iter1::IntoIter: Clone,
        Iter2: IntoIterator,
        Iter2::IntoIter: Clone,
        Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
        Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
    {
        let s1 = s1_.into_iter();
        let s2 = s2_.into_iter();
        let res1 = distance(s1.clone(), s2.clone());
        let res2 = distance(s2.clone(), s1.clone());

        let scorer1 = BatchComparator::new(s1.clone());
        let res3 = scorer1.distance(s2.clone());
        let scorer2 = BatchComparator::new(s2.clone());
        let res4 = scorer2.distance(s1.clone());

        assert_eq!(res1, res2);
        assert_eq!(res1, res3);
        assert_eq!(res1, res4);
        res1
    }

    fn test_distance_ascii(s1: &str, s2: &str) -> usize {
        let res1 = test_distance(s1.chars(), s2.chars());
        let res2 = test_distance(s1.bytes(), s2.bytes());

        assert_eq!(res1, res2);
        res1
    }

    #[test]
    fn simple() {
        assert_eq!(0, test_distance_ascii("", ""));
        assert_eq!(4, test_distance_ascii("aaaa", ""));
        assert_eq!(0, test_distance_ascii("a", "a"));
        assert_eq!(1, test_distance_ascii("a", "b"));

        assert_eq!(3, test_distance_ascii("CA", "ABC"));
        assert_eq!(1, test_distance_ascii("CA", "AC"));

        let filler = "a".repeat(64);
        let s1 = "a".to_string() + &filler + "CA" + &filler + "a";
        let s2 = "b".to_string() + &filler + "AC" + &filler + "b";
        assert_eq!(3, test_distance_ascii(&s1, &s2));
    }

    #[test]
    fn transposition() {
        assert_eq!(1, test_distance_ascii("ab", "ba"));
        assert_eq!(1, test_distance_ascii("foobar", "foboar"));
        assert_eq!(1, test_distance_ascii("waht", "what"));
        assert_eq!(1, test_distance_ascii("Damerau", "Damreau"));
        assert_eq!(2, test_distance_ascii("a cat", "an act"));
    }

    /// a transposed pair can't be edited again
    #[test]
    fn restricted_edit() {
        assert_eq!(3, test_distance_ascii("ca", "abc"));
        assert_eq!(3, test_distance_ascii("a cat", "a abct"));
        assert_eq!(5, test_distance_ascii("pantera", "aorta"));
    }

    #[test]
    fn various() {
        assert_eq!(3, test_distance_ascii("kitten", "sitting"));
        assert_eq!(2, test_distance_ascii("thaw", "what"));
        assert_eq!(2, test_distance_ascii("Damerau", "uameraD"));
        assert_eq!(2, test_distance_ascii("Damerau", "Daremau"));
        assert_eq!(2, test_distance_ascii("what", "wtah"));

        assert_eq!(5, similarity("foobar".chars(), "foboar".chars()));
        assert!((normalized_distance("ab".chars(), "ba".chars()) - 0.5).abs() < 0.0001);
        assert!((normalized_similarity("".chars(), "".chars()) - 1.0).abs() < 0.0001);
        assert!(
            (BatchComparator::new("ab".bytes()).normalized_similarity("ba".bytes()) - 0.5).abs()
                < 0.0001
        );
    }
}
