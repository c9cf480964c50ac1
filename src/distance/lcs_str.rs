//! Longest Common Substring
//!
//! The Longest Common Substring (LCSstr) is the longest run of elements that occurs
//! contiguously in both sequences. Unlike the [`Longest Common Subsequence`] no
//! gaps are allowed, so `"foobar"` and `"fubar"` only share `"bar"`.
//!
//! There can be multiple longest common substrings of the same length:
//!
//! ```
//! use string_metrics::distance::lcs_str;
//!
//! let found: Vec<String> = lcs_str::substrings("abcxyz".chars(), "xyzabc".chars())
//!     .into_iter()
//!     .map(|substring| substring.into_iter().collect())
//!     .collect();
//! assert_eq!(vec!["abc", "xyz"], found);
//! ```
//!
//! ## Performance
//!
//! The table of common suffix lengths only ever looks back one row on the diagonal,
//! so it is filled using two rows. The runtime complexity is `O(N*M)` and the memory usage
//! `O(M)` plus the found substrings.
//!
//! [`Longest Common Subsequence`]: https://en.wikipedia.org/wiki/Longest_common_subsequence

use crate::details::distance::Metric;
use crate::HashableChar;
use std::cmp::max;
use std::mem;

/// fill one row of the table
///
/// `cur_row[j]` is the length of the common substring ending with `ch1` and `s2[j]`
fn fill_row<Elem1, Elem2>(ch1: Elem1, s2: &[Elem2], prev_row: &[usize], cur_row: &mut [usize])
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: Copy,
{
    for (j, &ch2) in s2.iter().enumerate() {
        cur_row[j] = if ch1 != ch2 {
            0
        } else if j == 0 {
            1
        } else {
            prev_row[j - 1] + 1
        };
    }
}

fn lcs_str_length<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2> + Copy,
    Elem2: Copy,
{
    let mut prev_row = vec![0; s2.len()];
    let mut cur_row = vec![0; s2.len()];
    let mut max_len = 0;

    for &ch1 in s1 {
        fill_row(ch1, s2, &prev_row, &mut cur_row);
        max_len = cur_row.iter().copied().fold(max_len, max);
        mem::swap(&mut prev_row, &mut cur_row);
    }

    max_len
}

fn lcs_str_substrings<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> Vec<Vec<Elem1>>
where
    Elem1: PartialEq<Elem2> + PartialEq + Copy,
    Elem2: Copy,
{
    let mut prev_row = vec![0; s2.len()];
    let mut cur_row = vec![0; s2.len()];
    let mut max_len = 0;
    let mut found: Vec<Vec<Elem1>> = Vec::new();

    for (i, &ch1) in s1.iter().enumerate() {
        fill_row(ch1, s2, &prev_row, &mut cur_row);

        for &len in &cur_row {
            if len == 0 || len < max_len {
                continue;
            }

            let substring = &s1[i + 1 - len..=i];
            if len > max_len {
                max_len = len;
                found.clear();
                found.push(substring.to_vec());
            } else if !found.iter().any(|known| known.as_slice() == substring) {
                found.push(substring.to_vec());
            }
        }

        mem::swap(&mut prev_row, &mut cur_row);
    }

    found
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
        self.maximum(s1.len(), s2.len()) - lcs_str_length(s1, s2)
    }

    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        lcs_str_length(s1, s2)
    }
}

/// Length of the longest common substring
///
/// Returns 0 when the sequences share no element.
///
/// # Examples
///
/// ```
/// use string_metrics::distance::lcs_str;
///
/// assert_eq!(6, lcs_str::length("foobar".chars(), "123foobar".chars()));
/// assert_eq!(0, lcs_str::length("abc".chars(), "".chars()));
/// ```
pub fn length<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
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

/// All distinct longest common substrings
///
/// The substrings are taken from `s1` and returned in the order they end in `s1`.
/// Substrings found at multiple positions are only returned once.
///
/// # Examples
///
/// ```
/// use string_metrics::distance::lcs_str;
///
/// let found = lcs_str::substrings("foobar".chars(), "foobar123".chars());
/// assert_eq!(vec!["foobar".chars().collect::<Vec<_>>()], found);
/// ```
pub fn substrings<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> Vec<Vec<Iter1::Item>>
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + PartialEq + Copy,
    Iter2::Item: Copy,
{
    let s1: Vec<_> = s1.into_iter().collect();
    let s2: Vec<_> = s2.into_iter().collect();
    lcs_str_substrings(&s1, &s2)
}

/// Longest Common Substring similarity
///
/// Same as [`length`].
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    length(s1, s2)
}

/// Longest Common Substring distance in the range [max, 0]
///
/// This is calculated as `max(len1, len2) - `[`length`].
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

/// Normalized Longest Common Substring distance in the range [1.0, 0.0]
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

/// Normalized Longest Common Substring similarity in the range [0.0, 1.0]
///
/// This is calculated as [`length`]` / max(len1, len2)`.
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

/// `One x Many` comparisons using the Longest Common Substring
///
/// # Examples
///
/// ```
/// use string_metrics::distance::lcs_str;
///
/// let scorer = lcs_str::BatchComparator::new("password".chars());
/// assert_eq!(4, scorer.length("pa55word".chars()));
/// assert_eq!(5, scorer.length("passwd".chars()));
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
        self.maximum(s1.len(), s2.len()) - lcs_str_length(s1, s2)
    }

    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        lcs_str_length(s1, s2)
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

    /// Length calculated similar to [`length`]
    pub fn length<Iter2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        self._similarity(&self.s1, &s2)
    }

    /// Substrings calculated similar to [`substrings`]
    pub fn substrings<Iter2>(&self, s2: Iter2) -> Vec<Vec<Elem1>>
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item> + PartialEq,
        Iter2::Item: Copy,
    {
        let s2: Vec<_> = s2.into_iter().collect();
        lcs_str_substrings(&self.s1, &s2)
    }

    /// Similarity calculated similar to [`similarity`]
    pub fn similarity<Iter2>(&self, s2: Iter2) -> usize
    where
        Iter2: IntoIterator,
        Elem1: PartialEq<Iter2::Item>,
        Iter2::Item: PartialEq<Elem1> + HashableChar + Copy,
    {
        self.length(s2)
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
