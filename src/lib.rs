//! `string-metrics` measures how similar two sequences are. It was written with
//! look-alike checks of old and new passwords in mind, but works on any sequence
//! of comparable elements.
//!
//! ## Metrics
//!
//! - [`Levenshtein`]: insertions, deletions and substitutions
//! - [`OSA`]: Levenshtein plus transposition of adjacent elements, where no
//!   substring is edited more than once
//! - [`DamerauLevenshtein`]: Levenshtein plus unrestricted transpositions
//! - [`LCSstr`]: the longest common substrings and their length
//!
//! All of them are variants of the Wagner-Fischer dynamic programming algorithm.
//! For every pair of inputs
//! `damerau_levenshtein <= osa <= levenshtein` holds.
//!
//! ## Usage
//!
//! ```rust
//! use string_metrics::distance::{damerau_levenshtein, lcs_str, levenshtein, osa};
//!
//! assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
//!
//! // a single adjacent transposition
//! assert_eq!(2, levenshtein::distance("foobar".chars(), "foboar".chars()));
//! assert_eq!(1, osa::distance("foobar".chars(), "foboar".chars()));
//!
//! // transposition with an insertion in between is only discounted by Damerau-Levenshtein
//! assert_eq!(3, osa::distance("ca".chars(), "abc".chars()));
//! assert_eq!(2, damerau_levenshtein::distance("ca".chars(), "abc".chars()));
//!
//! // If you are sure the input strings are ascii only it's usually faster to operate on bytes
//! assert_eq!(6, lcs_str::length("foobar".bytes(), "foobar123".bytes()));
//!
//! // When comparing a single string to multiple strings you can use the provided `BatchComparators`.
//! let scorer = levenshtein::BatchComparator::new("password".chars());
//! assert_eq!(2, scorer.distance("pa55word".chars()));
//! assert_eq!(2, scorer.distance("passwd".chars()));
//! ```
//!
//! Plain string slices can use the methods of [`StrMetrics`]:
//!
//! ```rust
//! use string_metrics::StrMetrics;
//!
//! assert_eq!(1, "waht".damerau_levenshtein_distance("what"));
//! assert!("foobar".longest_common_substrings("foobar123").contains("foobar"));
//! ```
//!
//! [`Levenshtein`]: distance/levenshtein/index.html
//! [`OSA`]: distance/osa/index.html
//! [`DamerauLevenshtein`]: distance/damerau_levenshtein/index.html
//! [`LCSstr`]: distance/lcs_str/index.html

#![forbid(unsafe_code)]
#![allow(
    // hash values double as table indices and lengths are converted
    // to floating point when normalizing
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::many_single_char_names,
)]

pub(crate) mod details;
pub mod distance;
mod ext;

pub use ext::StrMetrics;

/// Hash value in the range `i64::MIN` - `u64::MAX`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hash {
    UNSIGNED(u64),
    SIGNED(i64),
}

/// trait used to map between element types and unique hash values
///
/// The Damerau-Levenshtein distance remembers the last row each element was seen in.
/// This trait provides the key for that lookup. It is already implemented for `char`
/// and the integer types, so `chars()` and `bytes()` work out of the box.
/// For custom types keep in mind:
/// - hashes have to be a unique value in the range `i64::MIN` - `u64::MAX`.
///   If two distinct objects produce the same hash, they will be assumed to be similar
///   when looking for transpositions.
/// - values in the range 0-255 are stored in a lookup table and are the fastest.
///
/// # Example
/// ```
/// use string_metrics::distance;
/// use string_metrics::{Hash, HashableChar};
///
/// #[derive(PartialEq)]
/// struct MyType {
///     val: u64,
/// }
///
/// impl HashableChar for &MyType {
///     fn hash_char(&self) -> Hash {
///         Hash::UNSIGNED(self.val)
///     }
/// }
///
/// assert_eq!(
///     1,
///     distance::damerau_levenshtein::distance(
///         &[MyType { val: 1 }, MyType { val: 2 }],
///         &[MyType { val: 2 }, MyType { val: 1 }],
///     )
/// );
/// ```
pub trait HashableChar {
    fn hash_char(&self) -> Hash;
}
