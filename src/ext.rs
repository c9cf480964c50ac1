use crate::distance::{damerau_levenshtein, lcs_str, levenshtein, osa};
use std::collections::BTreeSet;

/// String metrics in method form
///
/// All methods operate on the `char`s of both strings.
///
/// # Examples
///
/// ```
/// use string_metrics::StrMetrics;
///
/// let old = "alongpassword";
/// let new = "a1ongpassw0rd1";
/// assert_eq!(3, old.levenshtein_distance(new));
/// assert_eq!(3, old.osa_distance(new));
/// assert_eq!(3, old.damerau_levenshtein_distance(new));
/// assert_eq!(8, old.longest_common_substring_len(new));
/// ```
pub trait StrMetrics {
    /// see [`levenshtein::distance`]
    fn levenshtein_distance(&self, other: &str) -> usize;

    /// see [`osa::distance`]
    fn osa_distance(&self, other: &str) -> usize;

    /// see [`damerau_levenshtein::distance`]
    fn damerau_levenshtein_distance(&self, other: &str) -> usize;

    /// see [`lcs_str::substrings`]
    fn longest_common_substrings(&self, other: &str) -> BTreeSet<String>;

    /// see [`lcs_str::length`]
    fn longest_common_substring_len(&self, other: &str) -> usize;
}

impl StrMetrics for str {
    fn levenshtein_distance(&self, other: &str) -> usize {
        levenshtein::distance(self.chars(), other.chars())
    }

    fn osa_distance(&self, other: &str) -> usize {
        osa::distance(self.chars(), other.chars())
    }

    fn damerau_levenshtein_distance(&self, other: &str) -> usize {
        damerau_levenshtein::distance(self.chars(), other.chars())
    }

    fn longest_common_substrings(&self, other: &str) -> BTreeSet<String> {
        lcs_str::substrings(self.chars(), other.chars())
            .into_iter()
            .map(|substring| substring.into_iter().collect())
            .collect()
    }

    fn longest_common_substring_len(&self, other: &str) -> usize {
        lcs_str::length(self.chars(), other.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_match_functions() {
        let pairs = [("kitten", "sitting"), ("ca", "abc"), ("waht", "what"), ("", "abc")];
        for (s1, s2) in pairs {
            assert_eq!(
                levenshtein::distance(s1.chars(), s2.chars()),
                s1.levenshtein_distance(s2)
            );
            assert_eq!(osa::distance(s1.chars(), s2.chars()), s1.osa_distance(s2));
            assert_eq!(
                damerau_levenshtein::distance(s1.chars(), s2.chars()),
                s1.damerau_levenshtein_distance(s2)
            );
            assert_eq!(
                lcs_str::length(s1.chars(), s2.chars()),
                s1.longest_common_substring_len(s2)
            );
        }
    }

    #[test]
    fn substrings_as_set() {
        let found = "abcxyzabc".longest_common_substrings("xyzabc");
        assert_eq!(1, found.len());
        assert!(found.contains("xyzabc"));

        let found = "book".longest_common_substrings("back");
        let expected: BTreeSet<String> = ["b", "k"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(expected, found);

        assert!("abc".longest_common_substrings("").is_empty());
    }

    #[test]
    fn owned_strings() {
        let s1 = String::from("Damerau");
        let s2 = String::from("Damreau");
        assert_eq!(2, s1.levenshtein_distance(&s2));
        assert_eq!(1, s1.osa_distance(&s2));
        assert_eq!(1, s1.damerau_levenshtein_distance(&s2));
        assert_eq!(3, s1.longest_common_substring_len(&s2));
    }
}
