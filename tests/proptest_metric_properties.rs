//! Property-based tests for the relations between the metrics.
//!
//! 1. **Identity**: d(x, x) = 0
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Ordering**: damerau_levenshtein(x, y) <= osa(x, y) <= levenshtein(x, y)
//! 4. **Empty input**: levenshtein("", y) = len(y)
//! 5. **LCS bounds**: 0 <= lcs_len(x, y) <= min(len(x), len(y))

use proptest::prelude::*;
use string_metrics::distance::{damerau_levenshtein, lcs_str, levenshtein, osa};

// a small alphabet makes matches and transpositions likely
fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,12}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn identity(a in arb_string()) {
        prop_assert_eq!(0, levenshtein::distance(a.chars(), a.chars()));
        prop_assert_eq!(0, osa::distance(a.chars(), a.chars()));
        prop_assert_eq!(0, damerau_levenshtein::distance(a.chars(), a.chars()));
        prop_assert_eq!(a.chars().count(), lcs_str::length(a.chars(), a.chars()));
    }

    #[test]
    fn symmetry(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(
            levenshtein::distance(a.chars(), b.chars()),
            levenshtein::distance(b.chars(), a.chars())
        );
        prop_assert_eq!(
            osa::distance(a.chars(), b.chars()),
            osa::distance(b.chars(), a.chars())
        );
        prop_assert_eq!(
            damerau_levenshtein::distance(a.chars(), b.chars()),
            damerau_levenshtein::distance(b.chars(), a.chars())
        );
        prop_assert_eq!(
            lcs_str::length(a.chars(), b.chars()),
            lcs_str::length(b.chars(), a.chars())
        );
    }

    #[test]
    fn ordering(a in arb_string(), b in arb_string()) {
        let lev = levenshtein::distance(a.chars(), b.chars());
        let restricted = osa::distance(a.chars(), b.chars());
        let dl = damerau_levenshtein::distance(a.chars(), b.chars());

        prop_assert!(dl <= restricted, "dl({}, {}) = {} > osa = {}", a, b, dl, restricted);
        prop_assert!(restricted <= lev, "osa({}, {}) = {} > levenshtein = {}", a, b, restricted, lev);
    }

    #[test]
    fn ordering_unicode(a in arb_unicode_string(), b in arb_unicode_string()) {
        let lev = levenshtein::distance(a.chars(), b.chars());
        let restricted = osa::distance(a.chars(), b.chars());
        let dl = damerau_levenshtein::distance(a.chars(), b.chars());

        prop_assert!(dl <= restricted);
        prop_assert!(restricted <= lev);
    }

    #[test]
    fn empty_input(a in arb_unicode_string()) {
        let len = a.chars().count();
        prop_assert_eq!(len, levenshtein::distance("".chars(), a.chars()));
        prop_assert_eq!(len, osa::distance(a.chars(), "".chars()));
        prop_assert_eq!(len, damerau_levenshtein::distance("".chars(), a.chars()));
        prop_assert_eq!(0, lcs_str::length("".chars(), a.chars()));
    }

    #[test]
    fn distance_bounded_by_longer_length(a in arb_string(), b in arb_string()) {
        let longer = a.len().max(b.len());
        let shorter = a.len().min(b.len());
        let lev = levenshtein::distance(a.bytes(), b.bytes());

        prop_assert!(lev <= longer);
        prop_assert!(lev >= longer - shorter);
    }

    #[test]
    fn lcs_bounds(a in arb_string(), b in arb_string()) {
        let len = lcs_str::length(a.chars(), b.chars());
        prop_assert!(len <= a.len().min(b.len()));

        for substring in lcs_str::substrings(a.chars(), b.chars()) {
            let substring: String = substring.into_iter().collect();
            prop_assert_eq!(len, substring.len());
            prop_assert!(a.contains(&substring));
            prop_assert!(b.contains(&substring));
        }
    }

    #[test]
    fn lcs_substrings_distinct(a in arb_string(), b in arb_string()) {
        let found = lcs_str::substrings(a.bytes(), b.bytes());
        for (i, first) in found.iter().enumerate() {
            for second in &found[i + 1..] {
                prop_assert_ne!(first, second);
            }
        }
    }

    #[test]
    fn batch_matches_individual(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(
            levenshtein::distance(a.chars(), b.chars()),
            levenshtein::BatchComparator::new(a.chars()).distance(b.chars())
        );
        prop_assert_eq!(
            osa::distance(a.chars(), b.chars()),
            osa::BatchComparator::new(a.chars()).distance(b.chars())
        );
        prop_assert_eq!(
            damerau_levenshtein::distance(a.chars(), b.chars()),
            damerau_levenshtein::BatchComparator::new(a.chars()).distance(b.chars())
        );
        prop_assert_eq!(
            lcs_str::substrings(a.chars(), b.chars()),
            lcs_str::BatchComparator::new(a.chars()).substrings(b.chars())
        );
    }
}

#[test]
fn transposition_discount() {
    assert_eq!(1, damerau_levenshtein::distance("ab".chars(), "ba".chars()));
    assert_eq!(2, levenshtein::distance("ab".chars(), "ba".chars()));
}
