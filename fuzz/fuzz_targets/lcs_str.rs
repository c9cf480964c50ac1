#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_metrics::distance::lcs_str;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let len = lcs_str::length(texts.s1.chars(), texts.s2.chars());

    for substring in lcs_str::substrings(texts.s1.chars(), texts.s2.chars()) {
        assert_eq!(len, substring.len());
        let substring: String = substring.into_iter().collect();
        assert!(texts.s1.contains(&substring));
        assert!(texts.s2.contains(&substring));
    }

    lcs_str::BatchComparator::new(texts.s1.chars()).substrings(texts.s2.chars());
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
