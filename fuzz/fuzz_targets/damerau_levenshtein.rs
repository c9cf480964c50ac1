#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_metrics::distance::{damerau_levenshtein, osa};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = damerau_levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(
        dist,
        damerau_levenshtein::distance(texts.s2.chars(), texts.s1.chars())
    );
    assert!(dist <= osa::distance(texts.s1.chars(), texts.s2.chars()));

    damerau_levenshtein::BatchComparator::new(texts.s1.chars()).distance(texts.s2.chars());
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
