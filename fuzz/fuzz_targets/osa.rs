#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_metrics::distance::{levenshtein, osa};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = osa::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(dist, osa::distance(texts.s2.chars(), texts.s1.chars()));
    assert!(dist <= levenshtein::distance(texts.s1.chars(), texts.s2.chars()));

    osa::BatchComparator::new(texts.s1.bytes()).distance(texts.s2.bytes());
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
