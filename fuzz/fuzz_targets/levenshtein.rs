#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use string_metrics::distance::levenshtein;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let dist = levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(
        dist,
        levenshtein::distance(texts.s2.chars(), texts.s1.chars())
    );
    assert!(dist <= texts.s1.chars().count().max(texts.s2.chars().count()));

    let cached = levenshtein::BatchComparator::new(texts.s1.chars()).distance(texts.s2.chars());
    assert_eq!(dist, cached);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
