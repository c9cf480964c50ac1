use crate::HashableChar;

/// shared scoring for all metrics
///
/// Implementors provide the raw distance and the largest value it can take
/// for the given lengths. Similarity and the normalized scores are derived
/// from these two.
pub(crate) trait Metric {
    fn maximum(&self, len1: usize, len2: usize) -> usize;

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy;

    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        let maximum = self.maximum(s1.len(), s2.len());
        maximum - self._distance(s1, s2)
    }

    fn _normalized_distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        let maximum = self.maximum(s1.len(), s2.len());
        if maximum == 0 {
            return 0.0;
        }

        self._distance(s1, s2) as f64 / maximum as f64
    }

    fn _normalized_similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2> + HashableChar + Copy,
        Elem2: PartialEq<Elem1> + HashableChar + Copy,
    {
        1.0 - self._normalized_distance(s1, s2)
    }
}
