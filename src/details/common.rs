use crate::{Hash, HashableChar};

macro_rules! impl_hashable_char {
    ($base_type:ty, $kind:tt $(, $t:ty)*) => {
        impl HashableChar for $base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(*self $(as $t)*)
            }
        }

        impl HashableChar for &$base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(**self $(as $t)*)
            }
        }
    }
}

impl_hashable_char!(char, UNSIGNED, u32, u64);
impl_hashable_char!(i8, SIGNED, i64);
impl_hashable_char!(i16, SIGNED, i64);
impl_hashable_char!(i32, SIGNED, i64);
impl_hashable_char!(i64, SIGNED, i64);
impl_hashable_char!(u8, UNSIGNED, u64);
impl_hashable_char!(u16, UNSIGNED, u64);
impl_hashable_char!(u32, UNSIGNED, u64);
impl_hashable_char!(u64, UNSIGNED, u64);

pub(crate) fn find_common_prefix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .zip(s2.iter())
        .take_while(|(a_char, b_char)| *a_char == *b_char)
        .count()
}

pub(crate) fn find_common_suffix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a_char, b_char)| *a_char == *b_char)
        .count()
}

/// strip the prefix and suffix shared by both sequences.
///
/// A common affix does not change any of the edit distances,
/// but it shrinks the table that has to be filled.
pub(crate) fn remove_common_affix<'a, 'b, Elem1, Elem2>(
    s1: &'a [Elem1],
    s2: &'b [Elem2],
) -> (&'a [Elem1], &'b [Elem2])
where
    Elem1: PartialEq<Elem2>,
{
    let prefix_len = find_common_prefix(s1, s2);
    let s1 = &s1[prefix_len..];
    let s2 = &s2[prefix_len..];

    let suffix_len = find_common_suffix(s1, s2);
    (&s1[..s1.len() - suffix_len], &s2[..s2.len() - suffix_len])
}
