pub mod damerau_levenshtein;
pub mod lcs_str;
pub mod levenshtein;
pub mod osa;
