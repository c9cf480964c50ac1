pub(crate) mod common;
pub(crate) mod distance;
pub(crate) mod last_occurrence;
pub(crate) mod matrix;
