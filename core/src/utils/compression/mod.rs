pub(crate) mod compress;
pub(crate) mod error;
