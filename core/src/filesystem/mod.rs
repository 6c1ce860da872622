pub(crate) mod directory;
pub(crate) mod error;
pub(crate) mod files;
pub(crate) mod metadata;
pub(crate) mod seek;
