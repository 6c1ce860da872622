pub(crate) mod compression;
pub(crate) mod error;
pub(crate) mod logging;
pub(crate) mod time;
pub(crate) mod uuid;
