pub(crate) mod enumeration;
pub(crate) mod error;
pub(crate) mod field;
pub(crate) mod rules;
pub(crate) mod version;
