//! Parse the Kleinanzeigen.de iOS app caches and preferences

pub(crate) mod error;
pub(crate) mod messages;
pub(crate) mod preferences;
pub(crate) mod query;
pub(crate) mod search;
pub(crate) mod user;
