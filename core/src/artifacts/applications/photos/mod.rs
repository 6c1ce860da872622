//! Parse the iCloud Shared Photo Library assets tracked in `Photos.sqlite`

pub(crate) mod assets;
mod enums;
pub(crate) mod error;
mod layouts;
