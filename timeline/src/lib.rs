mod artifacts;
pub mod timeline;
