mod artifacts;
pub mod core;
mod decoder;
pub mod error;
mod filesystem;
mod output;
pub mod structs;
mod utils;
