pub(crate) mod applications;
pub(crate) mod collection;
pub(crate) mod error;
pub(crate) mod outcome;
pub(crate) mod output;
pub(crate) mod registry;
