pub(crate) mod kleinanzeigen;
pub(crate) mod photos;
