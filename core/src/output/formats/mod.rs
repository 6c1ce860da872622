pub(crate) mod json;
pub(crate) mod jsonl;
pub(crate) mod timeline;
pub(crate) mod tsv;
