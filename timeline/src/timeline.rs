use crate::artifacts::{
    kleinanzeigen::{messages, search_history, user},
    photos::shared_library_assets,
};
use serde_json::Value;

#[derive(Debug, PartialEq)]
pub enum Artifacts {
    PhotosSharedLibraryAssets,
    KleinanzeigenMessages,
    KleinanzeigenUser,
    KleinanzeigenSearchHistory,
    Unknown,
}

/// Timeline a parsed artifact. Returns `None` if the artifact has no timestamps to timeline
pub fn timeline_artifact(data: &mut Value, artifact: &Artifacts) -> Option<()> {
    match artifact {
        Artifacts::PhotosSharedLibraryAssets => shared_library_assets(data),
        Artifacts::KleinanzeigenMessages => messages(data),
        Artifacts::KleinanzeigenUser => user(data),
        Artifacts::KleinanzeigenSearchHistory => search_history(data),
        Artifacts::Unknown => None,
    }
}
