use super::applications::{
    kleinanzeigen::{
        messages::CONVERSATION_CACHE, preferences::PREFERENCES_PLIST, query::LAST_SEARCH_QUERY,
    },
    photos::assets::minimum_supported_version,
};
use common::applications::ArtifactInfo;

pub(crate) const PHOTOS_SHARED_LIBRARY_ASSETS: &str = "photos-shared-library-assets";
pub(crate) const KLEINANZEIGEN_MESSAGES: &str = "kleinanzeigen-messages";
pub(crate) const KLEINANZEIGEN_USER: &str = "kleinanzeigen-user";
pub(crate) const KLEINANZEIGEN_SEARCH_HISTORY: &str = "kleinanzeigen-search-history";
pub(crate) const KLEINANZEIGEN_LAST_QUERY: &str = "kleinanzeigen-last-query";

const KLEINANZEIGEN_CATEGORY: &str = "Kleinanzeigen.de";
const APPLICATION_LIBRARY: &str = "**/mobile/Containers/Data/Application/*/Library";

/// Every artifact the collector can extract
pub(crate) fn artifact_list() -> Vec<ArtifactInfo> {
    let preferences = format!("{APPLICATION_LIBRARY}/Preferences/{PREFERENCES_PLIST}");
    vec![
        ArtifactInfo {
            name: PHOTOS_SHARED_LIBRARY_ASSETS.to_string(),
            description: String::from(
                "Assets in the iCloud Shared Photo Library with their contributor and share details",
            ),
            category: String::from("Photos"),
            paths: vec![String::from("**/PhotoData/Photos.sqlite*")],
            minimum_version: minimum_supported_version().map(|version| version.to_string()),
        },
        ArtifactInfo {
            name: KLEINANZEIGEN_MESSAGES.to_string(),
            description: String::from("Cached Kleinanzeigen messages"),
            category: KLEINANZEIGEN_CATEGORY.to_string(),
            paths: vec![format!("{APPLICATION_LIBRARY}/Caches/{CONVERSATION_CACHE}")],
            minimum_version: None,
        },
        ArtifactInfo {
            name: KLEINANZEIGEN_USER.to_string(),
            description: String::from("Kleinanzeigen user account"),
            category: KLEINANZEIGEN_CATEGORY.to_string(),
            paths: vec![preferences.clone()],
            minimum_version: None,
        },
        ArtifactInfo {
            name: KLEINANZEIGEN_SEARCH_HISTORY.to_string(),
            description: String::from("Searched Kleinanzeigen keywords"),
            category: KLEINANZEIGEN_CATEGORY.to_string(),
            paths: vec![preferences],
            minimum_version: None,
        },
        ArtifactInfo {
            name: KLEINANZEIGEN_LAST_QUERY.to_string(),
            description: String::from(
                "Last Kleinanzeigen search query. Locations are search locations, not device locations",
            ),
            category: KLEINANZEIGEN_CATEGORY.to_string(),
            paths: vec![format!("{APPLICATION_LIBRARY}/Private Documents/{LAST_SEARCH_QUERY}")],
            minimum_version: None,
        },
    ]
}

/// Look up an artifact by name
pub(crate) fn artifact_info(name: &str) -> Option<ArtifactInfo> {
    artifact_list().into_iter().find(|info| info.name == name)
}
