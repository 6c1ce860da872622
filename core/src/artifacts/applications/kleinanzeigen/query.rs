use super::{
    error::KleinanzeigenError,
    preferences::{read_json, source_path},
};
use crate::{
    artifacts::{outcome::ArtifactOutcome, registry::KLEINANZEIGEN_LAST_QUERY},
    decoder::field::FieldReader,
};
use common::report::ArtifactTable;
use log::{error, info};
use serde_json::Value;

/// Last search saved by the app. Locations are search areas, not device locations
pub(crate) const LAST_SEARCH_QUERY: &str = ".last_search_query";

const HEADERS: [&str; 7] = [
    "Keywords",
    "Category",
    "Region",
    "Radius (default)",
    "Longitude",
    "Latitude",
    "Radius (current)",
];

/// Parse the last search query. One row per search location
pub(crate) fn grab_last_query(candidates: &[String]) -> Result<ArtifactOutcome, KleinanzeigenError> {
    let path = source_path(candidates, LAST_SEARCH_QUERY)?;
    let query = read_json(&path)?;
    if !query.is_object() {
        error!("[kleinanzeigen] Last search query {path} is not an object");
        return Err(KleinanzeigenError::BadStructure);
    }

    let keywords = query.display("keywords");
    let category = query.display("categoryLocalizedName");

    let mut table = ArtifactTable::new(KLEINANZEIGEN_LAST_QUERY, &HEADERS, &path);
    let locations = query
        .get("locations")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for location in locations {
        let row = vec![
            keywords.clone(),
            category.clone(),
            location.display("region"),
            location.display("defaultRadius"),
            location.display("longitude"),
            location.display("latitude"),
            location.display("currentRadius"),
        ];
        if let Err(err) = table.push_row(row) {
            error!("[kleinanzeigen] Could not add location row: {err:?}");
            return Err(KleinanzeigenError::Arity);
        }
    }

    if table.is_empty() {
        info!("[kleinanzeigen] Last search query has no locations");
    }
    Ok(ArtifactOutcome::Table(table))
}
