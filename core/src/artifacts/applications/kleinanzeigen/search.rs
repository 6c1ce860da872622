use super::{
    error::KleinanzeigenError,
    preferences::{embedded_json, parse_preferences, source_path, PREFERENCES_PLIST},
};
use crate::{
    artifacts::{outcome::ArtifactOutcome, registry::KLEINANZEIGEN_SEARCH_HISTORY},
    decoder::{
        field::FieldReader,
        rules::{decode_value, Rule},
    },
};
use chrono::FixedOffset;
use common::report::ArtifactTable;
use log::{error, info};
use serde_json::Value;

const SEARCH_HISTORY: &str = "UserDefaultsKit.UserDefaultItem.advertisementSearchDataHistory";

/// Parse the searched keywords kept in the app preferences. Rows keep the stored order
pub(crate) fn grab_search_history(
    candidates: &[String],
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, KleinanzeigenError> {
    let path = source_path(candidates, PREFERENCES_PLIST)?;
    let preferences = parse_preferences(&path)?;
    let history = embedded_json(&preferences, SEARCH_HISTORY)?;

    let keywords = match history.get("searchedKeywords").and_then(Value::as_array) {
        Some(result) => result,
        None => {
            error!("[kleinanzeigen] Search history in {path} has no searchedKeywords");
            return Err(KleinanzeigenError::BadStructure);
        }
    };

    let mut table =
        ArtifactTable::new(KLEINANZEIGEN_SEARCH_HISTORY, &["Keyword", "Timestamp"], &path)
            .with_time_column(Some(1));
    for keyword in keywords {
        let searched = decode_value(&keyword.field("timeStamp"), &Rule::Timestamp, timezone);
        if let Err(err) = table.push_row(vec![keyword.display("value"), searched]) {
            error!("[kleinanzeigen] Could not add keyword row: {err:?}");
            return Err(KleinanzeigenError::Arity);
        }
    }

    if table.is_empty() {
        info!("[kleinanzeigen] No searched keywords found");
    }
    Ok(ArtifactOutcome::Table(table))
}

#[cfg(test)]
mod tests {
    use super::grab_search_history;
    use crate::artifacts::outcome::ArtifactOutcome;
    use chrono::FixedOffset;
    use std::path::PathBuf;

    #[test]
    fn test_grab_search_history() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/ios/private/var/mobile/Containers/Data/Application/4C2C9C7B-2F0E-4E3B-9D53-1B8F0A6C1E11/Library/Preferences/com.ebaykleinanzeigen.ebc.plist");

        let result = grab_search_history(
            &[test_location.display().to_string()],
            &FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        let table = match result {
            ArtifactOutcome::Table(table) => table,
            ArtifactOutcome::Unsupported { .. } => panic!("search history is never version gated"),
        };

        assert_eq!(table.headers(), vec!["Keyword", "Timestamp"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], vec!["fahrrad", "2024-02-10 18:30:00"]);
        assert_eq!(table.rows()[1], vec!["kinderwagen", "2024-02-11 09:15:00"]);
    }

    #[test]
    fn test_grab_search_history_offset() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/ios/private/var/mobile/Containers/Data/Application/4C2C9C7B-2F0E-4E3B-9D53-1B8F0A6C1E11/Library/Preferences/com.ebaykleinanzeigen.ebc.plist");

        let result = grab_search_history(
            &[test_location.display().to_string()],
            &FixedOffset::west_opt(5 * 3600).unwrap(),
        )
        .unwrap();
        match result {
            ArtifactOutcome::Table(table) => assert_eq!(table.rows()[0][1], "2024-02-10 13:30:00"),
            ArtifactOutcome::Unsupported { .. } => panic!("search history is never version gated"),
        }
    }
}
