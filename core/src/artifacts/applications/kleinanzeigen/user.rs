use super::{
    error::KleinanzeigenError,
    preferences::{embedded_json, parse_preferences, source_path, PREFERENCES_PLIST},
};
use crate::{
    artifacts::{outcome::ArtifactOutcome, registry::KLEINANZEIGEN_USER},
    decoder::{
        field::FieldReader,
        rules::{decode_value, Column, Rule},
    },
};
use chrono::FixedOffset;
use common::report::ArtifactTable;
use log::error;

const CURRENT_USER_PROFILE: &str = "UserDefaultsKit.UserDefaultItem.currentUserProfile";

/// Account properties in report order. `header` is the property label
static PROFILE: [Column; 7] = [
    Column {
        header: "Account E-Mail",
        field: "email",
        rule: Rule::PassThrough,
    },
    Column {
        header: "Account ID",
        field: "id",
        rule: Rule::PassThrough,
    },
    Column {
        header: "Contact Name",
        field: "preferences.contactName",
        rule: Rule::PassThrough,
    },
    Column {
        header: "Contact Initials",
        field: "preferences.initials",
        rule: Rule::PassThrough,
    },
    Column {
        header: "Account Type",
        field: "accountType",
        rule: Rule::PassThrough,
    },
    Column {
        header: "User since",
        field: "userSince",
        rule: Rule::Timestamp,
    },
    Column {
        header: "Last modified",
        field: "lastModified",
        rule: Rule::Timestamp,
    },
];

/// Parse the signed in Kleinanzeigen account from the app preferences
pub(crate) fn grab_user(
    candidates: &[String],
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, KleinanzeigenError> {
    let path = source_path(candidates, PREFERENCES_PLIST)?;
    let preferences = parse_preferences(&path)?;
    let profile = embedded_json(&preferences, CURRENT_USER_PROFILE)?;
    if !profile.is_object() {
        error!("[kleinanzeigen] User profile in {path} is not an object");
        return Err(KleinanzeigenError::BadStructure);
    }

    let mut table = ArtifactTable::new(KLEINANZEIGEN_USER, &["Property", "Property Value"], &path)
        .with_time_column(Some(1));
    for property in &PROFILE {
        let value = decode_value(&profile.field(property.field), &property.rule, timezone);
        if let Err(err) = table.push_row(vec![property.header.to_string(), value]) {
            error!("[kleinanzeigen] Could not add user row: {err:?}");
            return Err(KleinanzeigenError::Arity);
        }
    }

    Ok(ArtifactOutcome::Table(table))
}

#[cfg(test)]
mod tests {
    use super::grab_user;
    use crate::artifacts::outcome::ArtifactOutcome;
    use chrono::FixedOffset;
    use std::path::PathBuf;

    #[test]
    fn test_grab_user() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/ios/private/var/mobile/Containers/Data/Application/4C2C9C7B-2F0E-4E3B-9D53-1B8F0A6C1E11/Library/Preferences/com.ebaykleinanzeigen.ebc.plist");

        let result = grab_user(
            &[test_location.display().to_string()],
            &FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        let table = match result {
            ArtifactOutcome::Table(table) => table,
            ArtifactOutcome::Unsupported { .. } => panic!("user is never version gated"),
        };

        assert_eq!(table.rows().len(), 7);
        assert_eq!(table.rows()[0], vec!["Account E-Mail", "max.mustermann@example.com"]);
        assert_eq!(table.rows()[1][1], "41203377");
        assert_eq!(table.rows()[2][1], "Max Mustermann");
        assert_eq!(table.rows()[3][1], "MM");
        assert_eq!(table.rows()[4][1], "PRIVATE");
        assert_eq!(table.rows()[5], vec!["User since", "2019-04-01 08:00:00"]);
        assert_eq!(table.rows()[6], vec!["Last modified", "2024-03-01 12:00:00"]);
    }

    #[test]
    fn test_grab_user_no_plist() {
        let candidates = vec![String::from("/a/Library/Caches/conversation_cache")];
        assert!(grab_user(&candidates, &FixedOffset::east_opt(0).unwrap()).is_err());
    }
}
