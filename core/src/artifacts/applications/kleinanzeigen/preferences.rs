use super::error::KleinanzeigenError;
use crate::filesystem::{files::read_text_file, seek::get_file_path};
use log::error;
use plist::{Dictionary, Value};

/// Preferences plist holding the account and search history
pub(crate) const PREFERENCES_PLIST: &str = "com.ebaykleinanzeigen.ebc.plist";

/// Resolve a source file among the candidates
pub(crate) fn source_path(candidates: &[String], suffix: &str) -> Result<String, KleinanzeigenError> {
    match get_file_path(candidates, suffix) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[kleinanzeigen] Could not find {suffix}: {err:?}");
            Err(KleinanzeigenError::NoFile)
        }
    }
}

/// Read and parse a JSON file
pub(crate) fn read_json(path: &str) -> Result<serde_json::Value, KleinanzeigenError> {
    let text = match read_text_file(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[kleinanzeigen] Could not read {path}: {err:?}");
            return Err(KleinanzeigenError::ReadFile);
        }
    };

    match serde_json::from_str(&text) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[kleinanzeigen] Could not parse JSON {path}: {err:?}");
            Err(KleinanzeigenError::Json)
        }
    }
}

/// Parse the app preferences. Binary and XML plists are both supported
pub(crate) fn parse_preferences(path: &str) -> Result<Dictionary, KleinanzeigenError> {
    match plist::from_file(path) {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[kleinanzeigen] Could not read plist file {path}: {err:?}");
            Err(KleinanzeigenError::Plist)
        }
    }
}

/// The app stores `UserDefaultsKit` items as JSON encoded strings or data blobs inside the plist
pub(crate) fn embedded_json(
    preferences: &Dictionary,
    key: &str,
) -> Result<serde_json::Value, KleinanzeigenError> {
    let value = match preferences.get(key) {
        Some(result) => result,
        None => {
            error!("[kleinanzeigen] Preferences missing key {key}");
            return Err(KleinanzeigenError::MissingKey);
        }
    };

    let parsed: Result<serde_json::Value, serde_json::Error> = match value {
        Value::String(text) => serde_json::from_str(text),
        Value::Data(data) => serde_json::from_slice(data),
        _ => {
            error!("[kleinanzeigen] Key {key} is not a string or data value");
            return Err(KleinanzeigenError::BadStructure);
        }
    };

    match parsed {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[kleinanzeigen] Could not parse JSON in {key}: {err:?}");
            Err(KleinanzeigenError::Json)
        }
    }
}
