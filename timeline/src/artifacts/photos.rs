use super::kleinanzeigen::replace_entries;
use serde_json::Value;

/// Timestamps worth a timeline entry. Header names carry a column index suffix that differs per iOS layout
const ASSET_TIMES: [(&str, &str); 5] = [
    ("zAsset-Date Created-", "Asset Created"),
    ("zAsset-Added Date-", "Asset Added"),
    ("zAsset-Modification Date-", "Asset Modified"),
    ("zAsset-Last Shared Date-", "Asset Last Shared"),
    ("zAsset-Trashed Date-", "Asset Trashed"),
];

/// Timeline iCloud Shared Photo Library assets
pub(crate) fn shared_library_assets(data: &mut Value) -> Option<()> {
    let mut entries = Vec::new();
    for values in data.as_array_mut()? {
        let entry = if let Some(value) = values.get_mut("data") {
            value
        } else {
            values
        };
        let filename = value_by_prefix(entry, "zAsset-Filename-").unwrap_or_default();
        entry["artifact"] = Value::String(String::from("iCloud Shared Photo Library Asset"));
        entry["data_type"] = Value::String(String::from("ios:sqlite:photos:asset"));
        entry["message"] = Value::String(filename);

        let temp = entry.clone();
        for (prefix, desc) in ASSET_TIMES {
            let time = match value_by_prefix(&temp, prefix) {
                Some(result) if !result.is_empty() => result,
                _ => continue,
            };
            entry["datetime"] = Value::String(time);
            entry["timestamp_desc"] = Value::String(desc.to_string());
            entries.push(entry.clone());
        }
    }

    replace_entries(data, entries)
}

/// Find the string value of the first key starting with `prefix`
fn value_by_prefix(entry: &Value, prefix: &str) -> Option<String> {
    let object = entry.as_object()?;
    for (key, value) in object {
        if key.starts_with(prefix) {
            return Some(value.as_str().unwrap_or_default().to_string());
        }
    }
    None
}
