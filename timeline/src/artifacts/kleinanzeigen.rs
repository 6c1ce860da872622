use serde_json::Value;

/// Timeline Kleinanzeigen cached messages
pub(crate) fn messages(data: &mut Value) -> Option<()> {
    let mut entries = Vec::new();
    for values in data.as_array_mut()? {
        let entry = if let Some(value) = values.get_mut("data") {
            value
        } else {
            values
        };
        let sent = entry["Sent"].as_str().unwrap_or_default().to_string();
        if sent.is_empty() {
            continue;
        }
        entry["datetime"] = Value::String(sent);
        entry["message"] = entry["Message"].clone();
        entry["artifact"] = Value::String(String::from("Kleinanzeigen Message"));
        entry["data_type"] = Value::String(String::from("ios:json:kleinanzeigen:message"));
        entry["timestamp_desc"] = Value::String(String::from("Message Sent"));
        entries.push(entry.clone());
    }

    replace_entries(data, entries)
}

/// Timeline Kleinanzeigen account. Only the dated properties are kept
pub(crate) fn user(data: &mut Value) -> Option<()> {
    let mut entries = Vec::new();
    for values in data.as_array_mut()? {
        let entry = if let Some(value) = values.get_mut("data") {
            value
        } else {
            values
        };
        let property = entry["Property"].as_str().unwrap_or_default().to_string();
        let desc = match property.as_str() {
            "User since" => "Account Created",
            "Last modified" => "Account Modified",
            _ => continue,
        };
        entry["datetime"] = entry["Property Value"].clone();
        entry["message"] = Value::String(property);
        entry["artifact"] = Value::String(String::from("Kleinanzeigen User Account"));
        entry["data_type"] = Value::String(String::from("ios:plist:kleinanzeigen:user"));
        entry["timestamp_desc"] = Value::String(desc.to_string());
        entries.push(entry.clone());
    }

    replace_entries(data, entries)
}

/// Timeline Kleinanzeigen searched keywords
pub(crate) fn search_history(data: &mut Value) -> Option<()> {
    let mut entries = Vec::new();
    for values in data.as_array_mut()? {
        let entry = if let Some(value) = values.get_mut("data") {
            value
        } else {
            values
        };
        entry["datetime"] = entry["Timestamp"].clone();
        entry["message"] = entry["Keyword"].clone();
        entry["artifact"] = Value::String(String::from("Kleinanzeigen Search"));
        entry["data_type"] = Value::String(String::from("ios:plist:kleinanzeigen:search"));
        entry["timestamp_desc"] = Value::String(String::from("Keyword Searched"));
        entries.push(entry.clone());
    }

    replace_entries(data, entries)
}

/// Swap the original rows for the timeline entries
pub(crate) fn replace_entries(data: &mut Value, mut entries: Vec<Value>) -> Option<()> {
    data.as_array_mut()?.clear();
    data.as_array_mut()?.append(&mut entries);

    Some(())
}

#[cfg(test)]
mod tests {
    use super::{messages, search_history, user};
    use serde_json::json;

    #[test]
    fn test_messages() {
        let mut data = json!([
            {"Sent": "2023-05-01 12:00:00", "Message": "Is it still available?"},
            {"Sent": "", "Message": "no date"}
        ]);
        messages(&mut data).unwrap();

        let entries = data.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["message"], "Is it still available?");
        assert_eq!(entries[0]["timestamp_desc"], "Message Sent");
    }

    #[test]
    fn test_user() {
        let mut data = json!([
            {"Property": "Account E-Mail", "Property Value": "someone@example.com"},
            {"Property": "User since", "Property Value": "2019-04-01 08:00:00"},
            {"Property": "Last modified", "Property Value": "2024-01-01 08:00:00"}
        ]);
        user(&mut data).unwrap();

        let entries = data.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["datetime"], "2019-04-01 08:00:00");
        assert_eq!(entries[1]["timestamp_desc"], "Account Modified");
    }

    #[test]
    fn test_search_history() {
        let mut data = json!([{"Keyword": "fahrrad", "Timestamp": "2024-02-10 18:30:00"}]);
        search_history(&mut data).unwrap();
        assert_eq!(data[0]["message"], "fahrrad");
        assert_eq!(data[0]["datetime"], "2024-02-10 18:30:00");
    }
}
