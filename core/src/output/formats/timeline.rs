use super::jsonl::{json_lines, table_objects};
use crate::{
    output::{error::OutputError, local::output::local_output},
    structs::toml::Output,
};
use common::report::ArtifactTable;
use log::{error, info, warn};
use serde_json::Value;
use timeline::timeline::{timeline_artifact, Artifacts};

/// Timeline a table and write the entries to `<artifact>_timeline.jsonl`.
/// Tables without a time column or without a timeline mapping return `None`
pub(crate) fn timeline_table(
    table: &ArtifactTable,
    output: &Output,
) -> Result<Option<String>, OutputError> {
    if table.time_column().is_none() {
        info!("[output] {} has no time column to timeline", table.artifact());
        return Ok(None);
    }

    let mut data = Value::Array(table_objects(table));
    if !timeline_data(&mut data, table.artifact()) {
        return Ok(None);
    }

    let entries = match data.as_array() {
        Some(result) => result,
        None => return Ok(None),
    };
    let lines = json_lines(entries)?;
    let path = local_output(
        lines.as_bytes(),
        output,
        &format!("{}_timeline", table.artifact()),
        "jsonl",
    )?;
    Ok(Some(path))
}

/// Attempt to timeline supported artifacts
fn timeline_data(artifact: &mut Value, artifact_name: &str) -> bool {
    let target = get_artifact(artifact_name);
    if target == Artifacts::Unknown {
        error!("[output] Unknown artifact to timeline {artifact_name}");
        return false;
    }

    let status = timeline_artifact(artifact, &target);
    if status.is_none() {
        warn!("[output] Could not timeline {artifact_name}");
        return false;
    }
    true
}

/// Supported list of artifacts
fn get_artifact(artifact: &str) -> Artifacts {
    match artifact {
        "photos-shared-library-assets" => Artifacts::PhotosSharedLibraryAssets,
        "kleinanzeigen-messages" => Artifacts::KleinanzeigenMessages,
        "kleinanzeigen-user" => Artifacts::KleinanzeigenUser,
        "kleinanzeigen-search-history" => Artifacts::KleinanzeigenSearchHistory,
        _ => Artifacts::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::{get_artifact, timeline_data, timeline_table};
    use crate::structs::toml::Output;
    use common::report::ArtifactTable;
    use serde_json::json;
    use std::fs::read_to_string;
    use timeline::timeline::Artifacts;

    #[test]
    fn test_get_artifact() {
        assert_eq!(
            get_artifact("photos-shared-library-assets"),
            Artifacts::PhotosSharedLibraryAssets
        );
        assert_eq!(
            get_artifact("kleinanzeigen-search-history"),
            Artifacts::KleinanzeigenSearchHistory
        );
        assert_eq!(get_artifact("kleinanzeigen-last-query"), Artifacts::Unknown);
    }

    #[test]
    fn test_timeline_data() {
        let mut data = json!([{"Keyword": "sofa", "Timestamp": "2024-02-10 18:30:00"}]);
        assert!(timeline_data(&mut data, "kleinanzeigen-search-history"));
        assert_eq!(data[0]["timestamp_desc"], "Keyword Searched");
        assert!(!timeline_data(&mut data, "unknown"));
    }

    #[test]
    fn test_timeline_table() {
        let output = Output {
            name: String::from("timeline_test"),
            directory: String::from("./tmp"),
            format: String::from("jsonl"),
            compress: false,
            timeline: true,
            logging: None,
        };
        let mut table = ArtifactTable::new(
            "kleinanzeigen-search-history",
            &["Keyword", "Timestamp"],
            "/cases/com.ebaykleinanzeigen.ebc.plist",
        )
        .with_time_column(Some(1));
        table
            .push_row(vec![String::from("sofa"), String::from("2024-02-10 18:30:00")])
            .unwrap();

        let path = timeline_table(&table, &output).unwrap().unwrap();
        assert!(path.ends_with("kleinanzeigen-search-history_timeline.jsonl"));
        let data = read_to_string(path).unwrap();
        assert!(data.contains("\"datetime\":\"2024-02-10 18:30:00\""));
    }

    #[test]
    fn test_timeline_table_no_time_column() {
        let output = Output {
            name: String::from("timeline_test"),
            directory: String::from("./tmp"),
            format: String::from("jsonl"),
            compress: false,
            timeline: true,
            logging: None,
        };
        let table = ArtifactTable::new("kleinanzeigen-last-query", &["Keywords"], "/cases/q");
        assert!(timeline_table(&table, &output).unwrap().is_none());
    }
}
