use crate::{
    artifacts::error::CollectionError,
    output::formats::{
        json::json_format, jsonl::jsonl_format, timeline::timeline_table, tsv::tsv_format,
    },
    structs::toml::Output,
};
use common::report::ArtifactTable;
use log::{error, info};

/// Output an artifact table in the configured format, plus its timeline if enabled
pub(crate) fn output_table(table: &ArtifactTable, output: &Output) -> Result<(), CollectionError> {
    let output_status = match output.format.to_lowercase().as_str() {
        "tsv" => tsv_format(table, output),
        "json" => json_format(table, output),
        "jsonl" => jsonl_format(table, output),
        _ => {
            error!("[core] Unknown formatter provided: {}", output.format);
            return Err(CollectionError::Format);
        }
    };
    match output_status {
        Ok(path) => info!("[core] Wrote {} to {path}", table.artifact()),
        Err(err) => {
            error!("[core] Could not output data: {err:?}");
            return Err(CollectionError::Output);
        }
    }

    if !output.timeline {
        return Ok(());
    }

    let timeline_status = timeline_table(table, output);
    match timeline_status {
        Ok(Some(path)) => info!("[core] Wrote {} timeline to {path}", table.artifact()),
        Ok(None) => {}
        Err(err) => {
            error!("[core] Could not output timeline data: {err:?}");
            return Err(CollectionError::Output);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::output_table;
    use crate::structs::toml::Output;
    use common::report::ArtifactTable;
    use std::path::Path;

    fn test_table() -> ArtifactTable {
        let mut table = ArtifactTable::new(
            "kleinanzeigen-search-history",
            &["Keyword", "Timestamp"],
            "/cases/com.ebaykleinanzeigen.ebc.plist",
        )
        .with_time_column(Some(1));
        table
            .push_row(vec![String::from("sofa"), String::from("2024-02-10 18:30:00")])
            .unwrap();
        table
    }

    #[test]
    fn test_output_table() {
        let output = Output {
            name: String::from("output_table_test"),
            directory: String::from("./tmp"),
            format: String::from("TSV"),
            compress: false,
            timeline: true,
            logging: None,
        };

        output_table(&test_table(), &output).unwrap();
        assert!(Path::new("./tmp/output_table_test/kleinanzeigen-search-history.tsv").is_file());
        assert!(Path::new(
            "./tmp/output_table_test/kleinanzeigen-search-history_timeline.jsonl"
        )
        .is_file());
    }

    #[test]
    #[should_panic(expected = "Format")]
    fn test_output_table_bad_format() {
        let output = Output {
            name: String::from("output_table_test"),
            directory: String::from("./tmp"),
            format: String::from("html"),
            compress: false,
            timeline: false,
            logging: None,
        };

        output_table(&test_table(), &output).unwrap();
    }
}
