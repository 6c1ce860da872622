use crate::{
    output::{error::OutputError, local::output::local_output},
    structs::toml::Output,
};
use common::report::ArtifactTable;
use log::{error, info};
use serde_json::{Map, Value};

/// Output a table as JSON lines. Each row is an object keyed by header plus the `source` path
pub(crate) fn jsonl_format(table: &ArtifactTable, output: &Output) -> Result<String, OutputError> {
    let data = json_lines(&table_objects(table))?;
    let path = local_output(data.as_bytes(), output, table.artifact(), "jsonl")?;
    info!("[output] {} jsonl output success", table.artifact());
    Ok(path)
}

/// Convert every row into an object keyed by header
pub(crate) fn table_objects(table: &ArtifactTable) -> Vec<Value> {
    let mut objects = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        let mut object = Map::new();
        for (header, value) in table.headers().iter().zip(row) {
            object.insert(header.clone(), Value::String(value.clone()));
        }
        object.insert(String::from("source"), Value::String(table.source().to_string()));
        objects.push(Value::Object(object));
    }
    objects
}

/// Serialize values one per line
pub(crate) fn json_lines(values: &[Value]) -> Result<String, OutputError> {
    let mut lines = String::new();
    for value in values {
        let line = match serde_json::to_string(value) {
            Ok(result) => result,
            Err(err) => {
                error!("[output] Failed to serialize json line: {err:?}");
                return Err(OutputError::Serialize);
            }
        };
        lines.push_str(&line);
        lines.push('\n');
    }
    Ok(lines)
}
