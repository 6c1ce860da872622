use crate::{
    output::{error::OutputError, local::output::local_output},
    structs::toml::Output,
};
use common::report::ArtifactTable;
use log::{error, info};
use serde_json::json;

/// Output a table as a single JSON document: `{artifact, source, headers, rows}`
pub(crate) fn json_format(table: &ArtifactTable, output: &Output) -> Result<String, OutputError> {
    let document = json!({
        "artifact": table.artifact(),
        "source": table.source(),
        "headers": table.headers(),
        "rows": table.rows(),
    });

    let serde_result = serde_json::to_vec(&document);
    let data = match serde_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Failed to serialize {} table: {err:?}", table.artifact());
            return Err(OutputError::Serialize);
        }
    };

    let path = local_output(&data, output, table.artifact(), "json")?;
    info!("[output] {} json output success", table.artifact());
    Ok(path)
}
