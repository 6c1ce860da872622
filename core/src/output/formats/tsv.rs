use crate::{
    output::{error::OutputError, local::output::local_output},
    structs::toml::Output,
};
use common::report::ArtifactTable;
use csv::{Writer, WriterBuilder};
use log::{error, info};
use std::io::Error;

/// Output a table as tab separated values. The header row is always written
pub(crate) fn tsv_format(table: &ArtifactTable, output: &Output) -> Result<String, OutputError> {
    let writer_result = tsv_writer(table);
    let writer = match writer_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not create tsv writer: {err:?}");
            return Err(OutputError::Serialize);
        }
    };

    let data = match writer.into_inner() {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not flush tsv writer: {:?}", err.error());
            return Err(OutputError::Serialize);
        }
    };

    let path = local_output(&data, output, table.artifact(), "tsv")?;
    info!("[output] {} tsv output success", table.artifact());
    Ok(path)
}

/// Write the table into an in memory tsv
fn tsv_writer(table: &ArtifactTable) -> Result<Writer<Vec<u8>>, Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    Ok(writer)
}
