use crate::{
    output::error::OutputError, structs::toml::Output,
    utils::compression::compress::compress_gzip_data,
};
use log::error;
use std::{
    fs::{create_dir_all, File},
    io::Write,
};

/// Write data to `<directory>/<name>/<output_name>.<extension>`. Gzip compressed with a `.gz` suffix if enabled.
/// Returns the path written
pub(crate) fn local_output(
    data: &[u8],
    output: &Output,
    output_name: &str,
    extension: &str,
) -> Result<String, OutputError> {
    let output_path = format!("{}/{}", output.directory, output.name);

    let result = create_dir_all(&output_path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[output] Failed to create output directory for {output_path}. Error: {err:?}");
            return Err(OutputError::CreateDirectory);
        }
    }

    let (file_extension, bytes) = if output.compress {
        let compressed = match compress_gzip_data(data) {
            Ok(result) => result,
            Err(err) => {
                error!("[output] Failed to compress {output_name}: {err:?}");
                return Err(OutputError::Compress);
            }
        };
        (format!("{extension}.gz"), compressed)
    } else {
        (extension.to_string(), data.to_vec())
    };

    let full_path = format!("{output_path}/{output_name}.{file_extension}");
    let file_result = File::create(&full_path);
    let mut output_file = match file_result {
        Ok(results) => results,
        Err(err) => {
            error!("[output] Failed to create output file {full_path}. Error: {err:?}");
            return Err(OutputError::CreateFile);
        }
    };

    let write_result = output_file.write_all(&bytes);
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[output] Failed to write output to file {full_path}. Error: {err:?}");
            return Err(OutputError::WriteFile);
        }
    }
    Ok(full_path)
}
