use super::{error::UtilsError, uuid::generate_uuid};
use crate::{artifacts::outcome::ArtifactStatus, structs::toml::Output};
use log::{error, LevelFilter};
use std::{
    fs::{create_dir_all, File, OpenOptions},
    io::Write,
};

/// Create log output file and logging level based on TOML `Output` configuration
pub(crate) fn create_log_file(output: &Output) -> Result<(File, LevelFilter), UtilsError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Failed to create logging output directory for {path}. Error: {err:?}");
            return Err(UtilsError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{path}/{}.log", generate_uuid()));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to create log file at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    };

    Ok((log_file, log_level(&output.logging)))
}

/// Map the configured logging level. Unknown or missing values fall back to `Warn`
pub(crate) fn log_level(logging: &Option<String>) -> LevelFilter {
    if let Some(log_level) = logging {
        match log_level.to_lowercase().as_str() {
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => LevelFilter::Warn,
        }
    } else {
        LevelFilter::Warn
    }
}

/// Append one line per artifact to `status.log`.
/// Ex: photos-shared-library-assets:ok:42 or kleinanzeigen-messages:failed:0
pub(crate) fn collection_status(
    artifact_name: &str,
    output: &Output,
    status: &ArtifactStatus,
) -> Result<(), UtilsError> {
    let path = format!("{}/{}", output.directory, output.name);
    let result = create_dir_all(&path);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Failed to create status output directory for {path}. Error: {err:?}");
            return Err(UtilsError::CreateDirectory);
        }
    }

    let status_log = format!("{path}/status.log");
    let status_result = OpenOptions::new()
        .append(true)
        .create(true)
        .open(status_log);

    let mut status_file = match status_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to open or create status.log at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    };

    let status_message = format!("{artifact_name}:{status}\n");
    let write_result = status_file.write_all(status_message.as_bytes());
    match write_result {
        Ok(_) => {}
        Err(err) => {
            error!("[core] Failed to update status.log at {path}. Error: {err:?}");
            return Err(UtilsError::LogFile);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{collection_status, create_log_file, log_level};
    use crate::{artifacts::outcome::ArtifactStatus, structs::toml::Output};
    use log::LevelFilter;
    use std::fs::read_to_string;

    fn test_output(name: &str) -> Output {
        Output {
            name: name.to_string(),
            directory: String::from("./tmp"),
            format: String::from("tsv"),
            compress: false,
            timeline: false,
            logging: Some(String::from("info")),
        }
    }

    #[test]
    fn test_create_log_file() {
        let (_, level) = create_log_file(&test_output("logging")).unwrap();
        assert_eq!(level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(&None), LevelFilter::Warn);
        assert_eq!(log_level(&Some(String::from("DEBUG"))), LevelFilter::Debug);
        assert_eq!(log_level(&Some(String::from("verbose"))), LevelFilter::Warn);
    }

    #[test]
    fn test_collection_status() {
        let output = test_output("status_test");
        let _ = std::fs::remove_file("./tmp/status_test/status.log");

        collection_status("kleinanzeigen-user", &output, &ArtifactStatus::Ok(7)).unwrap();
        collection_status(
            "photos-shared-library-assets",
            &output,
            &ArtifactStatus::Unsupported,
        )
        .unwrap();

        let status = read_to_string("./tmp/status_test/status.log").unwrap();
        assert_eq!(
            status,
            "kleinanzeigen-user:ok:7\nphotos-shared-library-assets:unsupported:0\n"
        );
    }
}
