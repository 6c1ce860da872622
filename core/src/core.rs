use crate::{
    artifacts::{collection::collect, registry::artifact_list},
    decoder::version::IosVersion,
    error::TomlError,
    filesystem::files::read_file,
    structs::toml::ExtractToml,
    utils::{logging::create_log_file, time::parse_timezone},
};
use common::applications::ArtifactInfo;
use log::{error, info};
use simplelog::{Config, WriteLogger};

/// Parse a TOML collector file at provided path and run the collection
pub fn parse_toml_file(path: &str) -> Result<(), TomlError> {
    let buffer_results = read_file(path);
    let buffer = match buffer_results {
        Ok(results) => results,
        Err(err) => {
            error!("[core] Could not read TOML file {path}: {err:?}");
            return Err(TomlError::NoFile);
        }
    };

    parse_toml_data(&buffer)
}

/// Parse an already read TOML collector and run the collection
pub fn parse_toml_data(data: &[u8]) -> Result<(), TomlError> {
    let collector = ExtractToml::parse_extract_toml(data)?;
    extract_collection(&collector)
}

/// Run a parsed collector. Per artifact failures are recorded in `status.log` and do not fail the run
pub fn extract_collection(collector: &ExtractToml) -> Result<(), TomlError> {
    if let Ok((log_file, level)) = create_log_file(&collector.output) {
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }

    let version = match IosVersion::parse(&collector.source.ios_version) {
        Ok(result) => result,
        Err(err) => {
            error!(
                "[core] Bad iOS version {}: {err:?}",
                collector.source.ios_version
            );
            return Err(TomlError::BadVersion);
        }
    };

    let timezone_setting = collector.source.timezone.clone().unwrap_or_default();
    let timezone = match parse_timezone(&timezone_setting) {
        Some(result) => result,
        None => {
            error!("[core] Unsupported time zone {timezone_setting}");
            return Err(TomlError::BadTimezone);
        }
    };

    let statuses = collect(collector, &version, &timezone);
    info!(
        "[core] Collected {} artifacts from iOS {version} extraction",
        statuses.len()
    );
    Ok(())
}

/// List every supported artifact
pub fn list_artifacts() -> Vec<ArtifactInfo> {
    artifact_list()
}
