use crate::error::TomlError;
use log::error;
use serde::Deserialize;
use std::str::from_utf8;

#[derive(Debug, Deserialize)]
pub struct ExtractToml {
    pub source: Source,
    pub output: Output,
    pub artifacts: Vec<Artifacts>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Source {
    /**iOS version of the extraction. Selects the decoding layout for versioned artifacts */
    pub ios_version: String,
    /**Root directory of the extraction that candidate files are searched under */
    pub path: String,
    /**`UTC` or a fixed offset such as `+02:00`. Defaults to UTC */
    pub timezone: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Output {
    pub name: String,
    pub directory: String,
    pub format: String,
    pub compress: bool,
    #[serde(default)]
    pub timeline: bool,
    pub logging: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Artifacts {
    /**Based on artifact parse one of the artifact types */
    pub artifact_name: String,
    /**Explicit source file. Skips searching the extraction root */
    pub alt_file: Option<String>,
}

impl ExtractToml {
    /// Parse the TOML collector bytes
    pub fn parse_extract_toml(data: &[u8]) -> Result<ExtractToml, TomlError> {
        let toml_text = match from_utf8(data) {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Collector is not UTF8: {err:?}");
                return Err(TomlError::BadToml);
            }
        };

        let toml_results = toml::from_str(toml_text);
        match toml_results {
            Ok(results) => Ok(results),
            Err(err) => {
                error!("[core] Could not parse collector TOML: {err:?}");
                Err(TomlError::BadToml)
            }
        }
    }
}
