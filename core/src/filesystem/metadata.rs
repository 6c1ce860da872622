use crate::filesystem::error::FileSystemError;
use log::error;
use std::fs::symlink_metadata;
use std::{fs::Metadata, io::Error};

/// Get the metadata associated with provided path
pub(crate) fn get_metadata(path: &str) -> Result<Metadata, Error> {
    symlink_metadata(path)
}

#[derive(Debug)]
pub(crate) struct GlobInfo {
    pub(crate) full_path: String,
    pub(crate) filename: String,
    pub(crate) is_file: bool,
}

/// Execute a provided Glob pattern (Ex: /cases/**/Photos.sqlite) and return results
pub(crate) fn glob_paths(glob_pattern: &str) -> Result<Vec<GlobInfo>, FileSystemError> {
    let mut info = Vec::new();
    let glob_results = glob::glob(glob_pattern);
    let paths = match glob_results {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Could not glob {glob_pattern}: {err:?}");
            return Err(FileSystemError::BadGlob);
        }
    };

    for entry in paths.flatten() {
        let glob_info = GlobInfo {
            full_path: entry.to_str().unwrap_or_default().to_string(),
            filename: entry
                .file_name()
                .unwrap_or_default()
                .to_str()
                .unwrap_or_default()
                .to_string(),
            is_file: entry.is_file(),
        };
        info.push(glob_info);
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::{get_metadata, glob_paths};
    use std::path::PathBuf;

    #[test]
    fn test_get_metadata() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests");

        let result = get_metadata(&test_location.display().to_string()).unwrap();
        assert!(result.is_dir());
    }

    #[test]
    fn test_glob_paths() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/ios");

        let result = glob_paths(&format!(
            "{}/**/conversation_cache",
            test_location.to_str().unwrap()
        ))
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].filename, "conversation_cache");
        assert!(result[0].is_file);
    }

    #[test]
    #[should_panic(expected = "BadGlob")]
    fn test_bad_glob() {
        glob_paths("/tmp/[").unwrap();
    }
}
