use super::{error::FileSystemError, metadata::get_metadata};
use log::error;
use std::{
    fs::{read, read_to_string},
    path::Path,
};

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Read a text file that is less that 2GB in size
pub(crate) fn read_text_file(path: &str) -> Result<String, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read_to_string(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read text file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Get the file size
pub(crate) fn get_file_size(path: &str) -> u64 {
    if !is_file(path) {
        return 0;
    }

    let meta = get_metadata(path);
    match meta {
        Ok(result) => result.len(),
        Err(err) => {
            error!("[core] Failed to get file size: {err:?}");
            0
        }
    }
}

/// Check if a provided file is larger than the acceptable size (2GB)
pub(crate) fn file_too_large(path: &str) -> bool {
    let size = get_file_size(path);
    let max_size = 2147483648; // 2GB
    if size < max_size {
        return false;
    }
    true
}
