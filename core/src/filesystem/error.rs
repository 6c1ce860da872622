use std::fmt;

#[derive(Debug)]
pub(crate) enum FileSystemError {
    NotDirectory,
    ReadFile,
    NotFile,
    BadGlob,
    LargeFile,
    NoCandidate,
}

impl std::error::Error for FileSystemError {}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::NotDirectory => write!(f, "Not a directory"),
            FileSystemError::ReadFile => write!(f, "Could not read file"),
            FileSystemError::NotFile => write!(f, "Not a file"),
            FileSystemError::BadGlob => write!(f, "Could not glob"),
            FileSystemError::LargeFile => write!(f, "File too large"),
            FileSystemError::NoCandidate => write!(f, "No candidate file matched"),
        }
    }
}
