use std::fmt;

#[derive(Debug)]
pub(crate) enum PhotosError {
    NoDatabase,
    SQLITEParseError,
    BadSQL,
    Arity,
}

impl std::error::Error for PhotosError {}

impl fmt::Display for PhotosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotosError::NoDatabase => write!(f, "No Photos.sqlite database found"),
            PhotosError::SQLITEParseError => write!(f, "Failed to read Photos.sqlite database"),
            PhotosError::BadSQL => write!(f, "Failed to compose Photos.sqlite query"),
            PhotosError::Arity => write!(f, "Decoded row did not match the layout headers"),
        }
    }
}
