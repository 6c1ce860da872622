use std::fmt;

#[derive(Debug)]
pub(crate) enum CompressionError {
    GzipCompress,
    GzipFinish,
}

impl std::error::Error for CompressionError {}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::GzipCompress => write!(f, "Could not compress data with gzip"),
            CompressionError::GzipFinish => write!(f, "Could not finish gzip compression"),
        }
    }
}
