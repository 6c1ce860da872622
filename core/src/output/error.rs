use std::fmt;

#[derive(Debug)]
pub(crate) enum OutputError {
    CreateDirectory,
    CreateFile,
    WriteFile,
    Serialize,
    Compress,
}

impl std::error::Error for OutputError {}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::CreateDirectory => write!(f, "Could not create output directory"),
            OutputError::CreateFile => write!(f, "Could not create output file"),
            OutputError::WriteFile => write!(f, "Could not write output file"),
            OutputError::Serialize => write!(f, "Could not serialize table"),
            OutputError::Compress => write!(f, "Could not compress output"),
        }
    }
}
