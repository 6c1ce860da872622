use std::fmt;

#[derive(Debug)]
pub(crate) enum CollectionError {
    UnknownArtifact,
    Discovery,
    Photos,
    Kleinanzeigen,
    Output,
    Format,
}

impl std::error::Error for CollectionError {}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::UnknownArtifact => write!(f, "Unknown artifact name"),
            CollectionError::Discovery => write!(f, "Failed to search for artifact files"),
            CollectionError::Photos => write!(f, "Failed to parse Photos artifact"),
            CollectionError::Kleinanzeigen => write!(f, "Failed to parse Kleinanzeigen artifact"),
            CollectionError::Output => write!(f, "Failed to output data"),
            CollectionError::Format => write!(f, "Unknown formatter provided"),
        }
    }
}
