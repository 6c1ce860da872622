use std::fmt;

#[derive(Debug)]
pub(crate) enum KleinanzeigenError {
    NoFile,
    ReadFile,
    Json,
    Plist,
    MissingKey,
    BadStructure,
    Arity,
}

impl std::error::Error for KleinanzeigenError {}

impl fmt::Display for KleinanzeigenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KleinanzeigenError::NoFile => write!(f, "No Kleinanzeigen source file found"),
            KleinanzeigenError::ReadFile => write!(f, "Could not read Kleinanzeigen file"),
            KleinanzeigenError::Json => write!(f, "Could not parse Kleinanzeigen JSON"),
            KleinanzeigenError::Plist => write!(f, "Could not parse Kleinanzeigen preferences"),
            KleinanzeigenError::MissingKey => write!(f, "Preference key not found"),
            KleinanzeigenError::BadStructure => write!(f, "Unexpected Kleinanzeigen data layout"),
            KleinanzeigenError::Arity => write!(f, "Row did not match the table headers"),
        }
    }
}
