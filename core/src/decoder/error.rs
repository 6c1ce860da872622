use std::fmt;

#[derive(Debug)]
pub(crate) enum FieldError {
    BadVersion,
    MissingField,
}

impl std::error::Error for FieldError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::BadVersion => write!(f, "Could not parse version token"),
            FieldError::MissingField => write!(f, "Required field missing"),
        }
    }
}
