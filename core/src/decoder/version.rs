use super::{error::FieldError, rules::Layout};
use log::error;
use std::fmt;

/// Producing iOS version of an extraction. Ordered by major, then minor, then patch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IosVersion {
    pub(crate) major: u32,
    pub(crate) minor: u32,
    pub(crate) patch: u32,
}

impl IosVersion {
    pub(crate) const fn new(major: u32, minor: u32, patch: u32) -> IosVersion {
        IosVersion {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version token such as `16`, `17.2` or `18.0.1`. Missing components are zero
    pub(crate) fn parse(token: &str) -> Result<IosVersion, FieldError> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        if parts.len() > 3 {
            error!("[decoder] Too many components in version {token}");
            return Err(FieldError::BadVersion);
        }

        let mut values = [0u32; 3];
        for (index, part) in parts.iter().enumerate() {
            values[index] = match part.parse::<u32>() {
                Ok(result) => result,
                Err(err) => {
                    error!("[decoder] Could not parse version {token}: {err:?}");
                    return Err(FieldError::BadVersion);
                }
            };
        }

        Ok(IosVersion::new(values[0], values[1], values[2]))
    }
}

impl fmt::Display for IosVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Pick the layout with the greatest `min_version` not above `version`.
/// Returns `None` when the version is below every layout
pub(crate) fn select_layout<'a>(version: &IosVersion, layouts: &'a [Layout]) -> Option<&'a Layout> {
    let mut selected: Option<&Layout> = None;
    for layout in layouts {
        if layout.min_version > *version {
            continue;
        }
        match selected {
            Some(current) if current.min_version >= layout.min_version => {}
            _ => selected = Some(layout),
        }
    }
    selected
}
