use crate::decoder::version::IosVersion;
use common::report::ArtifactTable;
use std::fmt;

/// Result of one extractor invocation
#[derive(Debug)]
pub(crate) enum ArtifactOutcome {
    /// Extraction ran. The table may hold zero rows
    Table(ArtifactTable),
    /// The extraction version is below every supported layout. The source was never opened
    Unsupported { version: IosVersion },
}

/// Per artifact line written to `status.log`
#[derive(Debug, PartialEq)]
pub(crate) enum ArtifactStatus {
    Ok(usize),
    Empty,
    Unsupported,
    Failed,
}

impl ArtifactStatus {
    pub(crate) fn from_outcome(outcome: &ArtifactOutcome) -> ArtifactStatus {
        match outcome {
            ArtifactOutcome::Table(table) if table.is_empty() => ArtifactStatus::Empty,
            ArtifactOutcome::Table(table) => ArtifactStatus::Ok(table.rows().len()),
            ArtifactOutcome::Unsupported { .. } => ArtifactStatus::Unsupported,
        }
    }
}

impl fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactStatus::Ok(rows) => write!(f, "ok:{rows}"),
            ArtifactStatus::Empty => write!(f, "empty:0"),
            ArtifactStatus::Unsupported => write!(f, "unsupported:0"),
            ArtifactStatus::Failed => write!(f, "failed:0"),
        }
    }
}
