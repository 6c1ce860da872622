use super::{
    applications::{
        kleinanzeigen::{
            messages::grab_messages, query::grab_last_query, search::grab_search_history,
            user::grab_user,
        },
        photos::assets::grab_shared_library_assets,
    },
    error::CollectionError,
    outcome::{ArtifactOutcome, ArtifactStatus},
    output::output_table,
    registry::{
        artifact_info, KLEINANZEIGEN_LAST_QUERY, KLEINANZEIGEN_MESSAGES,
        KLEINANZEIGEN_SEARCH_HISTORY, KLEINANZEIGEN_USER, PHOTOS_SHARED_LIBRARY_ASSETS,
    },
};
use crate::{
    decoder::version::IosVersion,
    filesystem::seek::search_candidates,
    structs::toml::{Artifacts, ExtractToml},
    utils::{logging::collection_status, time::time_now},
};
use chrono::FixedOffset;
use log::{error, info, warn};

/// Run every artifact in the collector. A failing artifact is logged and recorded, the rest still run
pub(crate) fn collect(
    collector: &ExtractToml,
    version: &IosVersion,
    timezone: &FixedOffset,
) -> Vec<(String, ArtifactStatus)> {
    let mut statuses = Vec::new();
    for artifact in &collector.artifacts {
        let start_time = time_now();
        let status = match collect_artifact(artifact, collector, version, timezone) {
            Ok(outcome) => ArtifactStatus::from_outcome(&outcome),
            Err(err) => {
                error!(
                    "[core] Failed to collect {}, error: {err:?}",
                    artifact.artifact_name
                );
                ArtifactStatus::Failed
            }
        };
        info!(
            "[core] Collected {} ({status}) in {} seconds",
            artifact.artifact_name,
            time_now().saturating_sub(start_time)
        );

        if let Err(err) = collection_status(&artifact.artifact_name, &collector.output, &status) {
            warn!("[core] Could not record status for {}: {err:?}", artifact.artifact_name);
        }
        statuses.push((artifact.artifact_name.clone(), status));
    }
    statuses
}

/// Discover, extract and output one artifact
fn collect_artifact(
    artifact: &Artifacts,
    collector: &ExtractToml,
    version: &IosVersion,
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, CollectionError> {
    let info = match artifact_info(&artifact.artifact_name) {
        Some(result) => result,
        None => {
            error!("[core] Unknown artifact name: {}", artifact.artifact_name);
            return Err(CollectionError::UnknownArtifact);
        }
    };

    let candidates = match &artifact.alt_file {
        Some(path) => vec![path.clone()],
        None => match search_candidates(&collector.source.path, &info.paths) {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Could not search for {}: {err:?}", info.name);
                return Err(CollectionError::Discovery);
            }
        },
    };

    let outcome = extract_artifact(&info.name, &candidates, version, timezone)?;
    if let ArtifactOutcome::Table(table) = &outcome {
        output_table(table, &collector.output)?;
    }
    Ok(outcome)
}

/// Dispatch to the artifact's extractor
fn extract_artifact(
    name: &str,
    candidates: &[String],
    version: &IosVersion,
    timezone: &FixedOffset,
) -> Result<ArtifactOutcome, CollectionError> {
    if name == PHOTOS_SHARED_LIBRARY_ASSETS {
        return match grab_shared_library_assets(candidates, version, timezone) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!("[core] Failed to parse {name}: {err:?}");
                Err(CollectionError::Photos)
            }
        };
    }

    let result = match name {
        KLEINANZEIGEN_MESSAGES => grab_messages(candidates, timezone),
        KLEINANZEIGEN_USER => grab_user(candidates, timezone),
        KLEINANZEIGEN_SEARCH_HISTORY => grab_search_history(candidates, timezone),
        KLEINANZEIGEN_LAST_QUERY => grab_last_query(candidates),
        _ => return Err(CollectionError::UnknownArtifact),
    };

    match result {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            error!("[core] Failed to parse {name}: {err:?}");
            Err(CollectionError::Kleinanzeigen)
        }
    }
}
