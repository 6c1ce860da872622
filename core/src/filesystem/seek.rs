use super::{directory::is_directory, error::FileSystemError, metadata::glob_paths};
use glob::Pattern;
use log::{debug, error};

/// Expand each glob pattern beneath `root` and return every matching file. Results are sorted and deduplicated
pub(crate) fn search_candidates(
    root: &str,
    patterns: &[String],
) -> Result<Vec<String>, FileSystemError> {
    if !is_directory(root) {
        error!("[core] Extraction root {root} is not a directory");
        return Err(FileSystemError::NotDirectory);
    }

    // Case directories may contain glob metacharacters
    let base = Pattern::escape(root.trim_end_matches(['/', '\\']));
    let mut candidates = Vec::new();
    for pattern in patterns {
        let full_pattern = format!("{base}/{}", pattern.trim_start_matches('/'));
        let entries = glob_paths(&full_pattern)?;
        for entry in entries {
            if !entry.is_file {
                continue;
            }
            debug!("[core] Found candidate {} at {}", entry.filename, entry.full_path);
            candidates.push(entry.full_path);
        }
    }

    candidates.sort();
    candidates.dedup();
    Ok(candidates)
}

/// Return the first candidate path ending with `suffix`
pub(crate) fn get_file_path(candidates: &[String], suffix: &str) -> Result<String, FileSystemError> {
    for candidate in candidates {
        if candidate.ends_with(suffix) {
            return Ok(candidate.clone());
        }
    }

    error!("[core] No candidate ends with {suffix}");
    Err(FileSystemError::NoCandidate)
}
