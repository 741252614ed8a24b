use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

use crate::types::{BatchStats, PipelineOptions};

/// Read one unit's text. `None` degrades the unit to an empty fingerprint;
/// the reason is recorded in `stats` and logged.
pub(crate) fn read_unit_text(
    path: &Path,
    options: &PipelineOptions,
    stats: &mut BatchStats,
) -> Option<String> {
    if let Some(max_files) = options.max_files
        && stats.fingerprinted_files >= max_files as u64
    {
        stats.skipped_budget_max_files = stats.skipped_budget_max_files.saturating_add(1);
        warn!(path = %path.display(), "file budget reached; treating unit as empty");
        return None;
    }

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            record_io_error(path, &err, stats);
            return None;
        }
    };

    if let Some(max_file_size) = options.max_file_size
        && metadata.len() > max_file_size
    {
        stats.skipped_too_large = stats.skipped_too_large.saturating_add(1);
        warn!(
            path = %path.display(),
            size = metadata.len(),
            "file too large; treating unit as empty"
        );
        return None;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            record_io_error(path, &err, stats);
            return None;
        }
    };

    if bytes.contains(&0) {
        stats.skipped_binary = stats.skipped_binary.saturating_add(1);
        warn!(path = %path.display(), "binary file; treating unit as empty");
        return None;
    }

    stats.fingerprinted_files = stats.fingerprinted_files.saturating_add(1);
    stats.scanned_bytes = stats.scanned_bytes.saturating_add(bytes.len() as u64);

    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn record_io_error(path: &Path, err: &io::Error, stats: &mut BatchStats) {
    match err.kind() {
        io::ErrorKind::NotFound => {
            stats.skipped_not_found = stats.skipped_not_found.saturating_add(1);
        }
        io::ErrorKind::PermissionDenied => {
            stats.skipped_permission_denied = stats.skipped_permission_denied.saturating_add(1);
        }
        _ => {
            stats.skipped_walk_errors = stats.skipped_walk_errors.saturating_add(1);
        }
    }
    warn!(path = %path.display(), %err, "cannot read file; treating unit as empty");
}
