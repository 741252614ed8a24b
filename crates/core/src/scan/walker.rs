use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::types::{BatchStats, PipelineOptions};

/// Expand a directory input to its contained source files. Walk failures
/// are counted and skipped, never fatal.
pub(crate) fn collect_source_files(
    root: &Path,
    options: &PipelineOptions,
    stats: &mut BatchStats,
) -> Vec<PathBuf> {
    let ignore_dirs = options.ignore_dirs.clone();
    let respect_gitignore = options.respect_gitignore;
    let is_git_repo = root.join(".git").exists();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .follow_links(false)
        .ignore(false)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore && is_git_repo)
        .git_exclude(respect_gitignore && is_git_repo)
        .parents(false)
        .require_git(false);

    let walker = builder
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.path_is_symlink() {
                return false;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            match entry.file_name().to_str() {
                Some(name) => !ignore_dirs.contains(name),
                None => true,
            }
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!(%err, "walk error");
                stats.skipped_walk_errors = stats.skipped_walk_errors.saturating_add(1);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if !has_source_extension(&path, options) {
            continue;
        }
        stats.candidate_files = stats.candidate_files.saturating_add(1);
        files.push(path);
    }

    // walk order is filesystem-dependent; unit order must be deterministic
    files.sort();
    files
}

fn has_source_extension(path: &Path, options: &PipelineOptions) -> bool {
    if options.source_extensions.is_empty() {
        return true;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => options.source_extensions.contains(&ext.to_ascii_lowercase()),
        None => false,
    }
}
