use std::collections::HashSet;

use crate::similarity::{SimilarPair, SimilarityMatrix};
use crate::tokenize::Token;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub k: usize,
    pub similarity_threshold: f64,
    pub max_file_size: Option<u64>,
    pub max_files: Option<usize>,
    pub ignore_dirs: HashSet<String>,
    pub respect_gitignore: bool,
    pub source_extensions: HashSet<String>,
}

pub const DEFAULT_K: usize = 3;
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE_BYTES),
            max_files: None,
            ignore_dirs: default_ignore_dirs(),
            respect_gitignore: true,
            source_extensions: default_source_extensions(),
        }
    }
}

pub fn default_ignore_dirs() -> HashSet<String> {
    [
        ".git",
        ".hg",
        ".svn",
        "node_modules",
        "target",
        "dist",
        "build",
        "out",
        ".cache",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Extensions accepted when a directory input is walked. An empty set
/// disables the filter.
pub fn default_source_extensions() -> HashSet<String> {
    ["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub candidate_files: u64,
    pub fingerprinted_files: u64,
    pub scanned_bytes: u64,
    pub skipped_not_found: u64,
    pub skipped_permission_denied: u64,
    pub skipped_too_large: u64,
    pub skipped_binary: u64,
    pub skipped_walk_errors: u64,
    pub skipped_budget_max_files: u64,
    pub empty_fingerprints: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T> {
    pub result: T,
    pub stats: BatchStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub label: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub label: String,
    pub tokens: Vec<Token>,
    pub kgram_count: usize,
    pub fingerprint_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
    pub matrix: SimilarityMatrix,
    pub similar_pairs: Vec<SimilarPair>,
}
