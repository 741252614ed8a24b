use std::path::PathBuf;

use clap::Parser;
use codesim_core::{DEFAULT_K, DEFAULT_SIMILARITY_THRESHOLD, PipelineOptions};

/// Compare source files with canonical token k-gram fingerprints and
/// Jaccard similarity.
#[derive(Parser, Debug)]
#[command(name = "codesim", version)]
#[command(
    about = "Similarity matrix for source files (token k-gram fingerprints)",
    after_help = "\
Examples:
  codesim a.cpp b.cpp c.cpp
  codesim --no-tokens submissions/
  codesim -k 5 --threshold 0.9 --json assignments/
  codesim --ignore-dir vendor --ext cs src/"
)]
pub(crate) struct Cli {
    /// Files or directories to fingerprint
    #[arg(required = true, value_name = "PATHS")]
    pub(crate) paths: Vec<PathBuf>,

    /// K-gram width in tokens
    #[arg(short, long, default_value_t = DEFAULT_K, value_parser = parse_k)]
    pub(crate) k: usize,

    /// Report pairs with similarity at or above this threshold
    #[arg(
        long,
        default_value_t = DEFAULT_SIMILARITY_THRESHOLD,
        value_parser = parse_threshold,
        value_name = "F"
    )]
    pub(crate) threshold: f64,

    /// Do not print each file's token stream
    #[arg(long)]
    pub(crate) no_tokens: bool,

    /// Output JSON
    #[arg(long)]
    pub(crate) json: bool,

    /// Include batch stats (JSON output) or print them to stderr (text)
    #[arg(long)]
    pub(crate) stats: bool,

    /// Exit non-zero if any unit degraded to an empty fingerprint
    #[arg(long)]
    pub(crate) strict: bool,

    /// Do not respect .gitignore rules when walking directories
    #[arg(long)]
    pub(crate) no_gitignore: bool,

    /// Add an ignored directory name (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub(crate) ignore_dirs: Vec<String>,

    /// Accepted source extension for directory walks (repeatable, replaces the default C/C++ set)
    #[arg(long = "ext", value_name = "EXT")]
    pub(crate) extensions: Vec<String>,

    /// Skip files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub(crate) max_file_size: Option<u64>,

    /// Stop reading new files after this many
    #[arg(long, value_name = "N")]
    pub(crate) max_files: Option<usize>,
}

fn parse_k(raw: &str) -> Result<usize, String> {
    let k: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid number"))?;
    if k == 0 {
        Err("k must be at least 1".to_string())
    } else {
        Ok(k)
    }
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a valid number"))?;
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err("threshold must be between 0 and 1".to_string())
    }
}

impl Cli {
    pub(crate) fn to_options(&self) -> PipelineOptions {
        let mut options = PipelineOptions {
            k: self.k,
            similarity_threshold: self.threshold,
            respect_gitignore: !self.no_gitignore,
            ..PipelineOptions::default()
        };
        if let Some(max_file_size) = self.max_file_size {
            options.max_file_size = Some(max_file_size);
        }
        if let Some(max_files) = self.max_files {
            options.max_files = Some(max_files);
        }
        options.ignore_dirs.extend(self.ignore_dirs.iter().cloned());
        if !self.extensions.is_empty() {
            options.source_extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect();
        }
        options
    }
}
