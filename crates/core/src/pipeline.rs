use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;
use crate::kgram::build_kgrams;
use crate::normalize::{NameMap, normalize};
use crate::scan::{collect_source_files, read_unit_text, unit_label};
use crate::similarity::{SimilarityMatrix, collect_similar_pairs};
use crate::tokenize::{Token, tokenize};
use crate::types::{
    BatchOutcome, BatchReport, BatchStats, PipelineOptions, SourceUnit, UnitReport,
};

// One unit, one naming state: normalize, tokenize, window, hash.
fn fingerprint_text(text: &str, k: usize) -> (Vec<Token>, usize, Fingerprint) {
    let mut names = NameMap::new();
    let normalized = normalize(text, &mut names);
    let tokens = tokenize(&normalized);
    let kgrams = build_kgrams(&tokens, k);
    let fingerprint = Fingerprint::from_kgrams(&kgrams);
    (tokens, kgrams.len(), fingerprint)
}

/// Fingerprint a batch of in-memory units and compute their similarity
/// matrix. Pure: no I/O, no state outlives a unit. Units are processed in
/// input order and the matrix rows align with it.
pub fn fingerprint_sources(units: &[SourceUnit], options: &PipelineOptions) -> Result<BatchReport> {
    if options.k == 0 {
        return Err(Error::InvalidKGramWidth);
    }

    let mut reports = Vec::with_capacity(units.len());
    let mut fingerprints = Vec::with_capacity(units.len());
    for unit in units {
        let (tokens, kgram_count, fingerprint) = fingerprint_text(&unit.text, options.k);
        reports.push(UnitReport {
            label: unit.label.clone(),
            tokens,
            kgram_count,
            fingerprint_len: fingerprint.len(),
        });
        fingerprints.push(fingerprint);
    }

    let labels = reports.iter().map(|r| r.label.clone()).collect();
    let matrix = SimilarityMatrix::build(labels, &fingerprints);
    let similar_pairs = collect_similar_pairs(&matrix, options.similarity_threshold);

    Ok(BatchReport {
        units: reports,
        matrix,
        similar_pairs,
    })
}

/// File-backed batch run. Directory inputs expand to their contained source
/// files; file inputs are taken as-is. A path that cannot be read still
/// participates as a unit with an empty fingerprint, so matrix dimensions
/// always match the expanded input list.
pub fn run_batch(
    paths: &[PathBuf],
    options: &PipelineOptions,
) -> Result<BatchOutcome<BatchReport>> {
    if options.k == 0 {
        return Err(Error::InvalidKGramWidth);
    }

    let mut stats = BatchStats::default();
    let mut units = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in collect_source_files(path, options, &mut stats) {
                units.push(read_unit(&file, options, &mut stats));
            }
        } else {
            stats.candidate_files = stats.candidate_files.saturating_add(1);
            units.push(read_unit(path, options, &mut stats));
        }
    }

    let report = fingerprint_sources(&units, options)?;
    stats.empty_fingerprints = report
        .units
        .iter()
        .filter(|unit| unit.fingerprint_len == 0)
        .count() as u64;

    Ok(BatchOutcome {
        result: report,
        stats,
    })
}

fn read_unit(path: &Path, options: &PipelineOptions, stats: &mut BatchStats) -> SourceUnit {
    let label = unit_label(path);
    match read_unit_text(path, options, stats) {
        Some(text) => SourceUnit { label, text },
        // degraded: participates with an empty fingerprint
        None => SourceUnit {
            label,
            text: String::new(),
        },
    }
}
