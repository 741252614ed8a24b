use std::io;

use codesim_core::{BatchReport, BatchStats};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonBatchStats {
    pub(crate) candidate_files: u64,
    pub(crate) fingerprinted_files: u64,
    pub(crate) scanned_bytes: u64,
    pub(crate) skipped_not_found: u64,
    pub(crate) skipped_permission_denied: u64,
    pub(crate) skipped_too_large: u64,
    pub(crate) skipped_binary: u64,
    pub(crate) skipped_walk_errors: u64,
    pub(crate) skipped_budget_max_files: u64,
    pub(crate) empty_fingerprints: u64,
}

impl From<&BatchStats> for JsonBatchStats {
    fn from(stats: &BatchStats) -> Self {
        Self {
            candidate_files: stats.candidate_files,
            fingerprinted_files: stats.fingerprinted_files,
            scanned_bytes: stats.scanned_bytes,
            skipped_not_found: stats.skipped_not_found,
            skipped_permission_denied: stats.skipped_permission_denied,
            skipped_too_large: stats.skipped_too_large,
            skipped_binary: stats.skipped_binary,
            skipped_walk_errors: stats.skipped_walk_errors,
            skipped_budget_max_files: stats.skipped_budget_max_files,
            empty_fingerprints: stats.empty_fingerprints,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonUnit {
    pub(crate) label: String,
    pub(crate) token_count: usize,
    pub(crate) kgram_count: usize,
    pub(crate) fingerprint_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tokens: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonMatrix {
    pub(crate) labels: Vec<String>,
    pub(crate) scores: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonSimilarPair {
    pub(crate) a: String,
    pub(crate) b: String,
    pub(crate) score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonReport {
    pub(crate) files: Vec<JsonUnit>,
    pub(crate) matrix: JsonMatrix,
    pub(crate) similar_pairs: Vec<JsonSimilarPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) batch_stats: Option<JsonBatchStats>,
}

pub(crate) fn map_report(
    report: &BatchReport,
    include_tokens: bool,
    stats: Option<&BatchStats>,
) -> JsonReport {
    JsonReport {
        files: report
            .units
            .iter()
            .map(|unit| JsonUnit {
                label: unit.label.clone(),
                token_count: unit.tokens.len(),
                kgram_count: unit.kgram_count,
                fingerprint_len: unit.fingerprint_len,
                tokens: include_tokens
                    .then(|| unit.tokens.iter().map(|t| t.text.clone()).collect()),
            })
            .collect(),
        matrix: JsonMatrix {
            labels: report.matrix.labels().to_vec(),
            scores: report.matrix.scores().to_vec(),
        },
        similar_pairs: report
            .similar_pairs
            .iter()
            .map(|pair| JsonSimilarPair {
                a: pair.a.clone(),
                b: pair.b.clone(),
                score: pair.score,
            })
            .collect(),
        batch_stats: stats.map(JsonBatchStats::from),
    }
}

pub(crate) fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::other(format!("json encode: {e}")))?;
    println!("{json}");
    Ok(())
}
