use codesim_core::{BatchStats, SimilarPair, SimilarityMatrix, UnitReport};

pub(crate) fn has_degraded_units(stats: &BatchStats) -> bool {
    stats.skipped_not_found > 0
        || stats.skipped_permission_denied > 0
        || stats.skipped_too_large > 0
        || stats.skipped_binary > 0
        || stats.skipped_walk_errors > 0
        || stats.skipped_budget_max_files > 0
}

pub(crate) fn format_tokens(units: &[UnitReport]) -> String {
    let mut out = String::new();
    for unit in units {
        out.push_str(&format!("Tokens for {}:\n", unit.label));
        let texts: Vec<&str> = unit.tokens.iter().map(|t| t.text.as_str()).collect();
        out.push_str(&texts.join(" "));
        out.push('\n');
    }
    out
}

pub(crate) fn format_matrix(matrix: &SimilarityMatrix) -> String {
    let mut out = String::new();
    for label in matrix.labels() {
        out.push('\t');
        out.push_str(label);
    }
    out.push('\n');

    for (label, row) in matrix.labels().iter().zip(matrix.scores()) {
        out.push_str(label);
        for score in row {
            out.push_str(&format!("\t{score:.2}"));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn format_similar_pairs(pairs: &[SimilarPair]) -> String {
    let mut out = String::new();
    out.push_str(&format!("similar pairs: {}\n", pairs.len()));
    for pair in pairs {
        out.push_str(&format!("- {} ~ {} score={:.2}\n", pair.a, pair.b, pair.score));
    }
    out
}

pub(crate) fn format_batch_stats(stats: &BatchStats) -> String {
    let mut out = String::new();
    out.push_str("== batch stats ==\n");
    out.push_str(&format!(
        "candidates={} fingerprinted={} bytes={}\n",
        stats.candidate_files, stats.fingerprinted_files, stats.scanned_bytes
    ));
    if stats.empty_fingerprints > 0 {
        out.push_str(&format!("empty_fingerprints={}\n", stats.empty_fingerprints));
    }

    let mut skips: Vec<(&str, u64)> = vec![
        ("not_found", stats.skipped_not_found),
        ("permission_denied", stats.skipped_permission_denied),
        ("too_large", stats.skipped_too_large),
        ("binary", stats.skipped_binary),
        ("walk_errors", stats.skipped_walk_errors),
        ("budget_max_files", stats.skipped_budget_max_files),
    ];
    skips.retain(|(_, v)| *v > 0);
    if !skips.is_empty() {
        out.push_str("skipped:\n");
        for (k, v) in skips {
            out.push_str(&format!("- {k}={v}\n"));
        }
    }
    out
}
