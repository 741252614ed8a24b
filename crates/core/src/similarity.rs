use crate::fingerprint::Fingerprint;

/// Full N x N score table over one batch, labels aligned with rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    // Computes every cell, including the diagonal and both symmetric
    // halves; the redundancy is accepted for the matrix-shaped output.
    pub(crate) fn build(labels: Vec<String>, fingerprints: &[Fingerprint]) -> Self {
        debug_assert_eq!(labels.len(), fingerprints.len());
        let scores = fingerprints
            .iter()
            .map(|row| fingerprints.iter().map(|col| jaccard(row, col)).collect())
            .collect();
        Self { labels, scores }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn scores(&self) -> &[Vec<f64>] {
        &self.scores
    }

    pub fn score(&self, a: usize, b: usize) -> f64 {
        self.scores[a][b]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarPair {
    pub a: String,
    pub b: String,
    pub score: f64,
}

/// Jaccard similarity of two fingerprints. Two empty fingerprints are
/// identical by convention; otherwise the union is at least 1 and the
/// score is `|A n B| / |A u B|` in [0, 1].
pub fn jaccard(a: &Fingerprint, b: &Fingerprint) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection_len(b);
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

pub(crate) fn collect_similar_pairs(matrix: &SimilarityMatrix, threshold: f64) -> Vec<SimilarPair> {
    let mut out = Vec::new();
    for i in 0..matrix.len() {
        for j in (i + 1)..matrix.len() {
            let score = matrix.score(i, j);
            if score < threshold {
                continue;
            }
            out.push(SimilarPair {
                a: matrix.labels()[i].clone(),
                b: matrix.labels()[j].clone(),
                score,
            });
        }
    }
    out.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
