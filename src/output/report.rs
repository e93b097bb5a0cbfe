// JSON report assembly — machine-readable run output behind --json.
//
// Weights are emitted at full precision here; 4-decimal rounding is a
// terminal-display concern.

use serde::Serialize;

use crate::pipeline::keywords::{DocumentKeywords, TermCheck};
use crate::pipeline::similarity::SimilarityMatrix;

/// Report for a single-document `analyze` run.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub document: DocumentKeywords,
    pub term_checks: Vec<TermCheck>,
}

/// Link suggestions for one page, by label.
#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub label: String,
    pub related: Vec<String>,
}

/// Report for a multi-page `links` run.
#[derive(Debug, Serialize)]
pub struct LinksReport {
    pub pages: Vec<DocumentKeywords>,
    pub similarity: Vec<Vec<f64>>,
    pub threshold: f64,
    pub suggestions: Vec<PageLinks>,
}

impl LinksReport {
    pub fn build(
        pages: Vec<DocumentKeywords>,
        matrix: &SimilarityMatrix,
        threshold: f64,
        suggestions: &[Vec<usize>],
        labels: &[&str],
    ) -> Self {
        let suggestions = suggestions
            .iter()
            .enumerate()
            .map(|(i, related)| PageLinks {
                label: labels[i].to_string(),
                related: related.iter().map(|&j| labels[j].to_string()).collect(),
            })
            .collect();

        Self {
            pages,
            similarity: matrix.values().to_vec(),
            threshold,
            suggestions,
        }
    }
}
