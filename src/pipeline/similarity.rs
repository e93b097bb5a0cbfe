// Pairwise document similarity and link suggestion.
//
// Vectors come from the jointly fitted model, so cosine similarity is a
// plain dot product of the L2-normalized vectors. The diagonal is
// self-similarity and is excluded from every downstream use.

use super::error::PipelineError;
use super::vectorizer::TfIdfModel;

/// Similarity above which two pages are considered related enough to
/// link. Deliberately low: cross-linking a marginally related page is
/// cheaper than missing a genuinely related one.
pub const DEFAULT_LINK_THRESHOLD: f64 = 0.1;

/// Symmetric N×N cosine similarity matrix indexed by corpus position,
/// every cell in [0, 1].
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Compute pairwise cosine similarity between every document pair.
    ///
    /// Requires at least two documents — a smaller matrix is degenerate
    /// and reported as `InvalidSimilarity`, as is any NaN cell.
    pub fn compute(model: &TfIdfModel) -> Result<Self, PipelineError> {
        let n = model.doc_count();
        if n < 2 {
            return Err(PipelineError::InvalidSimilarity(format!(
                "need at least 2 documents, got {n}"
            )));
        }

        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let similarity = dot(model.vector(i), model.vector(j)).clamp(0.0, 1.0);
                if similarity.is_nan() {
                    return Err(PipelineError::InvalidSimilarity(format!(
                        "similarity of documents {i} and {j} is not a number"
                    )));
                }
                values[i][j] = similarity;
                values[j][i] = similarity;
            }
        }

        Ok(Self { values })
    }

    /// Number of documents (rows).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }
}

/// For each document, every *other* document whose similarity clears the
/// threshold, in corpus order. An empty list just means a page has no
/// related neighbors — not an error.
pub fn suggest_links(matrix: &SimilarityMatrix, threshold: f64) -> Vec<Vec<usize>> {
    (0..matrix.len())
        .map(|i| {
            (0..matrix.len())
                .filter(|&j| j != i && matrix.get(i, j) > threshold)
                .collect()
        })
        .collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
