// Keyword ranking and candidate-term lookup over a fitted model.

use serde::Serialize;

use super::vectorizer::TfIdfModel;
use crate::corpus::Corpus;

/// A term and its TF-IDF weight within one document.
#[derive(Debug, Clone, Serialize)]
pub struct TermScore {
    pub term: String,
    pub weight: f64,
}

/// Ranked keywords for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentKeywords {
    pub label: String,
    /// Weight descending; equal weights fall back to lexical term order
    /// so output is deterministic.
    pub scores: Vec<TermScore>,
}

/// The presence/absence verdict for one caller-supplied candidate term.
#[derive(Debug, Clone, Serialize)]
pub struct TermCheck {
    pub term: String,
    /// The document's weight when the term is in the fitted vocabulary,
    /// None when it is not.
    pub weight: Option<f64>,
}

/// Rank every vocabulary term for every document, in corpus order.
///
/// The full fitted vocabulary is scored per document — terms absent from
/// a document carry weight 0.0 and sort last. Callers typically keep the
/// top 10.
pub fn rank_keywords(corpus: &Corpus, model: &TfIdfModel) -> Vec<DocumentKeywords> {
    corpus
        .documents()
        .iter()
        .enumerate()
        .map(|(doc, document)| {
            let mut scores: Vec<TermScore> = model
                .vocabulary()
                .iter()
                .zip(model.vector(doc))
                .map(|(term, &weight)| TermScore {
                    term: term.clone(),
                    weight,
                })
                .collect();

            scores.sort_by(|a, b| {
                b.weight
                    .partial_cmp(&a.weight)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.term.cmp(&b.term))
            });

            DocumentKeywords {
                label: document.label.clone(),
                scores,
            }
        })
        .collect()
}

/// Look up a candidate term's weight in one document.
///
/// Policy: the term is trimmed and case-folded (the same folding the
/// tokenizer applies), then matched exactly against the fitted
/// vocabulary. A term that only occurs as a raw substring of the original
/// text — or that was removed as a stop word — is reported absent. That
/// means multi-word phrases never match.
pub fn lookup_term(model: &TfIdfModel, doc: usize, term: &str) -> Option<f64> {
    let needle = term.trim().to_lowercase();
    model.term_index(&needle).map(|i| model.vector(doc)[i])
}

/// Run `lookup_term` for a list of candidate terms, preserving their order.
pub fn check_terms(model: &TfIdfModel, doc: usize, terms: &[String]) -> Vec<TermCheck> {
    terms
        .iter()
        .map(|term| TermCheck {
            term: term.clone(),
            weight: lookup_term(model, doc, term),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Document;
    use crate::pipeline::error::PipelineError;

    fn corpus(texts: &[&str]) -> Corpus {
        let docs = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc{i}"), *t))
            .collect();
        Corpus::from_documents(docs).unwrap()
    }

    #[test]
    fn scores_sorted_by_weight_descending() {
        let c = corpus(&["compiler compiler compiler borrow borrow lifetime"]);
        let model = TfIdfModel::fit(&c).unwrap();
        let ranked = rank_keywords(&c, &model);

        let scores = &ranked[0].scores;
        for window in scores.windows(2) {
            assert!(
                window[0].weight >= window[1].weight,
                "{} ({}) before {} ({})",
                window[0].term,
                window[0].weight,
                window[1].term,
                window[1].weight
            );
        }
        assert_eq!(scores[0].term, "compiler");
    }

    #[test]
    fn ties_break_lexically() {
        // "banana" and "apple" have identical tf and df — lexical order wins.
        let c = corpus(&["banana apple banana apple cherry"]);
        let model = TfIdfModel::fit(&c).unwrap();
        let scores = &rank_keywords(&c, &model)[0].scores;

        assert_eq!(scores[0].term, "apple");
        assert_eq!(scores[1].term, "banana");
        assert_eq!(scores[2].term, "cherry");
    }

    #[test]
    fn absent_vocabulary_terms_score_zero() {
        // "glacier" only occurs in the second document but is still part
        // of the shared vocabulary, so doc0 scores it at 0.0.
        let c = corpus(&["volcano eruption", "glacier melt"]);
        let model = TfIdfModel::fit(&c).unwrap();
        let ranked = rank_keywords(&c, &model);

        let glacier = ranked[0]
            .scores
            .iter()
            .find(|s| s.term == "glacier")
            .expect("shared vocabulary includes glacier");
        assert_eq!(glacier.weight, 0.0);
    }

    #[test]
    fn lookup_finds_present_term() {
        let c = corpus(&["rust compiler borrow checker"]);
        let model = TfIdfModel::fit(&c).unwrap();
        let weight = lookup_term(&model, 0, "compiler").expect("present");
        assert!(weight > 0.0);
    }

    #[test]
    fn lookup_case_folds_the_query() {
        let c = corpus(&["rust compiler borrow checker"]);
        let model = TfIdfModel::fit(&c).unwrap();
        assert!(lookup_term(&model, 0, "Compiler").is_some());
        assert!(lookup_term(&model, 0, "  COMPILER  ").is_some());
    }

    #[test]
    fn lookup_reports_absent_terms() {
        let c = corpus(&["rust compiler borrow checker"]);
        let model = TfIdfModel::fit(&c).unwrap();

        assert!(lookup_term(&model, 0, "garbage").is_none());
        // Stop words never survive fitting.
        assert!(lookup_term(&model, 0, "the").is_none());
        // Raw substrings of real tokens are not vocabulary entries.
        assert!(lookup_term(&model, 0, "compil").is_none());
        // Multi-word phrases cannot match a single-token vocabulary.
        assert!(lookup_term(&model, 0, "borrow checker").is_none());
    }

    #[test]
    fn check_terms_preserves_query_order() {
        let c = corpus(&["rust compiler"]);
        let model = TfIdfModel::fit(&c).unwrap();
        let checks = check_terms(
            &model,
            0,
            &["missing".to_string(), "rust".to_string()],
        );

        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].term, "missing");
        assert!(checks[0].weight.is_none());
        assert_eq!(checks[1].term, "rust");
        assert!(checks[1].weight.is_some());
    }

    #[test]
    fn empty_document_never_reaches_ranking() {
        assert_eq!(
            Corpus::from_documents(vec![Document::new("empty", "")]).unwrap_err(),
            PipelineError::EmptyInput
        );
    }
}
