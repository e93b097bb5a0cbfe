// TF-IDF vectorization — shared vocabulary, per-document weight vectors.
//
// The vocabulary is fitted jointly over the whole corpus in a single pass,
// so every per-document vector lives in the same term space and pairwise
// comparisons between documents are well-defined. Never fit per document.
//
// Weights use the smoothed formula:
//
//   idf(t)       = ln((1 + n_docs) / (1 + df(t))) + 1
//   weight(t, d) = tf(t, d) * idf(t)
//
// followed by L2 normalization of each document vector.

use std::collections::{HashMap, HashSet};

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::error::PipelineError;
use crate::corpus::Corpus;

/// Word tokens of two or more word characters, the classic `\w\w+`.
/// Single-letter tokens carry no keyword signal and are dropped.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// A fitted TF-IDF model: the shared vocabulary plus one L2-normalized
/// weight vector per document, in corpus order.
#[derive(Debug)]
pub struct TfIdfModel {
    /// All surviving terms in lexical order.
    vocabulary: Vec<String>,
    /// term -> position in `vocabulary` (and in every vector)
    index: HashMap<String, usize>,
    /// One weight vector per document, same order as the corpus.
    vectors: Vec<Vec<f64>>,
}

impl TfIdfModel {
    /// Fit the vectorizer over every document in the corpus.
    ///
    /// Tokenizes each body (case-folded), removes English stop words,
    /// builds the joint vocabulary, and computes the normalized weight
    /// vectors. Fails with `EmptyVocabulary` when nothing survives —
    /// e.g. content made up entirely of stop words.
    pub fn fit(corpus: &Corpus) -> Result<Self, PipelineError> {
        let stop: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        let token_re = Regex::new(TOKEN_PATTERN).expect("token pattern is valid");

        let tokenized: Vec<Vec<String>> = corpus
            .documents()
            .iter()
            .map(|doc| tokenize(&doc.text, &token_re, &stop))
            .collect();

        // Document frequency: how many documents contain each term.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
        vocabulary.sort();

        if vocabulary.is_empty() {
            return Err(PipelineError::EmptyVocabulary);
        }

        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let n_docs = corpus.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq[term.as_str()] as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut vector = vec![0.0; vocabulary.len()];
                for token in tokens {
                    let i = index[token.as_str()];
                    vector[i] += idf[i];
                }
                normalize(&mut vector);
                vector
            })
            .collect();

        debug!(
            terms = vocabulary.len(),
            documents = vectors.len(),
            "Fitted TF-IDF model"
        );

        Ok(Self {
            vocabulary,
            index,
            vectors,
        })
    }

    /// The fitted terms in lexical order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn doc_count(&self) -> usize {
        self.vectors.len()
    }

    /// The normalized weight vector for one document, indexed like
    /// `vocabulary()`.
    pub fn vector(&self, doc: usize) -> &[f64] {
        &self.vectors[doc]
    }

    /// Position of an already-folded term in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

/// Case-fold, extract word tokens, drop stop words.
fn tokenize(text: &str, token_re: &Regex, stop: &HashSet<String>) -> Vec<String> {
    let folded = text.to_lowercase();
    token_re
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .filter(|t| !stop.contains(t))
        .collect()
}

/// Scale a vector to unit length in place. All-zero vectors stay zero.
fn normalize(v: &mut [f64]) {
    let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
