// Corpus assembly — documents and the non-empty invariant.
//
// A Document pairs an identifying label (free text or URL) with its raw
// body. A Corpus is the ordered set of documents submitted together for
// one analysis run. Documents whose bodies hold no visible text are
// dropped here, so scoring only ever sees non-empty input.

use tracing::warn;

use crate::pipeline::error::PipelineError;

/// A single unit of analysis: an identifying label plus raw text.
///
/// Created when the operator supplies text or a page is fetched;
/// discarded after the run. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// True when the body contains any non-whitespace character.
    pub fn has_text(&self) -> bool {
        self.text.chars().any(|c| !c.is_whitespace())
    }
}

/// An ordered collection of documents with non-empty bodies.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from candidate documents, dropping empty bodies.
    ///
    /// Returns `EmptyInput` when nothing survives the filter — the
    /// pipeline never runs on an empty corpus.
    pub fn from_documents(documents: Vec<Document>) -> Result<Self, PipelineError> {
        let mut kept = Vec::with_capacity(documents.len());
        for doc in documents {
            if doc.has_text() {
                kept.push(doc);
            } else {
                warn!(label = %doc.label, "Document has no text, dropping from corpus");
            }
        }

        if kept.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        Ok(Self { documents: kept })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Labels in corpus order — the row/column order of the similarity
    /// matrix and every per-document result sequence.
    pub fn labels(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_empty_documents() {
        let corpus = Corpus::from_documents(vec![
            Document::new("a", "some text"),
            Document::new("b", "   \n\t "),
            Document::new("c", "more text"),
        ])
        .unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.labels(), vec!["a", "c"]);
    }

    #[test]
    fn all_empty_is_empty_input() {
        let result = Corpus::from_documents(vec![
            Document::new("a", ""),
            Document::new("b", "  "),
        ]);
        assert_eq!(result.unwrap_err(), PipelineError::EmptyInput);
    }

    #[test]
    fn no_documents_is_empty_input() {
        let result = Corpus::from_documents(vec![]);
        assert_eq!(result.unwrap_err(), PipelineError::EmptyInput);
    }

    #[test]
    fn preserves_order() {
        let corpus = Corpus::from_documents(vec![
            Document::new("first", "x y z"),
            Document::new("second", "p q r"),
        ])
        .unwrap();
        assert_eq!(corpus.labels(), vec!["first", "second"]);
    }
}
