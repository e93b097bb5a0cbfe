// Typed failure conditions for the scoring pipeline.
//
// All three are recoverable at the CLI boundary: the diagnostic is shown
// to the operator and the current run aborts. Process state is otherwise
// unaffected — none of these is fatal.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    /// No documents with non-empty text were supplied.
    #[error("no documents with non-empty text to analyze")]
    EmptyInput,

    /// Tokenization and stop-word removal left nothing to score.
    #[error("vocabulary is empty — the content may consist only of stop words")]
    EmptyVocabulary,

    /// The similarity matrix came out degenerate.
    #[error("similarity matrix is degenerate: {0}")]
    InvalidSimilarity(String),
}
