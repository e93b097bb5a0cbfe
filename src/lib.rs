// Graphite: semantic keyword extraction and internal link suggestion.
//
// This is the library root. Each module corresponds to a stage of an
// analysis run: corpus assembly, TF-IDF scoring, page fetching, and
// terminal/JSON output.

pub mod config;
pub mod corpus;
pub mod fetch;
pub mod output;
pub mod pipeline;
