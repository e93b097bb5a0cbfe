use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use graphite::config::Config;
use graphite::corpus::{Corpus, Document};
use graphite::fetch::{self, HttpFetcher};
use graphite::output::report::{AnalyzeReport, LinksReport};
use graphite::output::terminal;
use graphite::pipeline::keywords;
use graphite::pipeline::similarity::{self, SimilarityMatrix};
use graphite::pipeline::vectorizer::TfIdfModel;

/// Graphite: semantic keyword extraction and internal link suggestion.
///
/// Extracts the terms that make a document distinctive, checks candidate
/// keywords against the fitted vocabulary, and suggests which of a set
/// of pages should link to each other.
#[derive(Parser)]
#[command(name = "graphite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keywords from a text document (file, or stdin when omitted)
    Analyze {
        /// Path to the text file to analyze
        file: Option<PathBuf>,

        /// Candidate keyword to check against the vocabulary (repeatable).
        /// Single words only — multi-word phrases never survive
        /// tokenization and always report "not present".
        #[arg(long = "term")]
        terms: Vec<String>,

        /// How many top keywords to show (default: GRAPHITE_TOP_KEYWORDS or 10)
        #[arg(long)]
        top: Option<usize>,

        /// Emit a JSON report instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// Fetch pages and suggest internal links between them
    Links {
        /// Page URLs to fetch and compare (at least two)
        urls: Vec<String>,

        /// Similarity threshold for suggesting a link
        /// (default: GRAPHITE_LINK_THRESHOLD or 0.1)
        #[arg(long)]
        threshold: Option<f64>,

        /// How many top keywords to show per page
        #[arg(long)]
        top: Option<usize>,

        /// Emit a JSON report instead of terminal output
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graphite=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            file,
            terms,
            top,
            json,
        } => {
            let (label, text) = match &file {
                Some(path) => (
                    path.display().to_string(),
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                ),
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read stdin")?;
                    ("stdin".to_string(), buffer)
                }
            };

            let corpus = Corpus::from_documents(vec![Document::new(label, text)])?;
            let model = TfIdfModel::fit(&corpus)?;

            let mut ranked = keywords::rank_keywords(&corpus, &model);
            let top = top.unwrap_or(config.top_keywords);
            for doc in &mut ranked {
                doc.scores.truncate(top);
            }

            let checks = keywords::check_terms(&model, 0, &terms);

            if json {
                let report = AnalyzeReport {
                    document: ranked.remove(0),
                    term_checks: checks,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_keywords(&ranked[0]);
                terminal::display_term_checks(&checks);
            }
        }

        Commands::Links {
            urls,
            threshold,
            top,
            json,
        } => {
            if urls.len() < 2 {
                anyhow::bail!("Provide at least two URLs to compare");
            }

            let fetcher = HttpFetcher::new(&config.user_agent, config.fetch_timeout)?;

            println!("Fetching {} pages...", urls.len());
            let documents = fetch::fetch_documents(&fetcher, &urls).await;

            let corpus = Corpus::from_documents(documents)?;
            if corpus.len() < 2 {
                anyhow::bail!(
                    "Only {} page(s) had usable text — need at least two to compare",
                    corpus.len()
                );
            }
            info!(pages = corpus.len(), "Corpus assembled");

            let model = TfIdfModel::fit(&corpus)?;

            let mut ranked = keywords::rank_keywords(&corpus, &model);
            let top = top.unwrap_or(config.top_keywords);
            for page in &mut ranked {
                page.scores.truncate(top);
            }

            let matrix = SimilarityMatrix::compute(&model)?;
            let threshold = threshold.unwrap_or(config.link_threshold);
            let suggestions = similarity::suggest_links(&matrix, threshold);
            let labels = corpus.labels();

            if json {
                let report = LinksReport::build(ranked, &matrix, threshold, &suggestions, &labels);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for page in &ranked {
                    terminal::display_keywords(page);
                }
                terminal::display_similarity_matrix(&labels, &matrix);
                terminal::display_link_suggestions(&labels, &suggestions, threshold);
            }
        }
    }

    Ok(())
}
