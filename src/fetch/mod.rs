// Page fetching — injectable fetcher trait plus the reqwest implementation.
//
// The scoring core never touches the network: it only ever sees documents
// that fetched successfully and yielded non-empty paragraph text. A failed
// fetch logs a warning and skips that URL; the rest of the run continues.

pub mod html;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::corpus::Document;

/// How many pages to fetch at once. Results still come back in input
/// order regardless of which request finishes first.
pub const FETCH_CONCURRENCY: usize = 4;

/// Capability to turn a URL into a raw page body.
///
/// Injectable so corpus building can be tested with canned responses
/// instead of live HTTP.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher used by the CLI.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = url, "GET page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{url} returned {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {url}"))
    }
}

/// Fetch every URL and build analysis documents from paragraph text.
///
/// URLs fetch concurrently (bounded) with results kept in input order.
/// Failed fetches and pages yielding no paragraph text are skipped with
/// a warning — one bad URL never aborts the others.
pub async fn fetch_documents(fetcher: &dyn PageFetcher, urls: &[String]) -> Vec<Document> {
    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Fetching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let bodies: Vec<(&String, Result<String>)> = stream::iter(urls.iter().map(|url| {
        let pb = &pb;
        async move {
            let result = fetcher.fetch(url).await;
            pb.inc(1);
            (url, result)
        }
    }))
    .buffered(FETCH_CONCURRENCY)
    .collect()
    .await;
    pb.finish_and_clear();

    let mut documents = Vec::new();
    for (url, result) in bodies {
        match result {
            Ok(body) => {
                let text = html::paragraph_text(&body);
                if text.chars().any(|c| !c.is_whitespace()) {
                    documents.push(Document::new(url.clone(), text));
                } else {
                    warn!(url = %url, "No paragraph text extracted, skipping");
                }
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Fetch failed, skipping");
            }
        }
    }

    documents
}
