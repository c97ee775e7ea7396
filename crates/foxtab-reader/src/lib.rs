//! # foxtab-reader
//!
//! Fetches a URL and reduces it to readable plain text for the `read`
//! command. Extraction is heuristic: pick the densest content root and
//! keep its block-level text.

mod extract;

pub use extract::extract_article;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::redirect::Policy;

/// A fetched page reduced to readable text.
#[derive(Debug)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub body: String,
}

/// Fetch `raw_url` and extract its readable text.
pub async fn fetch_article(raw_url: &str) -> Result<Article> {
    let parsed =
        url::Url::parse(raw_url).with_context(|| format!("invalid URL: {raw_url}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("only http(s) URLs can be read");
    }

    let client = reqwest::Client::builder()
        .redirect(Policy::limited(5))
        .timeout(Duration::from_secs(12))
        .user_agent("Mozilla/5.0 (foxtab reader)")
        .build()?;

    let resp = client.get(parsed).send().await?;
    if !resp.status().is_success() {
        bail!("HTTP {}", resp.status());
    }

    let final_url = resp.url().to_string();
    let html = resp.text().await?;

    let (title, body) = extract_article(&html);
    if body.trim().is_empty() {
        bail!("no readable content found");
    }

    Ok(Article {
        title: title.unwrap_or_else(|| final_url.clone()),
        url: final_url,
        body,
    })
}
