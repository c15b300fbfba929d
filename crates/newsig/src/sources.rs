//! File-backed article source and price feed.
//!
//! Both swallow their own failures: an unreadable article file is an empty
//! batch and an unreadable price file is "unavailable". Neither can stop a
//! cycle.

use std::path::{Path, PathBuf};

use anyhow::Context;
use newsig_models::article::Article;
use newsig_models::price::{PricePoint, PriceSample};
use serde_json::Value;
use tracing::warn;

/// Where a cycle's articles come from.
#[derive(Debug, Clone)]
pub enum ArticleSource {
    /// JSON array file, re-read every cycle.
    File(PathBuf),
    /// A batch read once at startup (e.g. from stdin).
    Fixed(Vec<Article>),
}

impl ArticleSource {
    pub fn fetch(&self) -> Vec<Article> {
        match self {
            ArticleSource::File(path) => read_articles(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Article source unavailable");
                Vec::new()
            }),
            ArticleSource::Fixed(articles) => articles.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PriceSource {
    /// JSON array of `{timestamp, price}` points, re-read every cycle.
    File(PathBuf),
    Unavailable,
}

impl PriceSource {
    pub fn fetch(&self) -> Option<PriceSample> {
        match self {
            PriceSource::File(path) => match read_price_series(path) {
                Ok(series) => PriceSample::from_series(&series),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Price feed unavailable");
                    None
                }
            },
            PriceSource::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sources {
    pub articles: ArticleSource,
    pub prices: PriceSource,
}

pub fn read_articles(path: &Path) -> Result<Vec<Article>, anyhow::Error> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles: {}", path.display()))?;
    parse_articles(&json)
}

/// Parse a JSON array of articles. Only the array itself must be well
/// formed; a record that is not an object becomes an article with empty
/// fields.
pub fn parse_articles(json: &str) -> Result<Vec<Article>, anyhow::Error> {
    let records: Vec<Value> = serde_json::from_str(json).context("Failed to parse article JSON")?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| article_from_record(index, record))
        .collect())
}

fn article_from_record(index: usize, record: Value) -> Article {
    serde_json::from_value(record).unwrap_or_else(|e| {
        warn!(index, error = %e, "Malformed article record, using empty fields");
        Article::default()
    })
}

pub fn read_price_series(path: &Path) -> Result<Vec<PricePoint>, anyhow::Error> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read prices: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse price series JSON")
}
