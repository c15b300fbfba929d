//! newsig - commodity news sentiment signal
//!
//! Scores commodity news articles with a keyword lexicon and a Claude-backed
//! classifier, then reduces the AI scores to a BUY/SELL/HOLD call shown next
//! to the latest reference price.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use newsig::models::{Article, NewsigConfig};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let pipeline = newsig::build_pipeline(&NewsigConfig::default())?;
//! let output = pipeline.run(&[Article::new("Frost hits crops", "", "")]).await;
//! println!("{}", output.verdict.direction);
//! # Ok(())
//! # }
//! ```

pub use newsig_models as models;
pub use newsig_scoring as scoring;

pub mod refresh;
pub mod sources;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use newsig_models::config::{ClassifierConfig, NewsigConfig};
use newsig_models::report::SignalReport;
use newsig_scoring::{
    AiClassifier, ArticleScorer, ClassifierBackend, ClaudeCliBackend, Lexicon, Pipeline,
};
use tracing::{info, warn};

use crate::sources::Sources;

/// Read and parse a TOML configuration file.
pub fn load_config(path: impl AsRef<Path>) -> Result<NewsigConfig, anyhow::Error> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: NewsigConfig =
        toml::from_str(&config_str).with_context(|| "Failed to parse config")?;
    anyhow::ensure!(
        config.refresh.interval_seconds > 0,
        "refresh.interval_seconds must be at least 1"
    );
    Ok(config)
}

/// Build a Pipeline from configuration.
///
/// The backend credential is resolved here, once. Without one the AI
/// classifier runs offline for the life of the pipeline.
pub fn build_pipeline(config: &NewsigConfig) -> Result<Pipeline, anyhow::Error> {
    let lexicon =
        Lexicon::from_config(&config.lexicon).context("Invalid lexicon configuration")?;

    let ai = match resolve_api_key(&config.classifier) {
        Some(api_key) => {
            let backend = ClaudeCliBackend::from_config(&config.classifier, api_key);
            info!(model = %config.classifier.model, "AI classifier online");
            AiClassifier::new(
                Arc::new(backend) as Arc<dyn ClassifierBackend>,
                config.classifier.max_body_chars,
            )
        }
        None => {
            info!("AI classifier offline");
            AiClassifier::offline()
        }
    };

    Ok(Pipeline::new(ArticleScorer::new(Arc::new(lexicon), ai)))
}

/// The credential for the classifier backend, if enabled and present.
pub fn resolve_api_key(config: &ClassifierConfig) -> Option<String> {
    if !config.enabled {
        return None;
    }
    std::env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Run one refresh cycle: fetch sources, score, aggregate, attach the price.
pub async fn run_cycle(pipeline: &Pipeline, sources: &Sources) -> SignalReport {
    let articles = sources.articles.fetch();
    let output = pipeline.run(&articles).await;

    let price = sources.prices.fetch();
    match &price {
        Some(sample) => info!(
            last = sample.last,
            previous = sample.previous,
            change_pct = ?sample.change_pct(),
            "Reference price"
        ),
        None => warn!("Reference price unavailable"),
    }

    SignalReport::new(output.scored, output.verdict, price)
}
