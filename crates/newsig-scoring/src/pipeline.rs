use std::time::Instant;

use newsig_models::article::Article;
use newsig_models::sentiment::ScoredArticle;
use newsig_models::verdict::MarketVerdict;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregator::aggregate;
use crate::scorer::ArticleScorer;

/// Result of one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineOutput {
    /// One record per input article, in input order.
    pub scored: Vec<ScoredArticle>,
    pub verdict: MarketVerdict,
}

/// End-to-end entry point: articles in, scored records and verdict out.
///
/// Holds only immutable configuration, so it can be run any number of times
/// at any cadence with identical behavior.
pub struct Pipeline {
    scorer: ArticleScorer,
}

impl Pipeline {
    pub fn new(scorer: ArticleScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &ArticleScorer {
        &self.scorer
    }

    /// Score every article one at a time, then aggregate.
    pub async fn run(&self, articles: &[Article]) -> PipelineOutput {
        let start = Instant::now();
        info!(
            articles = articles.len(),
            ai_online = self.scorer.ai().is_online(),
            "Starting cycle"
        );

        let mut scored = Vec::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            let record = self.scorer.score(article).await;
            debug!(
                index,
                title = %record.title,
                lexicon = %record.lexicon_label,
                ai_score = record.ai_score,
                "Article scored"
            );
            scored.push(record);
        }

        let verdict = aggregate(&scored);
        let ai_fallbacks = scored.iter().filter(|s| s.is_ai_fallback()).count();

        info!(
            articles = scored.len(),
            ai_fallbacks,
            direction = %verdict.direction,
            average_score = verdict.average_score,
            elapsed_ms = start.elapsed().as_millis(),
            "Cycle complete"
        );

        PipelineOutput { scored, verdict }
    }
}
