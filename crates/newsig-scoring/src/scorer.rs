use std::sync::Arc;

use newsig_models::article::Article;
use newsig_models::sentiment::ScoredArticle;

use crate::ai::AiClassifier;
use crate::lexicon::Lexicon;

/// Runs both classifiers over one article.
pub struct ArticleScorer {
    lexicon: Arc<Lexicon>,
    ai: AiClassifier,
}

impl ArticleScorer {
    pub fn new(lexicon: Arc<Lexicon>, ai: AiClassifier) -> Self {
        Self { lexicon, ai }
    }

    pub fn ai(&self) -> &AiClassifier {
        &self.ai
    }

    /// Lexicon first, then the AI classifier. Neither can fail, so every
    /// article yields a record, however degenerate its text.
    pub async fn score(&self, article: &Article) -> ScoredArticle {
        let lexicon = self
            .lexicon
            .classify(&format!("{}\n{}", article.title, article.body));
        let ai = self.ai.classify(&article.title, &article.body).await;
        ScoredArticle::new(article, lexicon, ai)
    }
}
