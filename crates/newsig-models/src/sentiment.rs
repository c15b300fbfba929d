use std::fmt;

use serde::{Deserialize, Serialize};

use crate::article::Article;

/// Diagnostic insight used when no classifier backend is configured.
pub const OFFLINE_INSIGHT: &str = "IA OFFLINE";
/// Diagnostic insight used when the classifier backend fails or answers garbage.
pub const PARSE_ERROR_INSIGHT: &str = "Erro de Parsing Neural";
/// Insight reported when the backend answers without one.
pub const DEFAULT_INSIGHT: &str = "Análise concluída";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Bullish => "BULLISH",
            SentimentLabel::Bearish => "BEARISH",
            SentimentLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the keyword lexicon for one article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexiconResult {
    pub label: SentimentLabel,
    /// Hit count of the winning side. Always 0 for `Neutral`.
    pub strength: u32,
}

impl LexiconResult {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            strength: 0,
        }
    }
}

/// Outcome of the language-model classifier for one article.
///
/// `score` is meant to sit near [-1, 1] but is passed through unclamped.
/// `label` is whatever the backend said; it is not validated against
/// [`SentimentLabel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiResult {
    pub score: f64,
    pub label: String,
    pub insight: String,
}

impl AiResult {
    /// Fallback result carrying a diagnostic insight.
    pub fn sentinel(insight: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral.as_str().to_string(),
            insight: insight.into(),
        }
    }

    pub fn offline() -> Self {
        Self::sentinel(OFFLINE_INSIGHT)
    }

    pub fn parse_error() -> Self {
        Self::sentinel(PARSE_ERROR_INSIGHT)
    }
}

/// One article with both classifier outputs, flattened for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredArticle {
    pub title: String,
    pub url: String,
    pub lexicon_label: SentimentLabel,
    pub lexicon_strength: u32,
    pub ai_score: f64,
    pub ai_label: String,
    pub ai_insight: String,
}

impl ScoredArticle {
    pub fn new(article: &Article, lexicon: LexiconResult, ai: AiResult) -> Self {
        Self {
            title: article.title.clone(),
            url: article.url.clone(),
            lexicon_label: lexicon.label,
            lexicon_strength: lexicon.strength,
            ai_score: ai.score,
            ai_label: ai.label,
            ai_insight: ai.insight,
        }
    }

    /// True when the AI fields hold a sentinel rather than a model answer.
    pub fn is_ai_fallback(&self) -> bool {
        self.ai_insight == OFFLINE_INSIGHT || self.ai_insight == PARSE_ERROR_INSIGHT
    }
}
