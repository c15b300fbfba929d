use newsig_models::config::LexiconConfig;
use newsig_models::sentiment::{LexiconResult, SentimentLabel};

use crate::error::ClassifierError;

/// Keyword classifier over two fixed, disjoint term sets.
///
/// Matching is plain substring containment on lower-cased text: a term found
/// inside a longer word still counts ("fall" hits "rainfall"). Each term
/// counts at most once per text.
#[derive(Debug, Clone)]
pub struct Lexicon {
    bullish: Vec<String>,
    bearish: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon, lower-casing and de-duplicating terms.
    ///
    /// Fails on blank terms (they would match every text) and on terms that
    /// appear in both sets.
    pub fn new<I, J, S, T>(bullish: I, bearish: J) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let bullish = normalize_terms(bullish, "bullish")?;
        let bearish = normalize_terms(bearish, "bearish")?;

        if let Some(shared) = bullish.iter().find(|t| bearish.contains(t)) {
            return Err(ClassifierError::Config(format!(
                "Term '{shared}' is both bullish and bearish"
            )));
        }

        Ok(Self { bullish, bearish })
    }

    pub fn from_config(config: &LexiconConfig) -> Result<Self, ClassifierError> {
        Self::new(&config.bullish_terms, &config.bearish_terms)
    }

    /// Number of bullish and bearish terms contained in `text`.
    pub fn hits(&self, text: &str) -> (u32, u32) {
        let lowered = text.to_lowercase();
        let count = |terms: &[String]| {
            terms
                .iter()
                .filter(|t| lowered.contains(t.as_str()))
                .count() as u32
        };
        (count(&self.bullish), count(&self.bearish))
    }

    pub fn classify(&self, text: &str) -> LexiconResult {
        let (bullish, bearish) = self.hits(text);

        if bullish > bearish {
            LexiconResult {
                label: SentimentLabel::Bullish,
                strength: bullish,
            }
        } else if bearish > bullish {
            LexiconResult {
                label: SentimentLabel::Bearish,
                strength: bearish,
            }
        } else {
            LexiconResult::neutral()
        }
    }

    pub fn bullish_terms(&self) -> &[String] {
        &self.bullish
    }

    pub fn bearish_terms(&self) -> &[String] {
        &self.bearish
    }
}

fn normalize_terms<I, S>(terms: I, side: &str) -> Result<Vec<String>, ClassifierError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for term in terms {
        let term = term.as_ref().to_lowercase();
        if term.trim().is_empty() {
            return Err(ClassifierError::Config(format!(
                "Blank {side} term in lexicon"
            )));
        }
        if !normalized.contains(&term) {
            normalized.push(term);
        }
    }
    Ok(normalized)
}
