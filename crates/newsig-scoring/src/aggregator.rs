use newsig_models::sentiment::ScoredArticle;
use newsig_models::verdict::{Direction, MarketVerdict};

/// Mean AI score must be strictly above this for a BUY.
pub const BUY_THRESHOLD: f64 = 0.1;
/// Mean AI score must be strictly below this for a SELL.
pub const SELL_THRESHOLD: f64 = -0.1;

/// Reduce a cycle's articles to one verdict from their AI scores.
///
/// Lexicon results are display-only and never enter the verdict. An empty
/// cycle has mean 0.0 and is a HOLD.
pub fn aggregate(scored: &[ScoredArticle]) -> MarketVerdict {
    let average_score = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|s| s.ai_score).sum::<f64>() / scored.len() as f64
    };

    MarketVerdict {
        direction: direction_for(average_score),
        average_score,
    }
}

pub fn direction_for(average_score: f64) -> Direction {
    if average_score > BUY_THRESHOLD {
        Direction::Buy
    } else if average_score < SELL_THRESHOLD {
        Direction::Sell
    } else {
        Direction::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsig_models::sentiment::{LexiconResult, SentimentLabel};

    fn scored(ai_score: f64) -> ScoredArticle {
        ScoredArticle {
            title: String::new(),
            url: String::new(),
            lexicon_label: SentimentLabel::Neutral,
            lexicon_strength: 0,
            ai_score,
            ai_label: "NEUTRAL".to_string(),
            ai_insight: String::new(),
        }
    }

    fn verdict_for(scores: &[f64]) -> MarketVerdict {
        let records: Vec<ScoredArticle> = scores.iter().copied().map(scored).collect();
        aggregate(&records)
    }

    #[test]
    fn empty_is_hold_at_zero() {
        let verdict = aggregate(&[]);
        assert_eq!(verdict.direction, Direction::Hold);
        assert_eq!(verdict.average_score, 0.0);
        assert!(!verdict.average_score.is_nan());
    }

    #[test]
    fn positive_mean_buys() {
        let verdict = verdict_for(&[0.5, 0.5]);
        assert_eq!(verdict.direction, Direction::Buy);
        assert_eq!(verdict.average_score, 0.5);
    }

    #[test]
    fn negative_mean_sells() {
        let verdict = verdict_for(&[-0.2, -0.05]);
        assert_eq!(verdict.direction, Direction::Sell);
        assert!((verdict.average_score + 0.125).abs() < 1e-12);
    }

    #[test]
    fn offsetting_scores_hold() {
        let verdict = verdict_for(&[0.05, -0.05]);
        assert_eq!(verdict.direction, Direction::Hold);
        assert_eq!(verdict.average_score, 0.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(direction_for(0.1), Direction::Hold);
        assert_eq!(direction_for(-0.1), Direction::Hold);
        assert_eq!(direction_for(0.100_001), Direction::Buy);
        assert_eq!(direction_for(-0.100_001), Direction::Sell);
    }

    #[test]
    fn unclamped_scores_are_averaged_as_is() {
        let verdict = verdict_for(&[3.0, -1.0]);
        assert_eq!(verdict.average_score, 1.0);
        assert_eq!(verdict.direction, Direction::Buy);
    }

    #[test]
    fn lexicon_is_ignored() {
        let mut strong_bearish = scored(0.5);
        let lexicon = LexiconResult {
            label: SentimentLabel::Bearish,
            strength: 9,
        };
        strong_bearish.lexicon_label = lexicon.label;
        strong_bearish.lexicon_strength = lexicon.strength;

        let verdict = aggregate(&[strong_bearish]);
        assert_eq!(verdict.direction, Direction::Buy);
        assert_eq!(verdict.average_score, 0.5);
    }
}
