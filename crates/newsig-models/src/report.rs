use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::price::PriceSample;
use crate::sentiment::ScoredArticle;
use crate::verdict::MarketVerdict;

/// Everything the presentation layer needs for one refresh cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Scored articles in source order.
    pub scored: Vec<ScoredArticle>,
    pub verdict: MarketVerdict,
    /// `None` when the price feed was unavailable.
    pub price: Option<PriceSample>,
    pub price_change_pct: Option<f64>,
}

impl SignalReport {
    pub fn new(
        scored: Vec<ScoredArticle>,
        verdict: MarketVerdict,
        price: Option<PriceSample>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            scored,
            verdict,
            price,
            price_change_pct: price.and_then(|p| p.change_pct()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Direction;

    fn hold() -> MarketVerdict {
        MarketVerdict {
            direction: Direction::Hold,
            average_score: 0.0,
        }
    }

    #[test]
    fn report_with_price() {
        let report = SignalReport::new(
            vec![],
            hold(),
            Some(PriceSample {
                last: 102.0,
                previous: 100.0,
            }),
        );
        assert!((report.price_change_pct.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn report_without_price() {
        let report = SignalReport::new(vec![], hold(), None);
        assert!(report.price.is_none());
        assert!(report.price_change_pct.is_none());

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: SignalReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
