use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
            Direction::Hold => "HOLD",
        })
    }
}

/// The aggregate market call for one refresh cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarketVerdict {
    pub direction: Direction,
    /// Mean AI score across the cycle's articles (0.0 when there were none).
    pub average_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serialization() {
        assert_eq!(serde_json::to_string(&Direction::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Direction::Sell).unwrap(), "\"SELL\"");
        assert_eq!(Direction::Hold.to_string(), "HOLD");
    }

    #[test]
    fn verdict_json_shape() {
        let verdict = MarketVerdict {
            direction: Direction::Hold,
            average_score: 0.0,
        };
        let value = serde_json::to_value(verdict).unwrap();
        assert_eq!(value["direction"], "HOLD");
        assert_eq!(value["average_score"], 0.0);
    }
}
