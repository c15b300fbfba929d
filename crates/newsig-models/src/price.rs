use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation from the price feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// The two most recent prices of the reference instrument. Display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceSample {
    pub last: f64,
    pub previous: f64,
}

impl PriceSample {
    /// Take the two most recent points of a series, in timestamp order.
    /// Returns `None` when fewer than two points are available.
    pub fn from_series(points: &[PricePoint]) -> Option<Self> {
        let mut sorted: Vec<&PricePoint> = points.iter().collect();
        sorted.sort_by_key(|p| p.timestamp);

        match sorted.as_slice() {
            [.., previous, last] => Some(Self {
                last: last.price,
                previous: previous.price,
            }),
            _ => None,
        }
    }

    /// Percentage change from `previous` to `last`.
    pub fn change_pct(&self) -> Option<f64> {
        if self.previous == 0.0 {
            return None;
        }
        Some((self.last - self.previous) / self.previous * 100.0)
    }
}
