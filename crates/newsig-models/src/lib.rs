pub mod article;
pub mod config;
pub mod price;
pub mod report;
pub mod sentiment;
pub mod verdict;

pub use article::Article;
pub use config::{ClassifierConfig, LexiconConfig, NewsigConfig, RefreshConfig};
pub use price::{PricePoint, PriceSample};
pub use report::SignalReport;
pub use sentiment::{AiResult, LexiconResult, ScoredArticle, SentimentLabel};
pub use verdict::{Direction, MarketVerdict};
