pub mod aggregator;
pub mod ai;
pub mod backend;
pub mod claude_cli;
pub mod error;
pub mod lexicon;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod scorer;

pub mod test_support;

pub use aggregator::{aggregate, BUY_THRESHOLD, SELL_THRESHOLD};
pub use ai::AiClassifier;
pub use backend::{ClassifierBackend, ClaudeCliBackend};
pub use error::ClassifierError;
pub use lexicon::Lexicon;
pub use pipeline::{Pipeline, PipelineOutput};
pub use scorer::ArticleScorer;
