use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Claude CLI error: {0}")]
    Cli(String),

    #[error("Classifier response parse error: {0}")]
    Parse(String),

    #[error("Classifier timed out after {0} seconds")]
    Timeout(u64),

    #[error("Classifier task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
