use std::time::Duration;

use async_trait::async_trait;
use newsig_models::config::ClassifierConfig;

use crate::claude_cli::{invoke_claude, ClaudeCliConfig};
use crate::error::ClassifierError;

/// A language-model service that answers one prompt with raw text.
/// Mockable for testing.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifierError>;
}

/// A backend that invokes the Claude CLI.
pub struct ClaudeCliBackend {
    pub cli_config: ClaudeCliConfig,
}

impl ClaudeCliBackend {
    pub fn new(model: String, timeout: Duration, api_key: String) -> Self {
        Self {
            cli_config: ClaudeCliConfig {
                model,
                timeout,
                api_key: Some(api_key),
            },
        }
    }

    pub fn from_config(config: &ClassifierConfig, api_key: String) -> Self {
        Self::new(
            config.model.clone(),
            Duration::from_secs(config.timeout_seconds),
            api_key,
        )
    }
}

#[async_trait]
impl ClassifierBackend for ClaudeCliBackend {
    fn name(&self) -> &str {
        "claude-cli"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifierError> {
        invoke_claude(system_prompt, user_prompt, &self.cli_config).await
    }
}
