use std::fmt;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ClassifierError;

/// Configuration for a Claude CLI invocation.
#[derive(Clone)]
pub struct ClaudeCliConfig {
    pub model: String,
    pub timeout: Duration,
    /// Passed to the child process as `ANTHROPIC_API_KEY` when set.
    pub api_key: Option<String>,
}

impl Default for ClaudeCliConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-haiku-latest".to_string(),
            timeout: Duration::from_secs(45),
            api_key: None,
        }
    }
}

impl fmt::Debug for ClaudeCliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeCliConfig")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Invoke the `claude` CLI with a system prompt and user prompt.
/// Returns the raw stdout text.
pub async fn invoke_claude(
    system_prompt: &str,
    user_prompt: &str,
    config: &ClaudeCliConfig,
) -> Result<String, ClassifierError> {
    debug!(model = %config.model, "Invoking claude CLI");

    let mut command = Command::new("claude");
    command
        .args([
            "-p",
            user_prompt,
            "--system-prompt",
            system_prompt,
            "--model",
            &config.model,
            "--output-format",
            "text",
        ])
        .kill_on_drop(true);
    if let Some(key) = &config.api_key {
        command.env("ANTHROPIC_API_KEY", key);
    }

    let result = tokio::time::timeout(config.timeout, command.output())
        .await
        .map_err(|_| ClassifierError::Timeout(config.timeout.as_secs()))?
        .map_err(|e| ClassifierError::Cli(format!("Failed to spawn claude: {e}")))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        warn!(status = %result.status, stderr = %stderr, "Claude CLI failed");
        return Err(ClassifierError::Cli(format!(
            "claude exited {}: {}",
            result.status, stderr
        )));
    }

    let stdout = String::from_utf8_lossy(&result.stdout).to_string();
    if stdout.trim().is_empty() {
        return Err(ClassifierError::Cli(
            "Claude returned empty response".to_string(),
        ));
    }

    Ok(stdout)
}
