//! Test support module providing a scripted classifier backend.
//!
//! `ScriptedBackend` plays back a queue of canned replies, one per call, and
//! records every prompt it receives so tests can assert on request content
//! and call counts without the Claude CLI.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::ClassifierBackend;
use crate::error::ClassifierError;

/// One canned backend reply.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Raw text as the model would print it.
    Text(String),
    /// Backend error, e.g. a failed CLI call.
    Fail(String),
    Timeout,
    /// Panic inside the backend call.
    Panic,
}

impl ScriptedReply {
    pub fn text(raw: impl Into<String>) -> Self {
        ScriptedReply::Text(raw.into())
    }

    /// A well-formed JSON answer.
    pub fn json(score: f64, label: &str, insight: &str) -> Self {
        ScriptedReply::Text(
            serde_json::json!({
                "score": score,
                "label": label,
                "insight": insight,
            })
            .to_string(),
        )
    }
}

pub struct ScriptedBackend {
    replies: Mutex<VecDeque<ScriptedReply>>,
    /// Used once the queue is empty. `None` makes extra calls fail.
    fallback: Option<ScriptedReply>,
    user_prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: None,
            user_prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answer every call with the same raw text.
    pub fn always(raw: impl Into<String>) -> Self {
        let mut backend = Self::new(vec![]);
        backend.fallback = Some(ScriptedReply::Text(raw.into()));
        backend
    }

    pub fn calls(&self) -> usize {
        self.user_prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn user_prompts(&self) -> Vec<String> {
        self.user_prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    fn next_reply(&self) -> Option<ScriptedReply> {
        let queued = self
            .replies
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        queued.or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl ClassifierBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ClassifierError> {
        if let Ok(mut prompts) = self.user_prompts.lock() {
            prompts.push(user_prompt.to_string());
        }

        match self.next_reply() {
            Some(ScriptedReply::Text(raw)) => Ok(raw),
            Some(ScriptedReply::Fail(msg)) => Err(ClassifierError::Cli(msg)),
            Some(ScriptedReply::Timeout) => Err(ClassifierError::Timeout(45)),
            Some(ScriptedReply::Panic) => panic!("scripted backend panic"),
            None => Err(ClassifierError::Cli("Script exhausted".to_string())),
        }
    }
}
