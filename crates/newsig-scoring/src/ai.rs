use std::sync::Arc;

use newsig_models::sentiment::AiResult;
use tracing::warn;

use crate::backend::ClassifierBackend;
use crate::error::ClassifierError;
use crate::parser::parse_ai_result;
use crate::prompts::{classifier_system_prompt, classifier_user_prompt};

/// Adapter around the language-model backend.
///
/// [`AiClassifier::classify`] never fails: without a backend it answers the
/// offline sentinel, and any backend, timeout or parse failure becomes the
/// parse-error sentinel. Failed calls are not retried.
pub struct AiClassifier {
    backend: Option<Arc<dyn ClassifierBackend>>,
    system_prompt: Arc<str>,
    max_body_chars: usize,
}

impl AiClassifier {
    pub fn new(backend: Arc<dyn ClassifierBackend>, max_body_chars: usize) -> Self {
        Self {
            backend: Some(backend),
            system_prompt: classifier_system_prompt().into(),
            max_body_chars,
        }
    }

    /// A classifier with no backend configured.
    pub fn offline() -> Self {
        Self {
            backend: None,
            system_prompt: classifier_system_prompt().into(),
            max_body_chars: 0,
        }
    }

    pub fn is_online(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn classify(&self, title: &str, body: &str) -> AiResult {
        let Some(backend) = &self.backend else {
            return AiResult::offline();
        };

        match self.try_classify(backend, title, body).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    backend = backend.name(),
                    title = %title,
                    error = %e,
                    "AI classification failed"
                );
                AiResult::parse_error()
            }
        }
    }

    async fn try_classify(
        &self,
        backend: &Arc<dyn ClassifierBackend>,
        title: &str,
        body: &str,
    ) -> Result<AiResult, ClassifierError> {
        let user_prompt = classifier_user_prompt(title, body, self.max_body_chars);
        let system_prompt = Arc::clone(&self.system_prompt);
        let backend = Arc::clone(backend);

        // Run on its own task so a panicking backend only costs this article.
        let raw =
            tokio::spawn(async move { backend.complete(&system_prompt, &user_prompt).await })
                .await
                .map_err(|e| ClassifierError::Task(e.to_string()))??;

        parse_ai_result(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedBackend, ScriptedReply};
    use newsig_models::sentiment::{OFFLINE_INSIGHT, PARSE_ERROR_INSIGHT};

    fn online(backend: &Arc<ScriptedBackend>) -> AiClassifier {
        AiClassifier::new(Arc::clone(backend) as Arc<dyn ClassifierBackend>, 2000)
    }

    #[tokio::test]
    async fn offline_returns_offline_sentinel() {
        let classifier = AiClassifier::offline();
        assert!(!classifier.is_online());

        let long_body = "y".repeat(5000);
        for (title, body) in [("", ""), ("Frost", "Prices rally"), ("x", long_body.as_str())] {
            let result = classifier.classify(title, body).await;
            assert_eq!(result.score, 0.0);
            assert_eq!(result.label, "NEUTRAL");
            assert_eq!(result.insight, OFFLINE_INSIGHT);
        }
    }

    #[tokio::test]
    async fn parses_backend_answer_with_prose() {
        let backend = Arc::new(ScriptedBackend::always(
            r#"ignore this {"score": -0.5, "label": "BEARISH", "insight": "demand weak"} trailing"#,
        ));
        let result = online(&backend).classify("Demand slows", "body").await;

        assert_eq!(
            result,
            AiResult {
                score: -0.5,
                label: "BEARISH".to_string(),
                insight: "demand weak".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn invalid_json_becomes_parse_error_sentinel() {
        let backend = Arc::new(ScriptedBackend::always("I think prices go up."));
        let result = online(&backend).classify("t", "b").await;
        assert_eq!(result, AiResult::parse_error());
        assert_eq!(result.insight, PARSE_ERROR_INSIGHT);
    }

    #[tokio::test]
    async fn backend_error_becomes_parse_error_sentinel() {
        let backend = Arc::new(ScriptedBackend::new(vec![ScriptedReply::Fail(
            "connection reset".to_string(),
        )]));
        let result = online(&backend).classify("t", "b").await;
        assert_eq!(result, AiResult::parse_error());
    }

    #[tokio::test]
    async fn timeout_becomes_parse_error_sentinel() {
        let backend = Arc::new(ScriptedBackend::new(vec![ScriptedReply::Timeout]));
        let result = online(&backend).classify("t", "b").await;
        assert_eq!(result, AiResult::parse_error());
    }

    #[tokio::test]
    async fn panicking_backend_is_contained() {
        let backend = Arc::new(ScriptedBackend::new(vec![ScriptedReply::Panic]));
        let result = online(&backend).classify("t", "b").await;
        assert_eq!(result, AiResult::parse_error());
    }

    #[tokio::test]
    async fn failures_are_not_retried() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            ScriptedReply::Fail("boom".to_string()),
            ScriptedReply::text(r#"{"score": 0.9}"#),
        ]));
        let classifier = online(&backend);

        assert_eq!(classifier.classify("t", "b").await, AiResult::parse_error());
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn body_is_truncated_before_sending() {
        let backend = Arc::new(ScriptedBackend::always(r#"{"score": 0.1}"#));
        let classifier = AiClassifier::new(Arc::clone(&backend) as Arc<dyn ClassifierBackend>, 10);

        classifier.classify("Title", &"a".repeat(50)).await;

        let prompts = backend.user_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(&"a".repeat(10)));
        assert!(!prompts[0].contains(&"a".repeat(11)));
    }
}
