use newsig_models::sentiment::{AiResult, SentimentLabel, DEFAULT_INSIGHT};
use serde_json::{Map, Value};

use crate::error::ClassifierError;

/// Extract the first JSON object from a string that may contain surrounding text.
///
/// Handles common model response formats:
/// - Clean JSON: `{"score": 0.4}`
/// - Markdown-wrapped: ```json\n{"score": 0.4}\n```
/// - Prose around it: `Sure! {"score": 0.4} Hope this helps.`
///
/// Candidates are taken in text order, so an earlier object always wins over
/// a later fenced block. Non-object JSON (strings, arrays) is never returned.
pub fn extract_json(text: &str) -> Result<String, ClassifierError> {
    let trimmed = text.trim();

    if is_json_object(trimmed) {
        return Ok(trimmed.to_string());
    }

    if let Some(json_str) = extract_first_object(trimmed) {
        return Ok(json_str);
    }

    Err(ClassifierError::Parse(format!(
        "No valid JSON object found in response (length={})",
        text.len()
    )))
}

fn is_json_object(candidate: &str) -> bool {
    serde_json::from_str::<Value>(candidate).is_ok_and(|value| value.is_object())
}

/// Try every `{` in order and return the first balanced span that is a JSON object.
fn extract_first_object(text: &str) -> Option<String> {
    text.char_indices()
        .filter(|&(_, ch)| ch == '{')
        .filter_map(|(start, _)| balanced_object_at(text, start))
        .find(|candidate| is_json_object(candidate))
        .map(str::to_string)
}

/// The balanced `{ ... }` span opening at byte offset `start`, if it closes.
fn balanced_object_at(text: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            '{' if !in_string => {
                depth += 1;
            }
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse an [`AiResult`] from raw backend output.
///
/// Each key falls back to its default when missing or of the wrong type:
/// `score` to 0.0, `label` to NEUTRAL, `insight` to [`DEFAULT_INSIGHT`].
pub fn parse_ai_result(raw: &str) -> Result<AiResult, ClassifierError> {
    let json_str = extract_json(raw)?;
    let value: Value = serde_json::from_str(&json_str)?;
    let object = value.as_object().ok_or_else(|| {
        ClassifierError::Parse(format!("Expected a JSON object, got: {json_str}"))
    })?;

    Ok(AiResult {
        score: object.get("score").and_then(Value::as_f64).unwrap_or(0.0),
        label: string_field(object, "label")
            .unwrap_or_else(|| SentimentLabel::Neutral.as_str().to_string()),
        insight: string_field(object, "insight").unwrap_or_else(|| DEFAULT_INSIGHT.to_string()),
    })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}
