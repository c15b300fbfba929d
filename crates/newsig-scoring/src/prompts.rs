/// Shape of the answer the classifier must return.
fn response_schema() -> String {
    let example = serde_json::json!({
        "score": -0.35,
        "label": "BEARISH",
        "insight": "<one sentence on why>"
    });
    serde_json::to_string_pretty(&example).unwrap_or_default()
}

pub fn classifier_system_prompt() -> String {
    format!(
        "You are a commodity market sentiment classifier. You read one news article and \
         judge whether it points to higher or lower prices for the commodity.\n\n\
         ## SCORING\n\n\
         - `score`: a number from -1.0 (strongly bearish) to 1.0 (strongly bullish). \
         Use values near 0.0 when the article is irrelevant or mixed.\n\
         - `label`: exactly one of \"BULLISH\", \"BEARISH\" or \"NEUTRAL\", consistent with the score.\n\
         - `insight`: one short sentence naming the driver (weather, demand, stocks, policy, currency).\n\n\
         Supply shocks (drought, frost, export bans, low inventories) are bullish. \
         Supply gluts, bumper harvests, demand destruction and a strong dollar are bearish.\n\n\
         ## OUTPUT FORMAT\n\n\
         Respond with ONLY a strict JSON object, no prose and no markdown:\n\n{}",
        response_schema()
    )
}

/// Build the per-article prompt. The body is cut to `max_body_chars` characters.
pub fn classifier_user_prompt(title: &str, body: &str, max_body_chars: usize) -> String {
    format!(
        "TITLE: {title}\n\nBODY:\n{}\n\nReturn the JSON object now.",
        truncate_chars(body, max_body_chars)
    )
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => &text[..byte_offset],
        None => text,
    }
}
