use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A news article as handed over by the article source.
///
/// Missing, `null` or non-string fields deserialize as empty strings so a
/// sloppy source never rejects a whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: url.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientField {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match LenientField::deserialize(deserializer)? {
        LenientField::Text(s) => Ok(s),
        LenientField::Other(_) => Ok(String::new()),
    }
}
