use serde::{Deserialize, Serialize};

/// Top-level configuration for newsig. Every section is optional in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsigConfig {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Keyword sets for the lexicon classifier. The two sets must be disjoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconConfig {
    #[serde(default = "default_bullish_terms")]
    pub bullish_terms: Vec<String>,
    #[serde(default = "default_bearish_terms")]
    pub bearish_terms: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            bullish_terms: default_bullish_terms(),
            bearish_terms: default_bearish_terms(),
        }
    }
}

/// Configuration for the language-model classifier backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Set to false to run permanently offline.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    /// Per-article backend timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Article body is cut to this many characters before it is sent.
    #[serde(default = "default_max_body_chars")]
    pub max_body_chars: usize,
    /// Environment variable holding the backend credential. Unset or empty
    /// means the classifier runs offline.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            timeout_seconds: default_timeout(),
            max_body_chars: default_max_body_chars(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshConfig {
    /// Seconds between refresh cycles in watch mode.
    #[serde(default = "default_refresh_interval")]
    pub interval_seconds: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_refresh_interval(),
        }
    }
}

fn to_strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn default_bullish_terms() -> Vec<String> {
    to_strings(&[
        "rally",
        "surge",
        "soar",
        "gain",
        "rise",
        "record high",
        "shortage",
        "deficit",
        "drought",
        "frost",
        "strong demand",
        "upgrade",
    ])
}

fn default_bearish_terms() -> Vec<String> {
    to_strings(&[
        "slump",
        "plunge",
        "drop",
        "fall",
        "decline",
        "surplus",
        "glut",
        "oversupply",
        "bumper crop",
        "weak demand",
        "downgrade",
        "sell-off",
    ])
}

fn default_true() -> bool {
    true
}
fn default_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}
fn default_timeout() -> u64 {
    45
}
fn default_max_body_chars() -> usize {
    2000
}
fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}
fn default_refresh_interval() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_newsig_config() {
        let config = NewsigConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NewsigConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn default_term_sets_are_disjoint() {
        let lexicon = LexiconConfig::default();
        assert!(!lexicon.bullish_terms.is_empty());
        assert!(!lexicon.bearish_terms.is_empty());
        assert!(lexicon
            .bullish_terms
            .iter()
            .all(|t| !lexicon.bearish_terms.contains(t)));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: NewsigConfig = toml::from_str("").unwrap();
        assert_eq!(config, NewsigConfig::default());
        assert_eq!(config.classifier.max_body_chars, 2000);
        assert_eq!(config.refresh.interval_seconds, 300);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
[lexicon]
bullish_terms = ["alta", "geada"]
bearish_terms = ["queda"]

[classifier]
enabled = false
model = "claude-sonnet-4-5-20250929"
timeout_seconds = 20

[refresh]
interval_seconds = 60
"#;

        let config: NewsigConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lexicon.bullish_terms, vec!["alta", "geada"]);
        assert_eq!(config.lexicon.bearish_terms, vec!["queda"]);
        assert!(!config.classifier.enabled);
        assert_eq!(config.classifier.timeout_seconds, 20);
        // Omitted keys fall back to defaults
        assert_eq!(config.classifier.max_body_chars, 2000);
        assert_eq!(config.classifier.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.refresh.interval_seconds, 60);
    }

    #[test]
    fn partial_lexicon_section() {
        let toml_str = r#"
[lexicon]
bearish_terms = ["queda"]
"#;
        let config: NewsigConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lexicon.bullish_terms, default_bullish_terms());
        assert_eq!(config.lexicon.bearish_terms, vec!["queda"]);
    }
}
