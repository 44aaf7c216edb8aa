//! Core data types shared across the translation pipeline

use serde::{Deserialize, Serialize};

/// A single translation request from the host.
///
/// Queries are immutable inputs; nothing in the pipeline mutates them and
/// none of them outlive one `translate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateQuery {
    /// Text fragment to translate
    pub text: String,
    /// Detected or host-selected source language code
    pub source_language: String,
    /// Target language code, must be in the supported table
    pub target_language: String,
}

impl TranslateQuery {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }
}

/// Normalized success payload delivered to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub source_language: String,
    pub target_language: String,
    /// One entry per output segment, in order
    pub paragraphs: Vec<String>,
}

/// Host supplied configuration, read-only for the adapter
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Endpoint base URL, scheme optional
    pub api_endpoint: String,
    /// Template overriding the generated user instruction; may contain the
    /// `$text`, `$sourceLang` and `$targetLang` placeholders
    #[serde(default)]
    pub custom_user_prompt: Option<String>,
}

impl ProviderOptions {
    pub fn new(api_key: &str, api_endpoint: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_endpoint: api_endpoint.to_string(),
            custom_user_prompt: None,
        }
    }

    pub fn with_custom_prompt(mut self, template: &str) -> Self {
        self.custom_user_prompt = Some(template.to_string());
        self
    }
}

impl std::fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("api_key", &"***")
            .field("api_endpoint", &self.api_endpoint)
            .field("custom_user_prompt", &self.custom_user_prompt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_construction() {
        let query = TranslateQuery::new("hello", "en", "fr");
        assert_eq!(query.text, "hello");
        assert_eq!(query.source_language, "en");
        assert_eq!(query.target_language, "fr");
    }

    #[test]
    fn test_options_builder() {
        let options = ProviderOptions::new("sk-test", "api.openai.com")
            .with_custom_prompt("translate $text");
        assert_eq!(options.api_key, "sk-test");
        assert_eq!(options.custom_user_prompt.as_deref(), Some("translate $text"));
    }

    #[test]
    fn test_options_debug_masks_api_key() {
        let options = ProviderOptions::new("sk-secret", "api.openai.com");
        let debug_str = format!("{:?}", options);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("sk-secret"));
    }

    #[test]
    fn test_options_deserialize_without_custom_prompt() {
        let options: ProviderOptions =
            serde_json::from_str(r#"{"api_key":"k","api_endpoint":"example.com"}"#).unwrap();
        assert_eq!(options.custom_user_prompt, None);
    }
}
