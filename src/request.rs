//! Outbound request composition
//!
//! Builds the wire-level body and headers for the chat completions endpoint
//! from a query and the host configuration.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::data::{ProviderOptions, TranslateQuery};
use crate::prompt::{generate_prompts, replace_prompt_keywords};

/// Model identifier sent with every request
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Fixed path appended to the normalized endpoint
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+://").unwrap());

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Wire-level request body for the chat completions endpoint.
///
/// Invariant: `messages` holds exactly one system entry followed by exactly
/// one user entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub stream: bool,
    pub messages: Vec<ChatMessage>,
}

/// Compose the request body for one query.
///
/// A non-empty custom template from the configuration replaces the generated
/// user instruction wholesale after keyword substitution. The user message
/// content carries the system instruction as a prefix in addition to the
/// system role entry; both roles deliver it.
pub fn build_request_body(query: &TranslateQuery, options: &ProviderOptions) -> ChatRequest {
    let prompts = generate_prompts(query);

    let custom = options
        .custom_user_prompt
        .as_deref()
        .filter(|template| !template.is_empty())
        .map(|template| replace_prompt_keywords(template, query));

    let user_content = format!("{}{}", prompts.system, custom.unwrap_or(prompts.user));

    ChatRequest {
        model: CHAT_MODEL.to_string(),
        stream: false,
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: prompts.system,
            },
            ChatMessage {
                role: Role::User,
                content: user_content,
            },
        ],
    }
}

/// Headers for the chat completions call
pub fn build_headers(options: &ProviderOptions) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Authorization".to_string(),
            format!("Bearer {}", options.api_key),
        ),
    ]
}

/// Normalize a configured endpoint URL.
///
/// Prefixes `https://` when the URL carries no scheme and strips trailing
/// slashes, leaving a bare scheme separator intact. Applying the function
/// twice yields the same result as applying it once.
pub fn normalize_endpoint(url: &str) -> String {
    let mut normalized = if SCHEME_RE.is_match(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    };

    while normalized.ends_with('/') && !normalized.ends_with("://") {
        normalized.pop();
    }

    normalized
}
