//! Translation adapter for OpenAI-compatible chat completion APIs
//!
//! This crate turns a chat completion endpoint into a normalized text
//! translation interface: it derives model instructions for a language pair,
//! performs a single HTTP POST and maps the response (or any transport
//! failure) into a typed translation result or error.
//!
//! # Workflow Example
//!
//! ```ignore
//! use llm_translate::{ChatCompletionProvider, ProviderOptions, TranslateQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Configure the provider (scheme is optional in the endpoint)
//!     let options = ProviderOptions::new("sk-...", "api.openai.com");
//!     let provider = ChatCompletionProvider::new(options)?;
//!
//!     // 2. Translate a fragment
//!     let query = TranslateQuery::new("hello", "en", "fr");
//!     let translation = provider.translate(&query).await?;
//!
//!     println!("{}", translation.paragraphs.join("\n"));
//!     Ok(())
//! }
//! ```
//!
//! Hosts with their own HTTP stack implement [`HttpTransport`] and build the
//! provider with [`ChatCompletionProvider::with_transport`]; tests use
//! [`MockTransport`].

pub mod chat_completion;
pub mod data;
pub mod error;
pub mod lang;
pub mod mock;
pub mod prompt;
pub mod request;
pub mod response;
pub mod transport;


// Re-export main types for convenient access
pub use chat_completion::{ChatCompletionProvider, DEFAULT_ENDPOINT};
pub use data::{ProviderOptions, TranslateQuery, Translation};
pub use error::{ErrorKind, TranslateError, TranslateResult};
pub use lang::{display_name, is_supported, supported_languages};
pub use mock::{MockMode, MockTransport, RecordedRequest};
pub use prompt::{PromptPair, generate_prompts, replace_prompt_keywords};
pub use request::{
    CHAT_COMPLETIONS_PATH, CHAT_MODEL, ChatMessage, ChatRequest, Role, build_headers,
    build_request_body, normalize_endpoint,
};
pub use response::classify;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
