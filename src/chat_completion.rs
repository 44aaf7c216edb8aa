//! Chat completion translation provider
//!
//! Orchestrates one translation attempt: validate the query, derive the
//! prompts, compose the request, perform the POST through the transport and
//! classify the response. Each call is independent; the provider holds no
//! mutable state and can be shared freely across tasks.

use tracing::{debug, info};

use crate::data::{ProviderOptions, TranslateQuery, Translation};
use crate::error::{TranslateError, TranslateResult};
use crate::lang;
use crate::request::{CHAT_COMPLETIONS_PATH, build_headers, build_request_body, normalize_endpoint};
use crate::response::classify;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Public OpenAI endpoint used when no other endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Translation provider backed by an OpenAI-compatible chat completion API
pub struct ChatCompletionProvider<T: HttpTransport = ReqwestTransport> {
    options: ProviderOptions,
    transport: T,
}

impl ChatCompletionProvider<ReqwestTransport> {
    /// Create a provider with the production HTTP transport
    pub fn new(options: ProviderOptions) -> TranslateResult<Self> {
        Ok(Self {
            options,
            transport: ReqwestTransport::new()?,
        })
    }

    /// Create a provider from the `OPENAI_API_KEY` and `OPENAI_API_URL`
    /// environment variables.
    ///
    /// `OPENAI_API_URL` falls back to the public OpenAI endpoint.
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            TranslateError::Configuration {
                message: "请确保您在配置中填入了正确的 API Key".to_string(),
                detail: "OPENAI_API_KEY environment variable not set".to_string(),
            }
        })?;
        let api_endpoint =
            std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Self::new(ProviderOptions {
            api_key,
            api_endpoint,
            custom_user_prompt: None,
        })
    }
}

impl<T: HttpTransport> ChatCompletionProvider<T> {
    /// Create a provider with a caller supplied transport.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let transport = MockTransport::respond_ok(
    ///     r#"{"choices":[{"message":{"content":"Bonjour"}}]}"#,
    /// );
    /// let provider = ChatCompletionProvider::with_transport(options, transport);
    /// ```
    pub fn with_transport(options: ProviderOptions, transport: T) -> Self {
        Self { options, transport }
    }

    /// Translate one text fragment.
    ///
    /// Performs at most one network request. Validation failures return
    /// before the transport is touched, and every call resolves to exactly
    /// one translation or one error.
    pub async fn translate(&self, query: &TranslateQuery) -> TranslateResult<Translation> {
        if !lang::is_supported(&query.target_language) {
            return Err(TranslateError::UnsupportedLanguage {
                code: query.target_language.clone(),
            });
        }
        if self.options.api_endpoint.trim().is_empty() {
            return Err(TranslateError::Configuration {
                message: "请确保您在配置中填入了正确的 API URL".to_string(),
                detail: "请在配置中填写 API URL".to_string(),
            });
        }

        let url = format!(
            "{}{}",
            normalize_endpoint(&self.options.api_endpoint),
            CHAT_COMPLETIONS_PATH
        );
        let headers = build_headers(&self.options);
        let body = build_request_body(query, &self.options);
        debug!(url = %url, model = %body.model, "sending chat completion request");

        let response = self.transport.post(&url, &headers, &body).await?;
        info!(status = response.status, "received chat completion response");

        classify(query, response.status, &response.body)
    }

    /// Every language code the provider accepts, in table order
    pub fn supported_languages(&self) -> Vec<String> {
        lang::supported_languages()
    }

    /// The transport this provider posts through
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> std::fmt::Debug for ChatCompletionProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompletionProvider")
            .field("api_key", &"***")
            .field("api_endpoint", &self.options.api_endpoint)
            .finish()
    }
}
