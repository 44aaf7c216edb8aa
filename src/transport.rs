//! HTTP transport seam
//!
//! The adapter performs exactly one POST per translation attempt. The
//! transport is a trait so hosts can route requests through their own HTTP
//! stack and tests can stay off the network; `ReqwestTransport` is the
//! production implementation.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::TranslateResult;
use crate::request::ChatRequest;

/// Raw HTTP response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to perform the outbound POST.
///
/// Implementations map their own failures into `TranslateError`. An error
/// that already carries a kind passes through the orchestrator unchanged;
/// anything unstructured belongs under the unknown kind.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &ChatRequest,
    ) -> TranslateResult<HttpResponse>;
}

/// Production transport backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Request timeout applied to every call
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> TranslateResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &ChatRequest,
    ) -> TranslateResult<HttpResponse> {
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.json(body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(HttpResponse { status, body: text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_builds_client() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_unknown() {
        let transport = ReqwestTransport::new().unwrap();
        let body = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            stream: false,
            messages: vec![],
        };
        // reserved TLD, never resolves
        let result = transport
            .post("https://chat.invalid/v1/chat/completions", &[], &body)
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(!err.detail().is_empty());
    }
}
