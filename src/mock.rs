//! Mock transport for testing
//!
//! Deterministic, network-free stand-in for the HTTP transport. Every
//! outbound request is recorded so tests can assert on composed bodies and
//! count network attempts.
//!
//! # Example
//!
//! ```ignore
//! use llm_translate::{MockMode, MockTransport};
//!
//! let transport = MockTransport::respond_ok(
//!     r#"{"choices":[{"message":{"content":"Bonjour"}}]}"#,
//! );
//! ```

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::{TranslateError, TranslateResult};
use crate::request::ChatRequest;
use crate::transport::{HttpResponse, HttpTransport};

/// Scripted transport behaviors
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Answer every call with a fixed status and body
    Respond { status: u16, body: String },
    /// Fail at the transport level with an unstructured message
    Disconnect(String),
    /// Fail with an already typed error, passed through unchanged
    Fail(TranslateError),
}

/// One recorded outbound request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: ChatRequest,
}

/// Mock implementation of `HttpTransport`
pub struct MockTransport {
    mode: MockMode,
    /// Simulated network delay in milliseconds
    delay_ms: u64,
    calls: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Convenience constructor for a 200 response with the given body
    pub fn respond_ok(body: &str) -> Self {
        Self::new(MockMode::Respond {
            status: 200,
            body: body.to_string(),
        })
    }

    /// Create a mock with a simulated per-call delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::new(mode)
        }
    }

    /// Number of POST calls performed so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request seen, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock request log poisoned").clone()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &ChatRequest,
    ) -> TranslateResult<HttpResponse> {
        self.apply_delay().await;

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.to_vec(),
                body: body.clone(),
            });

        match &self.mode {
            MockMode::Respond { status, body } => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            MockMode::Disconnect(message) => Err(TranslateError::Unknown {
                message: "未知错误".to_string(),
                detail: message.clone(),
            }),
            MockMode::Fail(error) => Err(error.clone()),
        }
    }
}
