//! Error types for the translation adapter

use thiserror::Error;

/// Broad error category reported to host applications.
///
/// Hosts group failures by kind when deciding what to show the user, so the
/// taxonomy is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Target language code is not in the supported table
    UnsupportedLanguage,
    /// API key or endpoint missing from the configuration
    SecretKey,
    /// The API rejected the request (HTTP 4xx)
    Param,
    /// The API failed to serve the request (HTTP 5xx or unrecognized status)
    Api,
    /// Success status but the body did not contain a translation
    MalformedResponse,
    /// Transport level failure with no structured information
    Unknown,
}

/// Failure of a single translation attempt.
///
/// The `Display` text is the short, host-language message shown to the user;
/// `detail` carries the raw response body or exception text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("不支持该语种")]
    UnsupportedLanguage { code: String },

    #[error("配置错误 - {message}")]
    Configuration { message: String, detail: String },

    #[error("接口响应错误 - {reason}")]
    Param {
        status: u16,
        reason: &'static str,
        detail: String,
    },

    #[error("接口响应错误 - {reason}")]
    Api {
        status: u16,
        reason: &'static str,
        detail: String,
    },

    #[error("接口返回数据格式异常")]
    MalformedResponse { detail: String },

    #[error("{message}")]
    Unknown { message: String, detail: String },
}

impl TranslateError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::UnsupportedLanguage { .. } => ErrorKind::UnsupportedLanguage,
            TranslateError::Configuration { .. } => ErrorKind::SecretKey,
            TranslateError::Param { .. } => ErrorKind::Param,
            TranslateError::Api { .. } => ErrorKind::Api,
            TranslateError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            TranslateError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// Diagnostic payload accompanying the short message
    pub fn detail(&self) -> &str {
        match self {
            TranslateError::UnsupportedLanguage { code } => code,
            TranslateError::Configuration { detail, .. } => detail,
            TranslateError::Param { detail, .. } => detail,
            TranslateError::Api { detail, .. } => detail,
            TranslateError::MalformedResponse { detail } => detail,
            TranslateError::Unknown { detail, .. } => detail,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Unknown {
            message: "未知错误".to_string(),
            detail: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
