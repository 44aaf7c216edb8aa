//! Response classification
//!
//! Maps raw HTTP responses from the chat completions endpoint into a
//! translation or a typed error. Status codes in `[200, 400)` are success,
//! `[400, 500)` are request errors, everything else is an API failure.

use reqwest::StatusCode;

use crate::data::{TranslateQuery, Translation};
use crate::error::{TranslateError, TranslateResult};

/// Standard reason phrase for a status code
fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Error")
}

/// Classify one HTTP response.
///
/// The error `detail` always carries the raw response body.
pub fn classify(query: &TranslateQuery, status: u16, body: &str) -> TranslateResult<Translation> {
    if (200..400).contains(&status) {
        return extract_translation(query, body);
    }

    let reason = reason_phrase(status);
    let detail = body.to_string();
    if (400..500).contains(&status) {
        Err(TranslateError::Param {
            status,
            reason,
            detail,
        })
    } else {
        Err(TranslateError::Api {
            status,
            reason,
            detail,
        })
    }
}

fn extract_translation(query: &TranslateQuery, body: &str) -> TranslateResult<Translation> {
    let parsed: serde_json::Value =
        serde_json::from_str(body).map_err(|_| TranslateError::MalformedResponse {
            detail: body.to_string(),
        })?;

    let content = parsed["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| TranslateError::MalformedResponse {
            detail: body.to_string(),
        })?;

    Ok(Translation {
        source_language: query.source_language.clone(),
        target_language: query.target_language.clone(),
        paragraphs: vec![content.to_string()],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn query() -> TranslateQuery {
        TranslateQuery::new("hello", "en", "fr")
    }

    // ========== Success Tests ==========

    #[test]
    fn test_success_extracts_single_paragraph() {
        let body = r#"{"choices":[{"message":{"content":"Bonjour"}}]}"#;
        let translation = classify(&query(), 200, body).unwrap();

        assert_eq!(translation.paragraphs, vec!["Bonjour"]);
        assert_eq!(translation.source_language, "en");
        assert_eq!(translation.target_language, "fr");
    }

    #[test]
    fn test_success_ignores_extra_choices() {
        let body = r#"{"choices":[{"message":{"content":"Bonjour"}},{"message":{"content":"Salut"}}]}"#;
        let translation = classify(&query(), 200, body).unwrap();
        assert_eq!(translation.paragraphs, vec!["Bonjour"]);
    }

    // ========== Malformed Body Tests ==========

    #[test]
    fn test_success_status_with_missing_choices() {
        let body = r#"{"object":"chat.completion"}"#;
        let err = classify(&query(), 200, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.detail(), body);
    }

    #[test]
    fn test_success_status_with_non_json_body() {
        let err = classify(&query(), 200, "<html>ok</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_success_status_with_non_string_content() {
        let body = r#"{"choices":[{"message":{"content":42}}]}"#;
        let err = classify(&query(), 200, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    // ========== Client Error Tests ==========

    #[test]
    fn test_404_is_param_error_with_reason_phrase() {
        let body = r#"{"error":{"message":"no such route"}}"#;
        let err = classify(&query(), 404, body).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Param);
        assert!(err.to_string().contains("Not Found"));
        assert_eq!(err.detail(), body);
    }

    #[test]
    fn test_401_is_param_error() {
        let err = classify(&query(), 401, "{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Param);
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_429_is_param_error() {
        let err = classify(&query(), 429, "{}").unwrap_err();
        assert!(err.to_string().contains("Too Many Requests"));
    }

    #[test]
    fn test_418_reason_phrase() {
        let err = classify(&query(), 418, "{}").unwrap_err();
        assert!(err.to_string().contains("I'm a teapot"));
    }

    // ========== Server Error Tests ==========

    #[test]
    fn test_500_is_api_error() {
        let err = classify(&query(), 500, "upstream exploded").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("Internal Server Error"));
        assert_eq!(err.detail(), "upstream exploded");
    }

    #[test]
    fn test_502_is_api_error() {
        let err = classify(&query(), 502, "{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_unrecognized_status_is_api_error() {
        let err = classify(&query(), 599, "{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.to_string().contains("Unknown Error"));
    }
}
