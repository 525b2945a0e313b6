//! Shared HTTP request handling
//!
//! Sends a prepared `RequestBuilder`, logs the exchange and classifies the
//! outcome into [`ClientError`] variants. Each endpoint method builds its own
//! request and picks the parser for its response body.
//!
//! Calls are never retried; a failed call is reported once.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Maximum number of bytes of a body included in log output.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, for logging
    /// * `path` - endpoint path, for logging
    ///
    /// # Returns
    /// * `Ok((status, response_text))` - any status, including non-2xx
    /// * `Err(ClientError::Network)` - no response, or the body could not be read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(StatusCode, String), ClientError> {
        log::debug!("{method_name} {path}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ClientError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("{method_name} {path} -> {status}");

        let response_text = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status, response_text))
    }

    /// Turns a non-2xx status into [`ClientError::Http`].
    ///
    /// The user-facing message is the trimmed body when the backend wrote one
    /// (its errors are plain text), otherwise the canonical reason phrase.
    pub fn ensure_success(status: StatusCode, response_text: &str) -> Result<(), ClientError> {
        if status.is_success() {
            return Ok(());
        }

        let body = response_text.trim();
        let message = if body.is_empty() {
            match status.canonical_reason() {
                Some(reason) => format!("HTTP {} {reason}", status.as_u16()),
                None => format!("HTTP {}", status.as_u16()),
            }
        } else {
            body.to_string()
        };

        let error = ClientError::Http {
            status: status.as_u16(),
            message,
        };
        if error.is_expected() {
            log::warn!("Backend rejected request: {status}");
        } else {
            log::error!("Backend failed: {status}: {}", truncate_for_log(body));
        }
        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// Truncate a body for logging without splitting a UTF-8 sequence.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ensure_success ----

    #[test]
    fn success_statuses_pass() {
        assert!(HttpUtils::ensure_success(StatusCode::OK, "").is_ok());
        assert!(HttpUtils::ensure_success(StatusCode::CREATED, "{}").is_ok());
    }

    #[test]
    fn error_body_becomes_message() {
        let result = HttpUtils::ensure_success(StatusCode::BAD_REQUEST, "bad request\n");
        assert_eq!(
            result,
            Err(ClientError::Http {
                status: 400,
                message: "bad request".into(),
            })
        );
    }

    #[test]
    fn empty_error_body_uses_reason_phrase() {
        let result = HttpUtils::ensure_success(StatusCode::BAD_GATEWAY, "  ");
        assert_eq!(
            result,
            Err(ClientError::Http {
                status: 502,
                message: "HTTP 502 Bad Gateway".into(),
            })
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json("<html>login</html>");
        assert!(
            matches!(&result, Err(ClientError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- truncate_for_log ----

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("hello"), "hello");
    }

    #[test]
    fn long_multibyte_body_truncated_on_char_boundary() {
        let s = "域".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 600 bytes]"));
    }
}
