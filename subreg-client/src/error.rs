use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all dashboard backend calls.
///
/// The `Display` output of every variant is the text shown to the user when a
/// submission fails, so it carries the most specific message available.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The request never produced a response (DNS failure, refused
    /// connection, TLS failure, interrupted body).
    #[error("Network error: {detail}")]
    Network {
        /// Error details from the HTTP stack.
        detail: String,
    },

    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the trimmed response body, or the canonical reason phrase
    /// when the body is empty.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message to surface to the user.
        message: String,
    },

    /// The response body was not the JSON shape the client expects.
    #[error("Invalid response body: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Failed to encode request: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (bad base URL, bad header value).
    #[error("Invalid client configuration: {detail}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（后端拒绝请求等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Http { status, .. } => (400..500).contains(status),
            Self::Network { .. }
            | Self::Parse { .. }
            | Self::Serialization { .. }
            | Self::InvalidConfig { .. } => false,
        }
    }

    /// HTTP status code, when the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_message_verbatim() {
        let e = ClientError::Http {
            status: 400,
            message: "bad request".into(),
        };
        assert_eq!(e.to_string(), "bad request");
    }

    #[test]
    fn client_errors_are_expected() {
        let e = ClientError::Http {
            status: 422,
            message: "invalid".into(),
        };
        assert!(e.is_expected());
        assert_eq!(e.status(), Some(422));
    }

    #[test]
    fn server_and_transport_errors_are_not_expected() {
        let e = ClientError::Http {
            status: 500,
            message: "server error".into(),
        };
        assert!(!e.is_expected());

        let e = ClientError::Network {
            detail: "connection refused".into(),
        };
        assert!(!e.is_expected());
        assert_eq!(e.status(), None);
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::Parse {
            detail: "expected value".into(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Parse");
        assert_eq!(json["detail"], "expected value");
    }
}
