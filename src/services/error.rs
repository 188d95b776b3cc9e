// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::Deserialize;

/// Shown when a failed response carries no usable `message`
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
/// Shown when a 2xx response body is not the expected JSON
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from backend";

/// Failure of a call to the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The backend could not be reached, answered with a non-success status,
    /// or sent a body that could not be parsed. `status` is `None` when no
    /// HTTP response was received.
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },
    /// The caller cancelled the request; not a failure to report to users
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ClientError {
    /// Build the error for a non-success response, taking the message from a
    /// `{"message": "..."}` body when there is one
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        ClientError::Transport {
            message,
            status: Some(status),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { status, .. } => *status,
            ClientError::Cancelled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_taken_from_body() {
        let error = ClientError::from_response(404, r#"{"message":"not found"}"#);
        assert_eq!(error.to_string(), "not found");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_non_json_body_uses_fallback() {
        let error = ClientError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(error.to_string(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_body_without_message_uses_fallback() {
        let error = ClientError::from_response(500, r#"{"error":"boom"}"#);
        assert_eq!(error.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_string_message_uses_fallback() {
        let error = ClientError::from_response(500, r#"{"message": 12}"#);
        assert_eq!(error.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_blank_message_uses_fallback() {
        let error = ClientError::from_response(400, r#"{"message": "  "}"#);
        assert_eq!(error.to_string(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_cancelled_is_distinguishable() {
        assert!(ClientError::Cancelled.is_cancelled());
        assert!(!ClientError::from_response(500, "").is_cancelled());
        assert_eq!(ClientError::Cancelled.status(), None);
    }
}
