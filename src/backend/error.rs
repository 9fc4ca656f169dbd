//! Error handling for the backend module

use thiserror::Error;

/// A failed backend request.
///
/// The variants only carry detail for logs; every one of them is shown to the
/// user the same way, as `Error: <message>`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Reqwest error, typically a refused connection or a broken response stream.
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON body did not have the shape the action needs.
    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }

    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Http { status, .. } => Some(*status),
            BackendError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_includes_status_and_body() {
        let err = BackendError::Http {
            status: 422,
            message: "missing file_path".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP error with status 422: missing file_path"
        );
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let err: BackendError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Invalid JSON response"));
        assert_eq!(err.status(), None);
    }
}
