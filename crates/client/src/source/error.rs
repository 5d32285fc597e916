//! Remote playbook source error types.

use std::sync::Arc;

/// Errors from a remote playbook source.
///
/// `Status`, `Transport`, and `Decode` all mean the repository is
/// unavailable for this call; `NotFound` means the repository answered but
/// has no such document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    /// Non-success HTTP status other than 404.
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// The requested document does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Network or connection failure.
    #[error("network error: {0}")]
    Transport(Arc<reqwest::Error>),

    /// Response body could not be parsed or decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Whether this error means the remote could not be used at all, as
    /// opposed to answering that the document is absent.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, RemoteError::NotFound(_))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Transport(Arc::new(err))
    }
}

impl From<RemoteError> for advisor_core::Error {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::NotFound(what) => advisor_core::Error::NotFound(what),
            other => advisor_core::Error::RemoteUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemoteError::Status { status: 503 };
        assert!(err.to_string().contains("503"));

        let err = RemoteError::Decode("invalid base64".to_string());
        assert!(err.to_string().contains("decode error"));
    }

    #[test]
    fn test_is_unavailable() {
        assert!(RemoteError::Status { status: 500 }.is_unavailable());
        assert!(RemoteError::Decode("bad".into()).is_unavailable());
        assert!(!RemoteError::NotFound("x".into()).is_unavailable());
    }

    #[test]
    fn test_into_core_error() {
        let err: advisor_core::Error = RemoteError::NotFound("s3_public_access".into()).into();
        assert!(matches!(err, advisor_core::Error::NotFound(_)));

        let err: advisor_core::Error = RemoteError::Status { status: 502 }.into();
        assert!(matches!(err, advisor_core::Error::RemoteUnavailable(_)));
    }
}
