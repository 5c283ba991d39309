//! Transport error shared by every backend call.

/// Failure of a single backend request.
///
/// Session resolution folds every variant into "unauthenticated"; forms turn
/// them into notification text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}
