//! Error taxonomy for setup and board fetches.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Everything that can go wrong between a click and a rendered board.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    /// The trigger element carries no usable game id; no request is sent.
    #[error("trigger has no game id")]
    MissingIdentifier,
    /// The request never produced a response.
    #[error("board request failed: {0}")]
    NetworkFailure(String),
    /// A non-2xx response, only reported when status checks are enabled.
    #[error("board request returned status {0}")]
    HttpStatus(u16),
    /// The body is not JSON or lacks `board_html`.
    #[error("malformed board response: {0}")]
    MalformedResponse(String),
    /// No response arrived within the configured timeout.
    #[error("board request timed out after {0} ms")]
    Timeout(u32),
    /// A required modal element is not on the page.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// The supplied configuration was rejected.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ModalError {
    /// Whether this error comes from a board fetch (as opposed to setup or a
    /// bad trigger). Only fetch errors are subject to the error policy.
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::NetworkFailure(_) | Self::HttpStatus(_) | Self::MalformedResponse(_) | Self::Timeout(_)
        )
    }
}
