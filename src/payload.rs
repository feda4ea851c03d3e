//! Board fragment endpoint and response schema.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::Deserialize;

use crate::error::ModalError;
use crate::game_id::GameId;

/// Response body of the board fragment endpoint.
///
/// Only `board_html` is required; any other fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BoardPayload {
    /// Pre-rendered board markup, injected verbatim into the content slot.
    pub board_html: String,
}

impl BoardPayload {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::MalformedResponse`] if the body is not JSON or
    /// has no string `board_html` field.
    pub fn from_json(body: &str) -> Result<Self, ModalError> {
        serde_json::from_str(body).map_err(|e| ModalError::MalformedResponse(e.to_string()))
    }
}

/// Gate a response on its HTTP status.
///
/// Without `require_ok` every status passes and the body is parsed as-is.
///
/// # Errors
///
/// Returns [`ModalError::HttpStatus`] for a non-2xx status when `require_ok`
/// is set.
pub fn check_status(status: u16, require_ok: bool) -> Result<(), ModalError> {
    if require_ok && !(200..300).contains(&status) {
        return Err(ModalError::HttpStatus(status));
    }
    Ok(())
}

/// URL of the board fragment for `id`, e.g. `/api/admin/get_board/42/`.
#[must_use]
pub fn board_endpoint(prefix: &str, id: &GameId) -> String {
    format!("{prefix}{id}/")
}
