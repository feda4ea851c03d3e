//! Default selectors, element ids and endpoint for the admin board modal.

// ── DOM ─────────────────────────────────────────────────────────

/// Selector matching every element whose click opens the modal.
pub const TRIGGER_SELECTOR: &str = ".show-board";

/// Attribute on a trigger element holding the game id.
pub const ID_ATTRIBUTE: &str = "data-id";

/// Id of the modal container toggled between shown and hidden.
pub const MODAL_ID: &str = "modal";

/// Id of the content slot inside the modal container.
pub const CONTENT_ID: &str = "modal-content";

/// Id of the control that hides the modal.
pub const CLOSE_ID: &str = "modal-close";

/// `display` value for a shown container.
pub const DISPLAY_SHOWN: &str = "block";

/// `display` value for a hidden container.
pub const DISPLAY_HIDDEN: &str = "none";

/// Class on the fragment rendered when errors are surfaced.
pub const ERROR_CLASS: &str = "board-modal__error";

// ── HTTP ────────────────────────────────────────────────────────

/// Path prefix of the board fragment endpoint; the game id and a trailing
/// slash are appended.
pub const ENDPOINT_PREFIX: &str = "/api/admin/get_board/";

// ── Logging ─────────────────────────────────────────────────────

/// Console log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
