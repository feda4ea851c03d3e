//! Controller configuration.
//!
//! Every field has a default matching the admin page's markup, so an empty
//! JSON object (or no config at all) reproduces the stock behavior. The host
//! page may pass a JSON string to `initBoardModal` to override any of them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts;
use crate::error::ModalError;

/// What an open does when its fetch fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Swallow the error; the modal is neither updated nor shown.
    #[default]
    Silent,
    /// Render an error fragment into the content slot and show the modal.
    Surface,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalConfig {
    pub trigger_selector: String,
    pub id_attribute: String,
    pub modal_id: String,
    pub content_id: String,
    pub close_id: String,
    pub endpoint_prefix: String,
    pub error_policy: ErrorPolicy,
    /// Treat non-2xx responses as errors instead of parsing their body.
    pub require_ok_status: bool,
    /// Give up on a fetch after this many milliseconds. `None` waits forever.
    pub request_timeout_ms: Option<u32>,
    pub log_level: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            trigger_selector: consts::TRIGGER_SELECTOR.to_owned(),
            id_attribute: consts::ID_ATTRIBUTE.to_owned(),
            modal_id: consts::MODAL_ID.to_owned(),
            content_id: consts::CONTENT_ID.to_owned(),
            close_id: consts::CLOSE_ID.to_owned(),
            endpoint_prefix: consts::ENDPOINT_PREFIX.to_owned(),
            error_policy: ErrorPolicy::default(),
            require_ok_status: false,
            request_timeout_ms: None,
            log_level: consts::DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ModalConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidConfig`] for unparseable JSON, unknown
    /// fields, or values rejected by [`ModalConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ModalError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ModalError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that selectors and ids are usable and the log level is known.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ModalError> {
        let required = [
            ("trigger_selector", &self.trigger_selector),
            ("id_attribute", &self.id_attribute),
            ("modal_id", &self.modal_id),
            ("content_id", &self.content_id),
            ("close_id", &self.close_id),
            ("endpoint_prefix", &self.endpoint_prefix),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ModalError::InvalidConfig(format!("{name} must not be empty")));
        }
        if !self.endpoint_prefix.ends_with('/') {
            return Err(ModalError::InvalidConfig("endpoint_prefix must end with '/'".to_owned()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ModalError::InvalidConfig("request_timeout_ms must be positive".to_owned()));
        }
        self.level()?;
        Ok(())
    }

    /// Console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::InvalidConfig`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, ModalError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ModalError::InvalidConfig(format!("unknown log level: {}", self.log_level)))
    }
}
