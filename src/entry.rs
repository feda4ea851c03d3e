//! JavaScript entry points and the page-level lifecycle.
//!
//! The admin page calls `initBoardModal()` once. Setup waits for the document
//! to be parsed, attaches the listeners and keeps them until
//! `teardownBoardModal()` or page unload.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::ModalConfig;
use crate::dom::{self, AttachedModal};
use crate::error::ModalError;
use crate::lifecycle::{SetupSlot, Stage};

thread_local! {
    static SETUP: RefCell<SetupSlot<AttachedModal>> = const { RefCell::new(SetupSlot::new()) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Attach the board modal to the current document.
///
/// `config_json` optionally overrides [`ModalConfig`] fields. A second call
/// while attached (or pending) is ignored, log level included.
///
/// # Errors
///
/// Returns a JS `Error` for an invalid config or a page without a document.
#[wasm_bindgen(js_name = initBoardModal)]
pub fn init_board_modal(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => ModalConfig::from_json(&json),
        None => Ok(ModalConfig::default()),
    }
    .map_err(to_js_error)?;

    let Some(ticket) = SETUP.with(|slot| slot.borrow_mut().begin()) else {
        log::warn!("board modal: already initialized");
        return Ok(());
    };

    let scheduled = init_logging(&config).and_then(|()| {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ModalError::MissingElement("document".to_owned()))?;
        let setup_document = document.clone();
        dom::when_ready(&document, move || finish_setup(ticket, &setup_document, &config))
    });
    if let Err(err) = scheduled {
        SETUP.with(|slot| slot.borrow_mut().abandon(ticket));
        return Err(to_js_error(err));
    }
    Ok(())
}

/// Detach every listener added by [`init_board_modal`], or cancel a setup
/// still waiting for the page.
#[wasm_bindgen(js_name = teardownBoardModal)]
pub fn teardown_board_modal() {
    match SETUP.with(|slot| slot.borrow_mut().teardown()) {
        Stage::Idle => log::debug!("board modal: teardown with nothing attached"),
        Stage::Pending(ticket) => log::info!("board modal: setup #{ticket} cancelled"),
        Stage::Attached(attached) => drop(attached),
    }
}

/// Whether listeners are currently attached.
#[wasm_bindgen(js_name = isBoardModalAttached)]
pub fn is_board_modal_attached() -> bool {
    SETUP.with(|slot| slot.borrow().attached().is_some())
}

fn finish_setup(ticket: u64, document: &web_sys::Document, config: &ModalConfig) {
    if !SETUP.with(|slot| slot.borrow().owns(ticket)) {
        log::debug!("board modal: setup #{ticket} superseded before the page was ready");
        return;
    }
    match dom::attach(document, config) {
        Ok(attached) => {
            if SETUP.with(|slot| slot.borrow_mut().complete(ticket, attached)).is_err() {
                log::debug!("board modal: setup #{ticket} superseded during attach");
            }
        }
        Err(err) => {
            log::error!("board modal: setup failed: {err}");
            SETUP.with(|slot| slot.borrow_mut().abandon(ticket));
        }
    }
}

fn init_logging(config: &ModalConfig) -> Result<(), ModalError> {
    let level = config.level()?;
    if console_log::init_with_level(level).is_err() {
        // Logger already installed by an earlier init; just move the level.
        log::set_max_level(level.to_level_filter());
    }
    Ok(())
}

fn to_js_error(err: ModalError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
