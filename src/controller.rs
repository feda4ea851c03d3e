//! Modal core: open/close semantics independent of the browser.
//!
//! The controller talks to the page only through three seams, so the whole
//! click → fetch → render flow runs under native tests:
//!
//! - [`TriggerClick`]: the click on a trigger element (default action + id).
//! - [`BoardSource`]: the asynchronous board fetch.
//! - [`ModalView`]: the content slot and the container's visibility.
//!
//! Opening is split in two. [`ModalController::on_trigger_click`] runs
//! synchronously inside the event handler (so the default action is
//! suppressed before the browser acts on it) and hands back an
//! [`OpenRequest`]. [`ModalController::fetch_and_show`] is the suspended half.
//! No view borrow is held across the fetch, so overlapping opens apply in
//! the order their responses resolve: the last one to resolve wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::{Cell, Ref, RefCell};
use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use crate::config::ErrorPolicy;
use crate::consts::ERROR_CLASS;
use crate::error::ModalError;
use crate::game_id::GameId;
use crate::payload::BoardPayload;

/// The modal container and its content slot.
pub trait ModalView {
    /// Replace the content slot's markup wholesale.
    fn set_content(&mut self, html: &str);
    fn set_visible(&mut self, visible: bool);
}

/// A click on a trigger element.
pub trait TriggerClick {
    fn prevent_default(&self);
    /// Raw value of the trigger's id attribute, if present.
    fn game_id(&self) -> Option<String>;
}

/// Fetches the board fragment for a game.
pub trait BoardSource {
    fn fetch_board(&self, id: &GameId) -> impl Future<Output = Result<BoardPayload, ModalError>>;
}

/// A validated open waiting for its fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenRequest {
    /// Per-controller sequence number, in click order.
    pub seq: u64,
    pub id: GameId,
}

/// How a completed open affected the modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The board fragment was rendered and the modal shown.
    Shown,
    /// The fetch failed and the error was rendered into the modal.
    Surfaced(ModalError),
    /// The fetch failed and the modal was left untouched.
    Swallowed(ModalError),
}

pub struct ModalController<V, S> {
    view: RefCell<V>,
    source: S,
    policy: ErrorPolicy,
    next_seq: Cell<u64>,
    in_flight: Cell<usize>,
}

impl<V: ModalView, S: BoardSource> ModalController<V, S> {
    #[must_use]
    pub fn new(view: V, source: S, policy: ErrorPolicy) -> Self {
        Self {
            view: RefCell::new(view),
            source,
            policy,
            next_seq: Cell::new(0),
            in_flight: Cell::new(0),
        }
    }

    /// Handle a click on a trigger element.
    ///
    /// Always suppresses the click's default action, then reads the game id.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::MissingIdentifier`] when the trigger has no
    /// usable id; no request should be made in that case.
    pub fn on_trigger_click(&self, click: &impl TriggerClick) -> Result<OpenRequest, ModalError> {
        click.prevent_default();
        let id = GameId::from_attribute(click.game_id()).inspect_err(|e| {
            log::warn!("board modal: ignoring click: {e}");
        })?;
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        log::debug!("board modal: open #{seq} for game {id}");
        Ok(OpenRequest { seq, id })
    }

    /// Fetch the board for `request` and apply the result to the view.
    pub async fn fetch_and_show(&self, request: OpenRequest) -> OpenOutcome {
        self.in_flight.set(self.in_flight.get() + 1);
        let result = self.source.fetch_board(&request.id).await;
        self.in_flight.set(self.in_flight.get().saturating_sub(1));

        match result {
            Ok(payload) => {
                log::debug!("board modal: open #{} resolved for game {}", request.seq, request.id);
                let mut view = self.view.borrow_mut();
                view.set_content(&payload.board_html);
                view.set_visible(true);
                OpenOutcome::Shown
            }
            Err(err) if !err.is_fetch_error() => {
                log::error!("board modal: open #{} for game {}: unexpected error: {err}", request.seq, request.id);
                OpenOutcome::Swallowed(err)
            }
            Err(err) => match self.policy {
                ErrorPolicy::Silent => {
                    log::debug!("board modal: open #{} for game {} failed: {err}", request.seq, request.id);
                    OpenOutcome::Swallowed(err)
                }
                ErrorPolicy::Surface => {
                    log::warn!("board modal: open #{} for game {} failed: {err}", request.seq, request.id);
                    let mut view = self.view.borrow_mut();
                    view.set_content(&error_fragment(&err));
                    view.set_visible(true);
                    OpenOutcome::Surfaced(err)
                }
            },
        }
    }

    /// Handle a click on the close control.
    pub fn close(&self) {
        log::debug!("board modal: close");
        self.view.borrow_mut().set_visible(false);
    }

    /// Number of fetches currently awaiting a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    #[must_use]
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    #[must_use]
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }
}

/// Race a board request against `timer`, failing with
/// [`ModalError::Timeout`] if the timer fires first.
pub async fn with_timeout<R, T>(request: R, timer: T, ms: u32) -> Result<BoardPayload, ModalError>
where
    R: Future<Output = Result<BoardPayload, ModalError>>,
    T: Future<Output = ()>,
{
    match select(pin!(request), pin!(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ModalError::Timeout(ms)),
    }
}

/// Markup rendered into the content slot for a surfaced error.
#[must_use]
pub fn error_fragment(err: &ModalError) -> String {
    format!("<p class=\"{ERROR_CLASS}\">{}</p>", escape_html(&err.to_string()))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
