//! Browser binding: the controller's seams over `web-sys` and `gloo-net`.
//!
//! [`attach`] looks up the modal elements, builds a [`DomController`] and
//! registers one click listener per trigger plus one on the close control.
//! The returned [`AttachedModal`] owns those listeners; dropping it removes
//! them from the page.

use std::future::Future;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent};

use crate::config::ModalConfig;
use crate::consts::{DISPLAY_HIDDEN, DISPLAY_SHOWN};
use crate::controller::{BoardSource, ModalController, ModalView, TriggerClick, with_timeout};
use crate::error::ModalError;
use crate::game_id::GameId;
use crate::payload::{BoardPayload, board_endpoint, check_status};

pub type DomController = ModalController<DomModalView, HttpBoardSource>;

/// The modal container and content slot elements.
pub struct DomModalView {
    container: HtmlElement,
    content: Element,
}

impl ModalView for DomModalView {
    fn set_content(&mut self, html: &str) {
        self.content.set_inner_html(html);
    }

    fn set_visible(&mut self, visible: bool) {
        let display = if visible { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
        if let Err(err) = self.container.style().set_property("display", display) {
            log::warn!("board modal: failed to set display={display}: {err:?}");
        }
    }
}

/// A click on a trigger, paired with the element the listener is bound to.
///
/// The id is read from the bound element rather than `event.target`, so a
/// click landing on a child of the trigger still resolves the right game.
struct ElementClick<'a> {
    event: &'a MouseEvent,
    trigger: &'a Element,
    attribute: &'a str,
}

impl TriggerClick for ElementClick<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn game_id(&self) -> Option<String> {
        self.trigger.get_attribute(self.attribute)
    }
}

/// Fetches board fragments over HTTP.
pub struct HttpBoardSource {
    endpoint_prefix: String,
    require_ok_status: bool,
    timeout_ms: Option<u32>,
}

impl HttpBoardSource {
    #[must_use]
    pub fn from_config(config: &ModalConfig) -> Self {
        Self {
            endpoint_prefix: config.endpoint_prefix.clone(),
            require_ok_status: config.require_ok_status,
            timeout_ms: config.request_timeout_ms,
        }
    }
}

impl BoardSource for HttpBoardSource {
    fn fetch_board(&self, id: &GameId) -> impl Future<Output = Result<BoardPayload, ModalError>> {
        let url = board_endpoint(&self.endpoint_prefix, id);
        let require_ok_status = self.require_ok_status;
        let timeout_ms = self.timeout_ms;
        async move {
            let request = fetch_payload(url, require_ok_status);
            match timeout_ms {
                Some(ms) => with_timeout(request, TimeoutFuture::new(ms), ms).await,
                None => request.await,
            }
        }
    }
}

async fn fetch_payload(url: String, require_ok_status: bool) -> Result<BoardPayload, ModalError> {
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ModalError::NetworkFailure(e.to_string()))?;
    check_status(resp.status(), require_ok_status)?;
    let body = resp
        .text()
        .await
        .map_err(|e| ModalError::NetworkFailure(e.to_string()))?;
    BoardPayload::from_json(&body)
}

struct Listener {
    target: EventTarget,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

/// Listeners registered by [`attach`]. Dropping this detaches them.
pub struct AttachedModal {
    controller: Rc<DomController>,
    listeners: Vec<Listener>,
    triggers: usize,
}

impl AttachedModal {
    #[must_use]
    pub fn controller(&self) -> &Rc<DomController> {
        &self.controller
    }

    /// Number of trigger elements listened to.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers
    }
}

impl Drop for AttachedModal {
    fn drop(&mut self) {
        for listener in &self.listeners {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback("click", listener.callback.as_ref().unchecked_ref())
            {
                log::warn!("board modal: failed to remove click listener: {err:?}");
            }
        }
        log::info!("board modal: detached from {} trigger(s)", self.trigger_count());
    }
}

/// Wire the modal into `document`.
///
/// # Errors
///
/// Returns [`ModalError::MissingElement`] if the container, content slot or
/// close control is absent, and [`ModalError::InvalidConfig`] if the trigger
/// selector is rejected by the browser.
pub fn attach(document: &Document, config: &ModalConfig) -> Result<AttachedModal, ModalError> {
    let container = element_by_id(document, &config.modal_id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ModalError::MissingElement(format!("#{} is not an HTML element", config.modal_id)))?;
    let content = element_by_id(document, &config.content_id)?;
    let close = element_by_id(document, &config.close_id)?;

    let controller = Rc::new(ModalController::new(
        DomModalView { container, content },
        HttpBoardSource::from_config(config),
        config.error_policy,
    ));

    let triggers = document
        .query_selector_all(&config.trigger_selector)
        .map_err(|err| ModalError::InvalidConfig(format!("trigger selector {:?}: {err:?}", config.trigger_selector)))?;
    let attribute: Rc<str> = Rc::from(config.id_attribute.as_str());

    // Built up in place so a failure part-way detaches what was added.
    let mut attached = AttachedModal {
        controller,
        listeners: Vec::with_capacity(triggers.length() as usize + 1),
        triggers: 0,
    };
    for index in 0..triggers.length() {
        let Some(node) = triggers.item(index) else {
            continue;
        };
        let Ok(trigger) = node.dyn_into::<Element>() else {
            continue;
        };
        let listener = open_listener(&attached.controller, trigger, Rc::clone(&attribute))?;
        attached.listeners.push(listener);
        attached.triggers += 1;
    }
    let listener = close_listener(&attached.controller, close)?;
    attached.listeners.push(listener);

    log::info!("board modal: attached to {} trigger(s)", attached.trigger_count());
    Ok(attached)
}

/// Run `setup` once the document has been parsed: immediately if it already
/// has, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns [`ModalError::MissingElement`] if the listener cannot be added.
pub fn when_ready(document: &Document, setup: impl FnOnce() + 'static) -> Result<(), ModalError> {
    if document.ready_state() != "loading" {
        setup();
        return Ok(());
    }
    let callback = Closure::once_into_js(setup);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|err| ModalError::MissingElement(format!("cannot wait for DOMContentLoaded: {err:?}")))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, ModalError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ModalError::MissingElement(format!("#{id}")))
}

fn open_listener(controller: &Rc<DomController>, trigger: Element, attribute: Rc<str>) -> Result<Listener, ModalError> {
    let callback = {
        let controller = Rc::clone(controller);
        let trigger = trigger.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let click = ElementClick { event: &event, trigger: &trigger, attribute: &attribute };
            let Ok(request) = controller.on_trigger_click(&click) else {
                return;
            };
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.fetch_and_show(request).await;
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    listen(trigger.into(), callback)
}

fn close_listener(controller: &Rc<DomController>, close: Element) -> Result<Listener, ModalError> {
    let callback = {
        let controller = Rc::clone(controller);
        Closure::wrap(Box::new(move |_event: MouseEvent| {
            controller.close();
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    listen(close.into(), callback)
}

fn listen(target: EventTarget, callback: Closure<dyn FnMut(MouseEvent)>) -> Result<Listener, ModalError> {
    target
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(|err| ModalError::MissingElement(format!("cannot listen for clicks: {err:?}")))?;
    Ok(Listener { target, callback })
}
