use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("failed to register '{event}' listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingElement("window"))
}

pub fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or(DomError::MissingElement("document"))
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::MissingElement("body"))
}

/// Every element matching `selector`; empty when there is nothing to find.
pub fn query_all(selector: &str) -> Vec<Element> {
    let list = match document().map(|doc| doc.query_selector_all(selector)) {
        Ok(Ok(list)) => list,
        _ => {
            log::debug!("No document to query for {}", selector);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Runs `f` on the next animation frame.
pub fn request_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    match window() {
        Ok(window) => {
            if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {:?}", e);
            }
        }
        Err(e) => log::debug!("Skipping animation frame: {}", e),
    }
}

/// A DOM listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        Self::register(target, event, handler, false)
    }

    /// Same as [`EventListener::new`] but tells the browser the handler
    /// never calls `preventDefault`.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        Self::register(target, event, handler, true)
    }

    fn register(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
        passive: bool,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| DomError::Listener {
                event,
                reason: format!("{:?}", e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Logs a failed optional hookup and carries on without it.
pub fn optional<T>(what: &str, result: Result<T, DomError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{} disabled: {}", what, e);
            None
        }
    }
}
