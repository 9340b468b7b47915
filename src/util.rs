// DOM helpers shared by the page behaviors and the lightbox

use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Debug)]
pub enum BindError {
    MissingWindow,
    MissingDocument,
    MissingNode(&'static str),
    Js(JsValue),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWindow => write!(f, "no global `window`"),
            Self::MissingDocument => write!(f, "window has no document"),
            Self::MissingNode(what) => write!(f, "`{what}` not found"),
            Self::Js(v) => write!(f, "js error: {v:?}"),
        }
    }
}

impl From<JsValue> for BindError {
    fn from(v: JsValue) -> Self {
        Self::Js(v)
    }
}

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::MissingWindow)
}

pub fn document() -> Result<Document, BindError> {
    window()?.document().ok_or(BindError::MissingDocument)
}

pub fn by_id(document: &Document, id: &'static str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or(BindError::MissingNode(id))
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Sets `overflow` on `<body>`; an empty value restores the stylesheet's.
pub fn set_body_overflow(document: &Document, value: &str) {
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn set_style(el: &HtmlElement, prop: &str, value: Option<&str>) {
    let style = el.style();
    let _ = match value {
        Some(v) => style.set_property(prop, v),
        None => style.remove_property(prop).map(|_| ()),
    };
}

/// Milliseconds since the epoch, for tap timing.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// An event listener that stays registered for as long as the value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Registers with `passive: true`; the handler cannot cancel the event.
    pub fn passive<F>(target: &EventTarget, event: &'static str, f: F) -> Result<Self, BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_node_names_the_node() {
        assert_eq!(
            BindError::MissingNode("nav-toggle").to_string(),
            "`nav-toggle` not found"
        );
    }
}
