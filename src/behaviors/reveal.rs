// Scroll-reveal: elements fade in the first time they enter the viewport

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::util::{BindError, query_all};

pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "revealed";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer alive; disconnects it on drop.
pub struct Reveal {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn reveal(el: &Element) {
    let _ = el.class_list().add_1(REVEALED_CLASS);
}

pub fn bind(document: &Document, cfg: &RevealConfig) -> Result<Reveal, BindError> {
    let elements = query_all(document, &cfg.selector)?;
    for el in &elements {
        let _ = el.class_list().add_1(REVEAL_CLASS);
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
            log::debug!("observing {} reveal targets", elements.len());
            Ok(Reveal {
                observer: Some(observer),
                _callback: Some(callback),
            })
        }
        Err(err) => {
            // no observer support: show everything rather than leave it hidden
            log::warn!("IntersectionObserver unavailable ({err:?}), revealing all");
            elements.iter().for_each(reveal);
            Ok(Reveal {
                observer: None,
                _callback: None,
            })
        }
    }
}
