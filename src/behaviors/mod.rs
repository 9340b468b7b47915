// Page bindings on the existing markup; a missing node only disables its own behavior

pub mod anchors;
pub mod nav;
pub mod reveal;
pub mod scroll;

use crate::config::SiteConfig;
use crate::util::{self, BindError, Listener};

/// Everything registered on the page. Dropping it unregisters all of it.
pub struct PageBindings {
    _listeners: Vec<Listener>,
    _reveal: Option<reveal::Reveal>,
}

fn keep<T>(name: &str, res: Result<T, BindError>) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(err) => {
            log::warn!("skipping {name}: {err}");
            None
        }
    }
}

pub fn bind_page(cfg: &SiteConfig) -> PageBindings {
    let mut listeners = Vec::new();
    let mut observer = None;
    let (window, document) = match (util::window(), util::document()) {
        (Ok(w), Ok(d)) => (w, d),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("no page to bind: {err}");
            return PageBindings {
                _listeners: listeners,
                _reveal: observer,
            };
        }
    };

    if let Some(ls) = keep("mobile nav", nav::bind(&document)) {
        listeners.extend(ls);
    }
    if let Some(l) = keep(
        "navbar scroll",
        scroll::bind(&window, &document, cfg.nav.scroll_threshold),
    ) {
        listeners.push(l);
    }
    if let Some(r) = keep("scroll reveal", reveal::bind(&document, &cfg.reveal)) {
        observer = Some(r);
    }
    if let Some(ls) = keep("anchor scroll", anchors::bind(&document)) {
        listeners.extend(ls);
    }
    log::info!("page bindings ready ({} listeners)", listeners.len());

    PageBindings {
        _listeners: listeners,
        _reveal: observer,
    }
}
