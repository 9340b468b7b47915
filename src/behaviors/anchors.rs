// Smooth scrolling for in-page anchor links

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::util::{BindError, Listener, query_all};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The selector to scroll to, if `href` names an element. A bare `#` is
/// not a valid selector and keeps the browser default.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

pub fn bind(document: &Document) -> Result<Vec<Listener>, BindError> {
    query_all(document, ANCHOR_SELECTOR)?
        .into_iter()
        .map(|anchor| {
            let link = anchor.clone();
            let document = document.clone();
            Listener::new(&anchor, "click", move |e| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                let Ok(Some(target)) = document.query_selector(selector) else {
                    return;
                };
                e.prevent_default();
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn fragment_is_used_as_selector() {
        assert_eq!(anchor_target("#contact"), Some("#contact"));
        assert_eq!(anchor_target("page.html#x"), None);
    }
}
