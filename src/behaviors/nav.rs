// Mobile navigation toggle

use web_sys::Document;

use crate::util::{BindError, Listener, by_id, query_all, set_body_overflow};

pub const TOGGLE_ID: &str = "nav-toggle";
pub const MENU_ID: &str = "nav-menu";
pub const LINK_SELECTOR: &str = ".nav__link";

/// Body scroll is locked while the menu covers the page.
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open { "hidden" } else { "" }
}

pub fn bind(document: &Document) -> Result<Vec<Listener>, BindError> {
    let toggle = by_id(document, TOGGLE_ID)?;
    let menu = by_id(document, MENU_ID)?;
    let mut listeners = Vec::new();

    {
        let toggle_c = toggle.clone();
        let menu = menu.clone();
        let document = document.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| {
            let _ = toggle_c.class_list().toggle("active");
            let open = menu.class_list().toggle("open").unwrap_or(false);
            set_body_overflow(&document, body_overflow(open));
        })?);
    }

    for link in query_all(document, LINK_SELECTOR)? {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let document = document.clone();
        listeners.push(Listener::new(&link, "click", move |_| {
            let _ = toggle.class_list().remove_1("active");
            let _ = menu.class_list().remove_1("open");
            set_body_overflow(&document, body_overflow(false));
        })?);
    }
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_locks_only_while_open() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }
}
