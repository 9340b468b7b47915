// Navbar styling once the page has scrolled

use web_sys::{Document, Window};

use crate::util::{BindError, Listener, by_id};

pub const NAV_ID: &str = "nav";
pub const SCROLLED_CLASS: &str = "nav--scrolled";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn bind(window: &Window, document: &Document, threshold: f64) -> Result<Listener, BindError> {
    let nav = by_id(document, NAV_ID)?;
    let win = window.clone();
    let apply = move || {
        let y = win.scroll_y().unwrap_or(0.0);
        let classes = nav.class_list();
        let _ = if is_scrolled(y, threshold) {
            classes.add_1(SCROLLED_CLASS)
        } else {
            classes.remove_1(SCROLLED_CLASS)
        };
    };
    // a reload can restore a scrolled position before any scroll event
    apply();
    Listener::passive(window, "scroll", move |_| apply())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 60.0));
        assert!(!is_scrolled(60.0, 60.0));
        assert!(is_scrolled(60.5, 60.0));
        assert!(is_scrolled(900.0, 60.0));
    }
}
