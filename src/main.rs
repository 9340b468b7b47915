use web_sys::Element;

mod behaviors;
mod components;
mod config;
mod model;
mod state;
mod util;

use components::App;
use util::BindError;

/// Host element for the lightbox overlay; created when the page has none.
const MOUNT_ID: &str = "site-app";

fn mount_point() -> Result<Element, BindError> {
    let document = util::document()?;
    if let Some(el) = document.get_element_by_id(MOUNT_ID) {
        return Ok(el);
    }
    let el = document.create_element("div")?;
    el.set_id(MOUNT_ID);
    document
        .body()
        .ok_or(BindError::MissingNode("body"))?
        .append_child(&el)?;
    Ok(el)
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    match mount_point() {
        Ok(root) => {
            log::info!("mounting site interactions on #{MOUNT_ID}");
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(err) => log::warn!("site interactions disabled: {err}"),
    }
}
