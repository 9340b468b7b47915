use super::lightbox::Lightbox;
use crate::behaviors::bind_page;
use crate::config::SiteConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the page does not change its config block after load.
    let config = use_state(SiteConfig::load);

    // Navigation, navbar, reveal and anchor bindings live as long as the app.
    {
        let config = (*config).clone();
        use_effect_with((), move |_| {
            let bindings = bind_page(&config);
            move || drop(bindings)
        });
    }

    html! {
        <Lightbox config={config.lightbox.clone()} gesture={config.gesture} />
    }
}
