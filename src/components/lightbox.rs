use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Node, TouchEvent, TouchList};
use yew::prelude::*;

use crate::config::{GestureConfig, LightboxConfig};
use crate::model::{GalleryItem, LightboxAction, LightboxState};
use crate::state::{GestureMapper, Response, TouchPoint, ViewTransform};
use crate::util::{self, BindError, Listener, now_ms, query_all, set_body_overflow, set_style};

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub config: LightboxConfig,
    pub gesture: GestureConfig,
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn apply_transform(img: &HtmlElement, t: ViewTransform) {
    set_style(img, "transform", t.to_css().as_deref());
}

/// A click that landed on the backdrop closes the view, unless the image is
/// zoomed (the click is then part of inspecting it) or the page opted out.
fn closes_on_backdrop(enabled: bool, zoomed: bool, outside: bool) -> bool {
    enabled && outside && !zoomed
}

/// Turns every trigger matching `selector` into a gallery entry and makes
/// its click open the lightbox instead of following the link.
fn bind_triggers(
    selector: &str,
    state: &UseReducerHandle<LightboxState>,
) -> Result<Vec<Listener>, BindError> {
    let document = util::document()?;
    let triggers = query_all(&document, selector)?;
    let items = triggers
        .iter()
        .filter_map(|el| {
            let src = el.get_attribute("href")?;
            let caption = el.get_attribute("data-title").or_else(|| {
                el.query_selector("img")
                    .ok()
                    .flatten()
                    .and_then(|img| img.get_attribute("alt"))
                    .filter(|alt| !alt.is_empty())
            });
            Some((el, GalleryItem { src, caption }))
        })
        .collect::<Vec<_>>();

    let mut listeners = Vec::with_capacity(items.len());
    for (index, (el, _)) in items.iter().enumerate() {
        let state = state.clone();
        listeners.push(Listener::new(el, "click", move |e| {
            e.prevent_default();
            state.dispatch(LightboxAction::Open(index));
        })?);
    }
    log::debug!("lightbox: {} gallery items", items.len());
    state.dispatch(LightboxAction::SetItems(
        items.into_iter().map(|(_, item)| item).collect(),
    ));
    Ok(listeners)
}

type Feed = fn(&mut GestureMapper, &TouchEvent) -> Response;

fn touch_handler(
    mapper: &Rc<RefCell<GestureMapper>>,
    img: &HtmlElement,
    feed: Feed,
) -> impl FnMut(Event) + 'static {
    let mapper = mapper.clone();
    let img = img.clone();
    move |e: Event| {
        let Some(te) = e.dyn_ref::<TouchEvent>() else {
            return;
        };
        let r = feed(&mut *mapper.borrow_mut(), te);
        if r.prevent_default {
            e.prevent_default();
        }
        if r.changed {
            apply_transform(&img, mapper.borrow().transform());
        }
    }
}

/// Pinch, pan and double-tap on the image stage. Listeners are non-passive
/// so the mapper can suppress native page zoom.
fn bind_gestures(
    stage: &NodeRef,
    img: &NodeRef,
    mapper: &Rc<RefCell<GestureMapper>>,
) -> Result<Vec<Listener>, BindError> {
    let stage = stage
        .cast::<HtmlElement>()
        .ok_or(BindError::MissingNode("lightbox stage"))?;
    let img = img
        .cast::<HtmlElement>()
        .ok_or(BindError::MissingNode("lightbox image"))?;

    Ok(vec![
        Listener::new(
            &stage,
            "touchstart",
            touch_handler(mapper, &img, |m, e| m.touch_start(&touch_points(&e.touches()))),
        )?,
        Listener::new(
            &stage,
            "touchmove",
            touch_handler(mapper, &img, |m, e| m.touch_move(&touch_points(&e.touches()))),
        )?,
        Listener::new(
            &stage,
            "touchend",
            touch_handler(mapper, &img, |m, e| m.touch_end(e.touches().length() as usize, now_ms())),
        )?,
        Listener::new(&stage, "touchcancel", touch_handler(mapper, &img, |m, _| m.touch_cancel()))?,
    ])
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = {
        let loop_gallery = props.config.loop_gallery;
        use_reducer(move || LightboxState::new(loop_gallery))
    };
    let mapper = {
        let gesture = props.gesture;
        use_mut_ref(move || GestureMapper::new(gesture))
    };
    let overlay_ref = use_node_ref();
    let stage_ref = use_node_ref();
    let img_ref = use_node_ref();

    {
        let state = state.clone();
        use_effect_with(props.config.selector.clone(), move |selector| {
            let listeners = bind_triggers(selector, &state).unwrap_or_else(|err| {
                log::warn!("lightbox triggers not bound: {err}");
                Vec::new()
            });
            move || drop(listeners)
        });
    }

    {
        let mapper = mapper.clone();
        let stage_ref = stage_ref.clone();
        let img_ref = img_ref.clone();
        use_effect_with((), move |_| {
            let listeners = bind_gestures(&stage_ref, &img_ref, &mapper).unwrap_or_else(|err| {
                log::warn!("lightbox gestures not bound: {err}");
                Vec::new()
            });
            move || drop(listeners)
        });
    }

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = util::window().and_then(|w| {
                Listener::new(&w, "keydown", move |e| {
                    let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match e.key().as_str() {
                        "Escape" => state.dispatch(LightboxAction::Close),
                        "ArrowRight" => state.dispatch(LightboxAction::Next),
                        "ArrowLeft" => state.dispatch(LightboxAction::Prev),
                        _ => {}
                    }
                })
            });
            if let Err(err) = &listener {
                log::warn!("lightbox keys not bound: {err}");
            }
            move || drop(listener)
        });
    }

    // Opening, navigating and closing all start from an untransformed image.
    {
        let mapper = mapper.clone();
        let img_ref = img_ref.clone();
        use_effect_with(state.current, move |current| {
            mapper.borrow_mut().reset();
            if let Some(img) = img_ref.cast::<HtmlElement>() {
                apply_transform(&img, ViewTransform::IDENTITY);
            }
            if let Ok(document) = util::document() {
                set_body_overflow(&document, if current.is_some() { "hidden" } else { "" });
            }
            match current {
                Some(i) => log::debug!("lightbox open at {i}"),
                None => log::debug!("lightbox closed"),
            }
            || ()
        });
    }

    let on_backdrop = {
        let state = state.clone();
        let mapper = mapper.clone();
        let overlay_ref = overlay_ref.clone();
        let stage_ref = stage_ref.clone();
        let enabled = props.config.close_on_outside_click;
        Callback::from(move |e: MouseEvent| {
            // event delegation makes current_target the app root, so compare by ref
            let target = e.target();
            let outside = target.is_some()
                && (target == overlay_ref.cast::<Node>().map(EventTarget::from)
                    || target == stage_ref.cast::<Node>().map(EventTarget::from));
            if closes_on_backdrop(enabled, mapper.borrow().is_zoomed(), outside) {
                state.dispatch(LightboxAction::Close);
            }
        })
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Close))
    };
    let on_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Prev))
    };
    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(LightboxAction::Next))
    };

    let item = state.current_item().cloned();
    let open = state.is_open();
    let src = item.as_ref().map(|i| AttrValue::from(i.src.clone()));
    let caption = item.and_then(|i| i.caption);
    let alt = caption.clone().unwrap_or_default();

    html! {
        <div
            ref={overlay_ref}
            class={classes!("lightbox", open.then_some("lightbox--open"))}
            hidden={!open}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop}
        >
            <button class="lightbox__close" aria-label="Close" onclick={on_close}>{"×"}</button>
            if state.has_prev() {
                <button class="lightbox__prev" aria-label="Previous" onclick={on_prev}>{"‹"}</button>
            }
            <div class="lightbox__stage" ref={stage_ref}>
                <img
                    class="lightbox__img"
                    ref={img_ref}
                    src={src}
                    alt={alt}
                />
            </div>
            if state.has_next() {
                <button class="lightbox__next" aria-label="Next" onclick={on_next}>{"›"}</button>
            }
            if let Some(caption) = caption {
                <p class="lightbox__caption">{caption}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_click_closes_only_when_enabled_unzoomed_and_outside() {
        for enabled in [false, true] {
            for zoomed in [false, true] {
                for outside in [false, true] {
                    assert_eq!(
                        closes_on_backdrop(enabled, zoomed, outside),
                        enabled && !zoomed && outside,
                        "enabled={enabled} zoomed={zoomed} outside={outside}"
                    );
                }
            }
        }
    }

    #[test]
    fn zoomed_image_ignores_backdrop_tap() {
        let mut mapper = GestureMapper::new(GestureConfig::default());
        let _ = mapper.touch_end(0, 0.0);
        let _ = mapper.touch_end(0, 100.0);
        assert!(mapper.is_zoomed());
        assert!(!closes_on_backdrop(true, mapper.is_zoomed(), true));
        mapper.reset();
        assert!(closes_on_backdrop(true, mapper.is_zoomed(), true));
    }
}
