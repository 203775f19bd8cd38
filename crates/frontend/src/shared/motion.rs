//! Motion preference handling and scroll-reveal animation hooks.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_reduce_motion_class(reduce: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force("reduce-motion", reduce);
    }
}

/// Mirror the OS motion preference onto the body as a `reduce-motion`
/// class and keep following changes.
pub fn watch_reduced_motion() {
    let Some(mq) = window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
    else {
        return;
    };
    apply_reduce_motion_class(mq.matches());

    let closure = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
        apply_reduce_motion_class(ev.matches());
    }) as Box<dyn FnMut(_)>);
    let _ = mq.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget(); // Keep the listener alive
}

/// Add `class` to `element` once it scrolls into view; the observer
/// detaches after the first hit. Under reduced motion (or without
/// IntersectionObserver) the class is added immediately.
pub fn reveal_on_view(element: &web_sys::Element, class: &'static str) {
    if prefers_reduced_motion() {
        let _ = element.class_list().add_1(class);
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(class);
                    observer.unobserve(&entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.2));
    options.set_root_margin("0px 0px -50px 0px");

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => {
            log::warn!("scroll reveal unavailable: {err:?}");
            let _ = element.class_list().add_1(class);
        }
    }
}
