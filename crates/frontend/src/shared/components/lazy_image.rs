//! Deferred image loading.
//!
//! Images render without `src`; an IntersectionObserver assigns it once
//! the element approaches the viewport, and CSS classes track the
//! loading/loaded/error states.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const LOADING_CLASS: &str = "lazy-loading";
const LOADED_CLASS: &str = "lazy-loaded";
const ERROR_CLASS: &str = "lazy-error";
const ERROR_ALT: &str = "Image failed to load. Please refresh the page.";

// Start loading slightly before the image scrolls in.
const ROOT_MARGIN: &str = "50px 0px";
const THRESHOLD: f64 = 0.01;

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Move the URL from `data-src` into `src`, kicking off the browser load.
fn start_load(img: &web_sys::HtmlImageElement) {
    let Some(src) = img.get_attribute("data-src") else {
        log::warn!("lazy image without a data-src attribute");
        return;
    };
    let _ = img.class_list().add_1(LOADING_CLASS);
    img.set_src(&src);
    let _ = img.remove_attribute("data-src");
}

/// Image that stays empty until it nears the viewport. Browsers without
/// IntersectionObserver load it immediately.
#[component]
pub fn LazyImage(
    /// Real image URL, assigned when the element nears the viewport.
    #[prop(into)]
    src: String,
    /// Alternative text; replaced by an error description if loading fails.
    #[prop(into)]
    alt: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Intrinsic width, to reserve layout space
    #[prop(optional)]
    width: Option<u32>,
    /// Intrinsic height, to reserve layout space
    #[prop(optional)]
    height: Option<u32>,
) -> impl IntoView {
    let node = NodeRef::<html::Img>::new();

    Effect::new(move |_| {
        let Some(img) = node.get() else {
            return;
        };

        if !observer_supported() {
            start_load(&img);
            return;
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(img) = entry.target().dyn_into::<web_sys::HtmlImageElement>() {
                        observer.unobserve(&img);
                        start_load(&img);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(THRESHOLD));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&img);
                callback.forget();
            }
            Err(err) => {
                log::warn!("lazy image observer failed: {err:?}");
                start_load(&img);
            }
        }
    });

    view! {
        <img
            node_ref=node
            data-src=src
            alt=alt
            class=move || format!("lazy-image {}", class.get().unwrap_or_default())
            loading="lazy"
            width=width.map(|w| w.to_string())
            height=height.map(|h| h.to_string())
            on:load=move |_| {
                if let Some(img) = node.get_untracked() {
                    let classes = img.class_list();
                    let _ = classes.remove_1(LOADING_CLASS);
                    let _ = classes.add_1(LOADED_CLASS);
                    let _ = img.remove_attribute("loading");
                }
            }
            on:error=move |_| {
                if let Some(img) = node.get_untracked() {
                    let classes = img.class_list();
                    let _ = classes.remove_1(LOADING_CLASS);
                    let _ = classes.add_1(ERROR_CLASS);
                    img.set_alt(ERROR_ALT);
                }
            }
        />
    }
}
