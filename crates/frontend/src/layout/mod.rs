pub mod footer;
pub mod header;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::i18n::use_i18n;
use footer::Footer;
use header::Header;

/// Single-page shell.
///
/// ```text
/// +------------------------------------------+
/// |  skip link (visually hidden until focus) |
/// |  Header (nav, theme/lang, mobile menu)   |
/// +------------------------------------------+
/// |  main#main-content  <- children          |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <SkipLink />
        <Header />
        <main id="main-content" class="main">
            {children()}
        </main>
        <Footer />
    }
}

/// "Skip to content" link for keyboard users. Focuses the main landmark,
/// then drops the temporary tabindex once focus moves on.
#[component]
fn SkipLink() -> impl IntoView {
    let i18n = use_i18n();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let main = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main-content"));
        let Some(main) = main else {
            return;
        };
        let _ = main.set_attribute("tabindex", "-1");
        if let Some(focusable) = main.dyn_ref::<web_sys::HtmlElement>() {
            let _ = focusable.focus();
        }
        let target = main.clone();
        let on_blur = Closure::once_into_js(move || {
            let _ = target.remove_attribute("tabindex");
        });
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        let _ = main.add_event_listener_with_callback_and_add_event_listener_options(
            "blur",
            on_blur.unchecked_ref(),
            &options,
        );
    };

    view! {
        <a class="skip-link" href="#main-content" on:click=on_click>
            {move || i18n.t("a11y.skip_to_content")}
        </a>
    }
}
