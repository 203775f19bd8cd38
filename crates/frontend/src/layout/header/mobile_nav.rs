//! Mobile navigation as an accessible dialog: focus trapped while open,
//! Escape closes, page scroll locked, focus handed back to the toggle on
//! close.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::layout::header::header::NAV_LINKS;
use crate::shared::dom;
use crate::shared::i18n::use_i18n;
use crate::shared::icons;

const DIALOG_ID: &str = "mobile-menu";
const TOGGLE_ID: &str = "mobile-menu-toggle";

const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled])";

/// Hamburger button controlling the dialog.
#[component]
pub fn MobileNavButton(open: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            type="button"
            id=TOGGLE_ID
            class="header__bars"
            aria-controls=DIALOG_ID
            aria-expanded=move || if open.get() { "true" } else { "false" }
            aria-label=move || {
                if open.get() {
                    i18n.t("a11y.nav_close")
                } else {
                    i18n.t("a11y.nav_open")
                }
            }
            on:click=move |_| open.update(|value| *value = !*value)
        >
            {move || icons::icon(if open.get() { "close" } else { "menu" })}
        </button>
    }
}

/// The dialog panel itself.
#[component]
pub fn MobileNav(open: RwSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();
    let panel = NodeRef::<html::Nav>::new();

    // Scroll lock and focus hand-off follow the open state.
    Effect::new(move |prev: Option<bool>| {
        let is_open = open.get();
        if prev.is_none() && !is_open {
            return is_open;
        }
        if let Some(body) = dom::document_body() {
            let _ = body
                .style()
                .set_property("overflow-y", if is_open { "hidden" } else { "auto" });
        }
        if is_open {
            // Wait for the open transition before moving focus in.
            spawn_local(async move {
                TimeoutFuture::new(100).await;
                focus_first_link(panel);
            });
        } else if prev.is_some() {
            dom::focus_by_id(TOGGLE_ID);
        }
        is_open
    });

    let close = move || open.set(false);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => close(),
        "Tab" => trap_tab(&ev, panel),
        _ => {}
    };

    view! {
        <nav
            node_ref=panel
            id=DIALOG_ID
            class="mobile-nav"
            class=("mobile-nav--open", move || open.get())
            role="dialog"
            aria-modal="true"
            aria-label=move || i18n.t("a11y.mobile_nav")
            aria-hidden=move || if open.get() { "false" } else { "true" }
            on:keydown=on_keydown
            on:click=move |ev| {
                // A click on the backdrop (the nav element itself) closes.
                if ev.target() == ev.current_target() {
                    close();
                }
            }
        >
            <ul class="mobile-nav__list">
                {NAV_LINKS
                    .iter()
                    .map(|(href, key)| {
                        view! {
                            <li class="mobile-nav__item">
                                <a class="mobile-nav__link" href=*href on:click=move |_| close()>
                                    {move || i18n.t(key)}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

fn focus_first_link(panel: NodeRef<html::Nav>) {
    let Some(panel) = panel.get_untracked() else {
        return;
    };
    let first = panel
        .query_selector(FOCUSABLE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(first) = first {
        let _ = first.focus();
    }
}

/// Keep Tab/Shift+Tab cycling inside the dialog.
fn trap_tab(ev: &leptos::ev::KeyboardEvent, panel: NodeRef<html::Nav>) {
    let Some(panel) = panel.get_untracked() else {
        return;
    };
    let Ok(focusable) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return;
    };
    if focusable.length() == 0 {
        return;
    }
    let first = focusable
        .get(0)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok());
    let last = focusable
        .get(focusable.length() - 1)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok());
    let (Some(first), Some(last)) = (first, last) else {
        return;
    };

    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let at = |el: &web_sys::HtmlElement| active.as_ref() == Some(el.as_ref());

    if ev.shift_key() && at(&first) {
        ev.prevent_default();
        let _ = last.focus();
    } else if !ev.shift_key() && at(&last) {
        ev.prevent_default();
        let _ = first.focus();
    }
}
