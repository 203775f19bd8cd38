use leptos::prelude::*;

use crate::layout::header::mobile_nav::{MobileNav, MobileNavButton};
use crate::shared::i18n::{use_i18n, LangToggle};
use crate::shared::theme::ThemeToggle;

/// Section anchors plus the i18n keys of their labels; shared with the
/// mobile navigation.
pub(super) const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "nav.about"),
    ("#qualification", "nav.qualification"),
    ("#projects", "nav.projects"),
    ("#contact", "nav.contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let nav_open = RwSignal::new(false);

    view! {
        <header class="header">
            <a class="header__logo" href="#hero" aria-label=move || i18n.t("a11y.back_to_top")>
                "dev."
            </a>
            <nav class="header__nav" aria-label=move || i18n.t("a11y.primary_nav")>
                <ul class="header__list">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, key)| {
                            view! {
                                <li class="header__item">
                                    <a class="header__link" href=*href>{move || i18n.t(key)}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="header__actions">
                <ThemeToggle />
                <LangToggle />
                <MobileNavButton open=nav_open />
            </div>
            <MobileNav open=nav_open />
        </header>
    }
}
