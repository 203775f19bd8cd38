use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p class="footer__copy">
                {move || i18n.t("footer.copy")}
                " © "
                <span id="current-year">{year}</span>
            </p>
            <ul class="footer__social" aria-label=move || i18n.t("a11y.social_links")>
                <li class="footer__social-item">
                    <a
                        class="footer__social-link"
                        href="https://github.com/example"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "GitHub"
                    </a>
                </li>
                <li class="footer__social-item">
                    <a
                        class="footer__social-link"
                        href="https://www.linkedin.com/in/example"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "LinkedIn"
                    </a>
                </li>
            </ul>
        </footer>
    }
}
