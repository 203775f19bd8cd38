use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

#[component]
pub fn AboutSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="about" class="section about" aria-labelledby="about-title">
            <h2 id="about-title" class="section__title">{move || i18n.t("about.title")}</h2>
            <p class="about__paragraph">{move || i18n.t("about.body_1")}</p>
            <p class="about__paragraph">{move || i18n.t("about.body_2")}</p>
        </section>
    }
}
