use leptos::prelude::*;

use crate::shared::components::LazyImage;
use crate::shared::i18n::use_i18n;

#[component]
pub fn HeroSection() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="hero" class="section hero" aria-labelledby="hero-title">
            <div class="hero__text">
                <p class="hero__greeting">{move || i18n.t("hero.greeting")}</p>
                <h1 id="hero-title" class="hero__title">{move || i18n.t("hero.title")}</h1>
                <p class="hero__subtitle">{move || i18n.t("hero.subtitle")}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#contact">
                        {move || i18n.t("hero.cta_contact")}
                    </a>
                    <a class="btn btn--ghost" href="#projects">
                        {move || i18n.t("hero.cta_projects")}
                    </a>
                </div>
            </div>
            <LazyImage
                class="hero__portrait"
                src="/static/img/portrait.webp"
                alt=i18n.t("a11y.portrait_alt")
                width=320
                height=320
            />
        </section>
    }
}
