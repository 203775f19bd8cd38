//! Qualification section: the tabbed education / courses / experience
//! timeline. This is the instantiation site of the generic tab widget —
//! categories become tabs, their entry lists become panels.

use leptos::html;
use leptos::prelude::*;

use crate::domain::timeline::{self, TimelineCategory, TimelineEntry};
use crate::shared::i18n::use_i18n;
use crate::shared::icons;
use crate::shared::motion;
use crate::shared::tabs::{TabGroup, TabItem};

#[component]
pub fn QualificationSection() -> impl IntoView {
    let i18n = use_i18n();

    let items: Vec<TabItem> = TimelineCategory::ALL
        .iter()
        .map(|&category| {
            let key = category.label_key();
            TabItem::new(
                category.tab_id(),
                Signal::derive(move || i18n.t(key)),
                move || view! { <TimelinePanel category=category /> },
            )
        })
        .collect();

    let format_announcement = Callback::new(move |label: String| {
        i18n.t("a11y.tab_selected").replace("{tab}", &label)
    });

    view! {
        <section id="qualification" class="section qualification" aria-labelledby="qualification-title">
            <h2 id="qualification-title" class="section__title">
                {move || i18n.t("timeline.title")}
            </h2>
            <TabGroup
                label=Signal::derive(move || i18n.t("a11y.timeline_tabs"))
                items=items
                format_announcement=format_announcement
            />
        </section>
    }
}

#[component]
fn TimelinePanel(category: TimelineCategory) -> impl IntoView {
    view! {
        <div class="timeline">
            {timeline::entries(category)
                .iter()
                .enumerate()
                .map(|(index, entry)| view! { <TimelineCard entry=*entry index=index /> })
                .collect_view()}
        </div>
    }
}

/// One timeline entry card, revealed as it scrolls into view.
#[component]
fn TimelineCard(entry: TimelineEntry, index: usize) -> impl IntoView {
    let i18n = use_i18n();
    let node = NodeRef::<html::Article>::new();

    Effect::new(move |_| {
        if let Some(element) = node.get() {
            motion::reveal_on_view(&element, "timeline-item--visible");
        }
    });

    // Cards alternate sides of the center line.
    let side = if index % 2 == 0 {
        "timeline-item--left"
    } else {
        "timeline-item--right"
    };

    view! {
        <article node_ref=node class=format!("timeline-item {side}")>
            <div class="timeline-marker" aria-hidden="true"></div>
            <div class="timeline-content">
                <div class="timeline-content__header">
                    <time class="timeline-date" datetime=entry.period>{entry.period}</time>
                    <span class=format!(
                        "timeline-status timeline-status--{}",
                        entry.status.css_modifier(),
                    )>
                        {move || i18n.t(entry.status.label_key())}
                    </span>
                </div>
                <h3 class="timeline-content__title">{entry.title}</h3>
                <h4 class="timeline-content__subtitle">{entry.institution}</h4>
                <p class="timeline-content__description">{entry.description}</p>
                {(!entry.tags.is_empty())
                    .then(|| {
                        view! {
                            <div class="timeline-tags">
                                {entry
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="timeline-tag">{*tag}</span> })
                                    .collect_view()}
                            </div>
                        }
                    })}
                {entry
                    .certificate_url
                    .map(|url| {
                        view! {
                            <a
                                class="timeline-link"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=move || {
                                    i18n.t("a11y.view_certificate").replace("{title}", entry.title)
                                }
                            >
                                {icons::icon("external-link")}
                                {move || i18n.t("timeline.view_certificate")}
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
