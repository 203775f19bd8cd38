//! Accessible tab/panel widget following the WAI-ARIA tabs pattern.
//!
//! One parameterized component replaces per-section copies: the caller
//! injects the (tab, panel) pairs and optionally the announcer, so several
//! independent groups can live on one page without shared lookups.

pub mod state;

use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::shared::announcer::Announcer;
use crate::shared::dom;
use state::{NavKey, Panel, Tab, TabGroupState};

/// One tab control plus the panel content it exposes.
#[derive(Clone)]
pub struct TabItem {
    pub id: String,
    /// Accessible label; reactive so it can follow the interface language.
    pub label: Signal<String>,
    pub disabled: bool,
    /// Marks the initially active tab. With zero or several marks the
    /// first tab wins.
    pub default: bool,
    pub panel: ViewFn,
}

impl TabItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<Signal<String>>,
        panel: impl Into<ViewFn>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
            default: false,
            panel: panel.into(),
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn panel_id(&self) -> String {
        format!("{}-panel", self.id)
    }
}

/// Accessible tab group: a `role="tablist"` row of buttons plus one
/// `role="tabpanel"` region per tab. Exactly one tab is active at any
/// time; arrows cycle with wrap-around, Home/End jump to the ends, and
/// keyboard activation moves focus along with the selection.
///
/// Configuration problems (no tabs, duplicate ids, dangling panel
/// references) are logged and leave the group inert instead of breaking
/// the page.
#[component]
pub fn TabGroup(
    /// Accessible name of the tablist.
    #[prop(into)]
    label: Signal<String>,
    /// Ordered tabs with their panel content. Order drives arrow cycling.
    items: Vec<TabItem>,
    /// Live region activations are announced through; the group creates
    /// its own when none is supplied.
    #[prop(optional)]
    announcer: Option<Announcer>,
    /// Maps the activated tab's label to the announcement text. Defaults
    /// to the label itself.
    #[prop(optional)]
    format_announcement: Option<Callback<String, String>>,
) -> impl IntoView {
    let defaults: Vec<&TabItem> = items.iter().filter(|item| item.default).collect();
    let default_tab = match defaults.as_slice() {
        [only] => Some(only.id.clone()),
        _ => None,
    };

    let pairs = items
        .iter()
        .map(|item| {
            (
                Tab {
                    id: item.id.clone(),
                    controls_panel_id: item.panel_id(),
                    label: item.label.get_untracked(),
                    disabled: item.disabled,
                },
                Panel {
                    id: item.panel_id(),
                    labelled_by_tab_id: item.id.clone(),
                },
            )
        })
        .collect();

    let state = match TabGroupState::new(pairs, default_tab.as_deref()) {
        Ok(state) => state,
        Err(err) => {
            log::error!(
                "tab group \"{}\": {err}; rendering inert",
                label.get_untracked()
            );
            return inert_view(label, items).into_any();
        }
    };

    let announcer = announcer.unwrap_or_else(|| Announcer::new("tab-announcer", 1000));
    let state = RwSignal::new(state);
    let active = Memo::new(move |_| state.with(|s| s.active_tab_id().map(str::to_string)));

    let labels: Vec<(String, Signal<String>)> = items
        .iter()
        .map(|item| (item.id.clone(), item.label))
        .collect();
    let activate = Callback::new(move |tab_id: String| {
        match state.try_update(|s| s.activate(&tab_id)) {
            Some(Ok(Some(activation))) => {
                // Announce the label as currently displayed, not the one
                // captured at construction.
                let label = labels
                    .iter()
                    .find(|(id, _)| *id == activation.tab_id)
                    .map(|(_, label)| label.get_untracked())
                    .unwrap_or(activation.label);
                let message = match format_announcement {
                    Some(format) => format.run(label),
                    None => label,
                };
                announcer.announce(&message);
            }
            Some(Ok(None)) => {}
            Some(Err(err)) => log::warn!("tab group: {err}; keeping current tab"),
            None => {}
        }
    });

    let tab_buttons = items
        .iter()
        .map(|item| {
            let tab_id = item.id.clone();
            let panel_id = item.panel_id();
            let item_label = item.label;
            let is_active = {
                let tab_id = tab_id.clone();
                Memo::new(move |_| active.get().as_deref() == Some(tab_id.as_str()))
            };
            let on_click = {
                let tab_id = tab_id.clone();
                move |_| activate.run(tab_id.clone())
            };
            let on_keydown = {
                let tab_id = tab_id.clone();
                move |ev: leptos::ev::KeyboardEvent| {
                    let Some(key) = NavKey::from_key(&ev.key()) else {
                        // Unrelated keys keep their default behavior.
                        return;
                    };
                    ev.prevent_default();
                    let target =
                        state.with_untracked(|s| s.key_target(&tab_id, key).map(|t| t.id.clone()));
                    if let Some(target_id) = target {
                        activate.run(target_id.clone());
                        dom::focus_by_id(&target_id);
                    }
                }
            };

            view! {
                <button
                    type="button"
                    id=tab_id
                    role="tab"
                    class="tab-group__tab"
                    class:active=move || is_active.get()
                    aria-selected=move || if is_active.get() { "true" } else { "false" }
                    aria-controls=panel_id
                    aria-disabled=item.disabled.then_some("true")
                    tabindex=move || if is_active.get() { "0" } else { "-1" }
                    on:click=on_click
                    on:keydown=on_keydown
                >
                    {move || item_label.get()}
                </button>
            }
        })
        .collect_view();

    let panels = items
        .iter()
        .map(|item| {
            let panel_id = item.panel_id();
            let tab_id = item.id.clone();
            let is_active = {
                let tab_id = tab_id.clone();
                Memo::new(move |_| active.get().as_deref() == Some(tab_id.as_str()))
            };
            let content = item.panel.clone();

            view! {
                <div
                    id=panel_id
                    role="tabpanel"
                    class="tab-group__panel"
                    class:active=move || is_active.get()
                    aria-labelledby=tab_id
                    aria-hidden=move || if is_active.get() { "false" } else { "true" }
                >
                    {content.run()}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tab-group">
            <div class="tab-group__list" role="tablist" aria-label=move || label.get()>
                {tab_buttons}
            </div>
            {panels}
        </div>
    }
    .into_any()
}

/// Markup-only rendering for a misconfigured group: no active tab, no
/// listeners, every panel hidden.
fn inert_view(label: Signal<String>, items: Vec<TabItem>) -> impl IntoView {
    view! {
        <div class="tab-group tab-group--inert">
            <div class="tab-group__list" role="tablist" aria-label=move || label.get()>
                {items
                    .iter()
                    .map(|item| {
                        let item_label = item.label;
                        view! {
                            <button
                                type="button"
                                id=item.id.clone()
                                role="tab"
                                class="tab-group__tab"
                                aria-selected="false"
                                tabindex="-1"
                            >
                                {move || item_label.get()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div
                            id=item.panel_id()
                            role="tabpanel"
                            class="tab-group__panel"
                            aria-labelledby=item.id.clone()
                            aria-hidden="true"
                        >
                            {item.panel.run()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
