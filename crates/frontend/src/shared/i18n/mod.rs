//! Portuguese/English interface language.
//!
//! Texts live in a nested JSON document addressed by dotted keys
//! (`"nav.about"`). The compiled-in copy seeds the table so the first
//! render already has text; a background fetch of the served file then
//! replaces it, so the deployed document can change without a rebuild.

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use crate::shared::announcer::use_announcer;

/// Interface languages. Portuguese is the site default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lang {
    #[default]
    Pt,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Pt => "pt",
            Lang::En => "en",
        }
    }

    /// Parse a stored value or a BCP 47 browser tag ("en-US").
    pub fn from_str(s: &str) -> Self {
        if s.starts_with("en") {
            Lang::En
        } else {
            Lang::Pt
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lang::Pt => Lang::En,
            Lang::En => Lang::Pt,
        }
    }

    /// Label on the switch button: the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Lang::Pt => "EN",
            Lang::En => "PT",
        }
    }

    /// Initial language: stored choice, then browser language, then
    /// Portuguese.
    pub fn initial(saved: Option<&str>, navigator: Option<&str>) -> Self {
        match saved {
            Some(saved) => Lang::from_str(saved),
            None => navigator.map(Lang::from_str).unwrap_or_default(),
        }
    }
}

const LANG_STORAGE_KEY: &str = "lang";
const TRANSLATIONS_URL: &str = "/static/i18n/translations.json";
// Compiled-in copy of the served document.
const EMBEDDED_TRANSLATIONS: &str = include_str!("../../../static/i18n/translations.json");

fn load_lang_from_storage() -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(LANG_STORAGE_KEY)
        .ok()
        .flatten()
}

fn save_lang_to_storage(lang: Lang) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANG_STORAGE_KEY, lang.as_str());
    }
}

fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}

/// Keep the `<html lang>` attribute in step with the interface language.
fn set_document_lang(lang: Lang) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", lang.as_str());
    }
}

/// Walk a dotted path through nested JSON objects.
pub fn lookup<'a>(table: &'a Value, path: &str) -> Option<&'a str> {
    let mut node = table;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

/// I18n context type.
#[derive(Clone, Copy)]
pub struct I18nContext {
    /// Current interface language.
    pub lang: RwSignal<Lang>,
    translations: RwSignal<Value>,
}

impl I18nContext {
    /// Translate a dotted key for the current language. Falls back to the
    /// Portuguese text, then to the key itself so a missing entry stays
    /// visible and greppable.
    pub fn t(&self, key: &str) -> String {
        let lang = self.lang.get();
        self.translations.with(|table| {
            lookup(&table[lang.as_str()], key)
                .or_else(|| lookup(&table[Lang::Pt.as_str()], key))
                .unwrap_or(key)
                .to_string()
        })
    }

    /// Switch the interface language and persist the choice.
    pub fn set_lang(&self, lang: Lang) {
        self.lang.set(lang);
        save_lang_to_storage(lang);
        set_document_lang(lang);
    }
}

/// Provides the i18n context to children components.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let initial = Lang::initial(
        load_lang_from_storage().as_deref(),
        navigator_language().as_deref(),
    );
    set_document_lang(initial);

    let seed = serde_json::from_str::<Value>(EMBEDDED_TRANSLATIONS).unwrap_or_else(|err| {
        log::error!("embedded translations are malformed: {err}");
        Value::Object(serde_json::Map::new())
    });

    let context = I18nContext {
        lang: RwSignal::new(initial),
        translations: RwSignal::new(seed),
    };
    provide_context(context);

    // Refresh from the served document.
    spawn_local(async move {
        match gloo_net::http::Request::get(TRANSLATIONS_URL).send().await {
            Ok(response) => match response.json::<Value>().await {
                Ok(table) if table.is_object() => context.translations.set(table),
                Ok(_) => log::warn!("translations document is not an object; keeping embedded copy"),
                Err(err) => {
                    log::warn!("failed to parse {TRANSLATIONS_URL}: {err}; keeping embedded copy")
                }
            },
            Err(err) => {
                log::warn!("failed to fetch {TRANSLATIONS_URL}: {err}; keeping embedded copy")
            }
        }
    });

    children()
}

/// Hook to use the i18n context.
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Header button that switches the interface language.
#[component]
pub fn LangToggle() -> impl IntoView {
    let i18n = use_i18n();
    let announcer = use_announcer();

    let on_click = move |_| {
        i18n.set_lang(i18n.lang.get_untracked().toggled());
        // Announced in the language just switched to.
        announcer.announce(&i18n.t("announce.lang"));
    };

    view! {
        <button
            type="button"
            class="header__lang"
            aria-label=move || i18n.t("a11y.lang_switch")
            on:click=on_click
        >
            <span class="header__lang-text">{move || i18n.lang.get().toggle_label()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_objects() {
        let table = json!({ "nav": { "about": "Sobre" } });
        assert_eq!(lookup(&table, "nav.about"), Some("Sobre"));
    }

    #[test]
    fn lookup_misses_are_none() {
        let table = json!({ "nav": { "about": "Sobre" } });
        assert_eq!(lookup(&table, "nav.missing"), None);
        assert_eq!(lookup(&table, "missing.about"), None);
        // Intermediate value that is not an object
        assert_eq!(lookup(&table, "nav.about.deeper"), None);
    }

    #[test]
    fn initial_prefers_storage_over_navigator() {
        assert_eq!(Lang::initial(Some("en"), Some("pt-BR")), Lang::En);
        assert_eq!(Lang::initial(None, Some("en-US")), Lang::En);
        assert_eq!(Lang::initial(None, Some("fr")), Lang::Pt);
        assert_eq!(Lang::initial(None, None), Lang::Pt);
    }

    #[test]
    fn embedded_document_has_both_languages() {
        let table: Value = serde_json::from_str(EMBEDDED_TRANSLATIONS).unwrap();
        for lang in ["pt", "en"] {
            assert!(table[lang].is_object(), "missing `{lang}` table");
        }
        for key in [
            "nav.about",
            "hero.title",
            "a11y.tab_selected",
            "announce.theme_dark",
            "contact.err_name_required",
        ] {
            assert!(lookup(&table["pt"], key).is_some(), "missing pt `{key}`");
            assert!(lookup(&table["en"], key).is_some(), "missing en `{key}`");
        }
    }
}
