//! Theme management for the site.
//!
//! Dark/light mode with the preference persisted in localStorage. Until
//! the visitor picks a theme explicitly, the OS color-scheme preference
//! decides and scheme changes are followed live.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::announcer::use_announcer;
use crate::shared::i18n::use_i18n;
use crate::shared::icons;

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Value stored in localStorage; also the body class the stylesheets
    /// key off.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// Parse a stored value. Anything but the dark marker means light.
    pub fn from_str(s: &str) -> Self {
        if s == "dark-mode" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Initial theme and whether it came from an explicit stored choice:
    /// stored value first, OS preference otherwise.
    pub fn initial(saved: Option<&str>, prefers_dark: bool) -> (Theme, bool) {
        match saved {
            Some(saved) => (Theme::from_str(saved), true),
            None if prefers_dark => (Theme::Dark, false),
            None => (Theme::Light, false),
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Swap the body classes the stylesheets key off.
fn apply_theme_classes(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.toggle_with_force("dark-mode", theme.is_dark());
    let _ = classes.toggle_with_force("light-mode", !theme.is_dark());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    // Whether the visitor made an explicit choice; system scheme changes
    // are only followed before that.
    pinned: RwSignal<bool>,
}

impl ThemeContext {
    /// Explicit choice: apply, persist, stop following the system.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.pinned.set(true);
        save_theme_to_storage(theme);
        apply_theme_classes(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    fn follow_system(&self, dark: bool) {
        if self.pinned.get_untracked() {
            return;
        }
        let theme = if dark { Theme::Dark } else { Theme::Light };
        self.theme.set(theme);
        apply_theme_classes(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (initial, pinned) = Theme::initial(load_theme_from_storage().as_deref(), prefers_dark());

    // Apply before the first paint to avoid a theme flicker.
    apply_theme_classes(initial);

    let context = ThemeContext {
        theme: RwSignal::new(initial),
        pinned: RwSignal::new(pinned),
    };
    provide_context(context);

    // Follow OS scheme changes until the visitor picks a theme.
    Effect::new(move |_| {
        let Some(mq) = window().and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
        else {
            return;
        };
        let closure = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            context.follow_system(ev.matches());
        }) as Box<dyn FnMut(_)>);
        let _ = mq.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget(); // Keep the listener alive
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button that flips between dark and light mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let i18n = use_i18n();
    let announcer = use_announcer();

    let on_click = move |_| {
        ctx.toggle();
        let key = if ctx.theme.get_untracked().is_dark() {
            "announce.theme_dark"
        } else {
            "announce.theme_light"
        };
        announcer.announce(&i18n.t(key));
    };

    view! {
        <button
            type="button"
            class="header__theme"
            aria-pressed=move || if ctx.theme.get().is_dark() { "true" } else { "false" }
            aria-label=move || {
                if ctx.theme.get().is_dark() {
                    i18n.t("a11y.theme_to_light")
                } else {
                    i18n.t("a11y.theme_to_dark")
                }
            }
            on:click=on_click
        >
            {move || icons::icon(if ctx.theme.get().is_dark() { "sun" } else { "moon" })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins_over_os_preference() {
        assert_eq!(
            Theme::initial(Some("light-mode"), true),
            (Theme::Light, true)
        );
        assert_eq!(
            Theme::initial(Some("dark-mode"), false),
            (Theme::Dark, true)
        );
    }

    #[test]
    fn os_preference_decides_without_a_stored_choice() {
        assert_eq!(Theme::initial(None, true), (Theme::Dark, false));
        assert_eq!(Theme::initial(None, false), (Theme::Light, false));
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
    }
}
