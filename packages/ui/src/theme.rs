//! Light/dark theme stored in `localStorage` and applied as `data-theme` on `<html>`.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaMoon, FaSun};
use crate::Icon;

/// `None` follows the system preference, otherwise `"light"` or `"dark"`.
pub type ThemeSignal = Signal<Option<String>>;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";

/// Keep only the values the stylesheet understands.
pub fn parse_theme(value: &str) -> Option<String> {
    match value {
        "light" | "dark" => Some(value.to_string()),
        _ => None,
    }
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = local_storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| parse_theme(&v));
        apply_theme(stored.as_deref());
        theme.set(stored);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

pub fn apply_theme(value: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(root) = document.document_element() else {
            return;
        };
        let result = match value {
            Some(v) => root.set_attribute("data-theme", v),
            None => root.remove_attribute("data-theme"),
        };
        if let Err(e) = result {
            tracing::warn!("Failed to apply theme: {:?}", e);
        }
        if let Some(storage) = local_storage() {
            let _ = match value {
                Some(v) => storage.set_item(STORAGE_KEY, v),
                None => storage.remove_item(STORAGE_KEY),
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Theme set to {:?}", value);
    }
}

/// Small sun/moon button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let is_dark = theme().as_deref() == Some("dark");

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            class: "theme-toggle",
            aria_label: toggle_label(is_dark),
            onclick: move |_| {
                let next = if is_dark { "light" } else { "dark" };
                apply_theme(Some(next));
                theme.set(Some(next.to_string()));
            },
            if is_dark {
                Icon { icon: FaSun, width: 14, height: 14 }
            } else {
                Icon { icon: FaMoon, width: 14, height: 14 }
            }
        }
    }
}

fn toggle_label(is_dark: bool) -> String {
    if is_dark { "Switch to light theme" } else { "Switch to dark theme" }.to_string()
}
