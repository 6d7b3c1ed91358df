use dioxus::prelude::*;
use ui::ThemeToggle;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "page",
            div {
                class: "page-toolbar",
                Link { class: "page-back", to: Route::Onboarding {}, "New trip" }
                ThemeToggle {}
            }
            ui::Dashboard {}
        }
    }
}
