//! Landing page: the onboarding form, navigating to the dashboard on success.

use dioxus::prelude::*;
use ui::{OnboardingForm, ThemeToggle};

use crate::Route;

#[component]
pub fn Onboarding() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-toolbar",
                ThemeToggle {}
            }
            OnboardingForm {
                on_success: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
