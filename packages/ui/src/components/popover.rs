use dioxus::prelude::*;
use dioxus_primitives::popover::{PopoverContent, PopoverRoot, PopoverTrigger};

/// Controlled popover. `trigger` is rendered inside the toggle button.
#[component]
pub fn Popover(
    open: bool,
    on_open_change: EventHandler<bool>,
    #[props(default)] trigger_class: String,
    trigger: Element,
    children: Element,
) -> Element {
    rsx! {
        PopoverRoot {
            class: "popover",
            open: Some(open),
            on_open_change,
            PopoverTrigger {
                class: "popover-trigger {trigger_class}",
                {trigger}
            }
            PopoverContent {
                class: "popover-content",
                {children}
            }
        }
    }
}
