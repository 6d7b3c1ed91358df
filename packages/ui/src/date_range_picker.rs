use api::DurationDraft;
use dioxus::prelude::*;

use crate::components::calendar::{format_range, today};
use crate::components::{Calendar, Popover};
use crate::icons::{FaCalendarDays, FaChevronDown};
use crate::Icon;

/// Button showing the picked range; opens a one-month calendar in a popover.
#[component]
pub fn DateRangePicker(value: DurationDraft, on_change: EventHandler<DurationDraft>) -> Element {
    let mut open = use_signal(|| false);
    let label = format_range(&value);
    let trigger_class = if value.from.is_none() {
        "field-frame field-trigger field-trigger--empty"
    } else {
        "field-frame field-trigger"
    };

    rsx! {
        Popover {
            open: open(),
            on_open_change: move |next: bool| open.set(next),
            trigger_class: "{trigger_class}",
            trigger: rsx! {
                Icon { class: "field-icon", icon: FaCalendarDays, width: 18, height: 18 }
                span { class: "field-trigger-label", "{label}" }
                Icon { class: "field-icon", icon: FaChevronDown, width: 14, height: 14 }
            },
            Calendar {
                selected: value,
                min_date: today(),
                on_select: move |range: DurationDraft| {
                    let complete = range.from.is_some() && range.to.is_some();
                    on_change.call(range);
                    if complete {
                        open.set(false);
                    }
                },
            }
        }
    }
}
