use api::TravelType;
use dioxus::prelude::*;
use dioxus_primitives::radio_group::{RadioGroup, RadioItem};

use crate::icons::{FaHeart, FaHouse, FaUser, FaUserGroup};
use crate::Icon;

#[component]
fn TravelTypeIcon(value: TravelType) -> Element {
    match value {
        TravelType::Solo => rsx! { Icon { class: "field-icon", icon: FaUser, width: 18, height: 18 } },
        TravelType::Couple => rsx! { Icon { class: "field-icon", icon: FaHeart, width: 18, height: 18 } },
        TravelType::Family => rsx! { Icon { class: "field-icon", icon: FaHouse, width: 18, height: 18 } },
        TravelType::Friends => rsx! { Icon { class: "field-icon", icon: FaUserGroup, width: 18, height: 18 } },
    }
}

/// 2×2 "who are you traveling with" radio group.
#[component]
pub fn TravelTypeGroup(
    #[props(!optional)] selected: Option<TravelType>,
    on_select: EventHandler<TravelType>,
) -> Element {
    rsx! {
        RadioGroup {
            class: "travel-options",
            value: selected.map(|t| t.value().to_string()),
            on_value_change: move |value: String| match TravelType::from_value(&value) {
                Some(travel_type) => on_select.call(travel_type),
                None => tracing::warn!("Unknown travel type {:?}", value),
            },
            for (index, option) in TravelType::ALL.into_iter().enumerate() {
                RadioItem {
                    key: "{option.value()}",
                    class: "travel-option",
                    value: option.value().to_string(),
                    index,
                    TravelTypeIcon { value: option }
                    span { class: "travel-option-label", "{option.label()}" }
                }
            }
        }
    }
}
