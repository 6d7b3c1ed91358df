use dioxus::prelude::*;

use crate::components::Input;
use crate::icons::FaLocationDot;
use crate::maps::{self, use_maps_script, use_places_autocomplete, MapsStatus};
use crate::Icon;

pub const DESTINATION_INPUT_ID: &str = "destination-input";

/// Destination text input with Google Places city suggestions.
#[component]
pub fn DestinationField(value: String, on_change: EventHandler<String>) -> Element {
    let status = use_maps_script(maps::api_key());
    use_places_autocomplete(status, DESTINATION_INPUT_ID, on_change);

    let current = status();

    rsx! {
        div {
            class: "field-frame",
            Icon { class: "field-icon", icon: FaLocationDot, width: 18, height: 18 }
            Input {
                id: "{DESTINATION_INPUT_ID}",
                name: "destination",
                class: "field-input",
                placeholder: "{current.placeholder()}",
                value,
                disabled: current.input_disabled(),
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
        }
        if current == MapsStatus::Loading {
            p { class: "field-hint", "Loading Google Maps search..." }
        }
    }
}
