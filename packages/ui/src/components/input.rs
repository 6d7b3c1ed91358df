use dioxus::prelude::*;

/// Borderless text input; the surrounding field draws the frame.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            r#type: "{r#type}",
            class: "input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            autocomplete: "off",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
