use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label {class}",
            {children}
        }
    }
}

/// Inline validation message under a form field. Renders nothing without a message.
#[component]
pub fn FieldMessage(#[props(!optional)] message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p {
                class: "field-message",
                role: "alert",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
