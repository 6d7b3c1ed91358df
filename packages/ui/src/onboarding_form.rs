//! Trip intake form: destination, dates and travel party.
//!
//! Inline errors appear once the user has tried to submit and are re-evaluated on
//! every edit afterwards. A valid draft is sent through `api::submit_travel_plan`;
//! the submit button is disabled while the call is in flight and the outcome is
//! reported with a toast. `on_success` lets the caller navigate away.

use api::{DurationDraft, FormErrors, SubmitResponse, TravelFormDraft, TravelType};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, FieldMessage, Label, ToastOptions};
use crate::date_range_picker::DateRangePicker;
use crate::destination_field::{DestinationField, DESTINATION_INPUT_ID};
use crate::icons::FaSpinner;
use crate::submission::{Notice, SubmissionState};
use crate::travel_type_group::TravelTypeGroup;
use crate::Icon;

const ONBOARDING_CSS: Asset = asset!("/assets/styling/onboarding.css");

#[component]
pub fn OnboardingForm(on_success: Option<EventHandler<SubmitResponse>>) -> Element {
    let mut draft = use_signal(TravelFormDraft::default);
    let mut attempted = use_signal(|| false);
    let mut state = use_signal(SubmissionState::default);
    let toast = use_toast();

    let errors = if attempted() {
        draft.read().errors()
    } else {
        FormErrors::default()
    };
    let submitting = state().is_submitting();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        attempted.set(true);

        let data = match draft.read().to_submission() {
            Ok(data) => data,
            Err(errors) => {
                tracing::debug!("Onboarding form rejected: {:?}", errors);
                return;
            }
        };
        if !state.write().begin() {
            return;
        }

        spawn(async move {
            let result = api::submit_travel_plan(data).await;
            let response = result.as_ref().ok().cloned();
            let notice = Notice::from_server(result);
            state.write().finish(notice.is_success());

            if notice.is_success() {
                toast.success(notice.message, ToastOptions::new());
                if let (Some(handler), Some(response)) = (on_success, response) {
                    handler.call(response);
                }
            } else {
                tracing::warn!("Travel plan submission failed: {}", notice.message);
                toast.error(notice.message, ToastOptions::new());
            }
        });
    };

    rsx! {
        document::Stylesheet { href: ONBOARDING_CSS }

        form {
            class: "onboarding",
            novalidate: true,
            onsubmit: handle_submit,

            div {
                class: "onboarding-body",
                div {
                    class: "onboarding-header",
                    h1 { "Plan Your Journey, Your Way!" }
                    p { "Let's create your personalised travel experience" }
                }

                div {
                    class: "onboarding-fields",

                    div {
                        class: "form-item",
                        Label { html_for: "{DESTINATION_INPUT_ID}", "Where would you like to go?" }
                        DestinationField {
                            value: draft.read().destination.clone(),
                            on_change: move |value: String| draft.write().destination = value,
                        }
                        FieldMessage { message: errors.destination.clone() }
                    }

                    div {
                        class: "form-item",
                        Label { "How long will you stay?" }
                        DateRangePicker {
                            value: draft.read().duration.clone(),
                            on_change: move |range: DurationDraft| draft.write().duration = range,
                        }
                        FieldMessage { message: errors.duration.clone() }
                    }

                    div {
                        class: "form-item",
                        Label { "Who are you traveling with?" }
                        TravelTypeGroup {
                            selected: draft.read().travel_type,
                            on_select: move |value: TravelType| draft.write().travel_type = Some(value),
                        }
                        FieldMessage { message: errors.travel_type.clone() }
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "onboarding-submit",
                disabled: submitting,
                if submitting {
                    span {
                        class: "onboarding-submit-busy",
                        Icon { class: "spin", icon: FaSpinner, width: 16, height: 16 }
                        "Processing..."
                    }
                } else {
                    "Submit"
                }
            }
        }
    }
}
