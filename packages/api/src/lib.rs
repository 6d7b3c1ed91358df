//! # API crate: shared models and server functions for the trip planner
//!
//! Everything that crosses the client/server boundary lives here: the onboarding form
//! schema, the dashboard fixtures and the mock travel-plan endpoint that the web
//! frontend calls.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `TravelFormDraft` (validated with `validator`), `TravelFormData`, `TravelType` and the dashboard records |
//! | [`fixtures`] | Hardcoded upcoming trip, accommodations, daily schedule and activities |
//! | [`service`] | `MockTravelApi`, the delayed stand-in for a real backend |
//! | `settings` | Mock endpoint behaviour loaded with the `config` crate (server only) |
//!
//! ## Server functions exposed here
//!
//! - `submit_travel_plan`: `POST /api/travel-plans`, body [`TravelFormData`], answers
//!   [`SubmitResponse`].

use dioxus::prelude::*;

mod error;
pub mod fixtures;
pub mod models;
pub mod service;
#[cfg(feature = "server")]
pub mod settings;

pub use error::SubmitError;
pub use models::{
    Accommodation, Activity, DateItem, DurationDraft, FormErrors, GroupSize, TravelFormData,
    TravelFormDraft, TravelType, TripDuration, TripSummary,
};
pub use service::{MockApi, MockTravelApi, SubmitResponse};
#[cfg(feature = "server")]
pub use settings::Settings;

/// Create a travel plan from a validated onboarding form.
#[post("/api/travel-plans")]
pub async fn submit_travel_plan(plan: TravelFormData) -> Result<SubmitResponse, ServerFnError> {
    plan.check()?;

    let settings = Settings::load();
    MockTravelApi::new(settings.api)
        .submit(&plan)
        .await
        .map_err(|e| {
            tracing::error!("Travel plan submission failed: {}", e);
            ServerFnError::from(e)
        })
}
