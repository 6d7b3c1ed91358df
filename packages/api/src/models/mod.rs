//! Shared data models.

pub mod travel;
pub mod trip;

pub use travel::{
    DurationDraft, FormErrors, TravelFormData, TravelFormDraft, TravelType, TripDuration,
};
pub use trip::{Accommodation, Activity, DateItem, GroupSize, TripSummary};
