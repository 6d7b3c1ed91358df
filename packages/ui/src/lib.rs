//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

pub mod maps;
pub use maps::MapsStatus;

pub mod submission;
pub use submission::{Notice, NoticeKind, SubmissionState};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, use_theme, ThemeSignal, ThemeToggle};

mod destination_field;
pub use destination_field::DestinationField;

mod date_range_picker;
pub use date_range_picker::DateRangePicker;

mod travel_type_group;
pub use travel_type_group::TravelTypeGroup;

mod onboarding_form;
pub use onboarding_form::OnboardingForm;

mod dashboard;
pub use dashboard::{Dashboard, DashboardData};
