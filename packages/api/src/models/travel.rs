//! # Travel form schema
//!
//! Two representations of the onboarding form:
//!
//! ## [`TravelFormDraft`]
//!
//! The in-progress form state edited by the UI. Every field may be empty, and the
//! struct derives [`validator::Validate`] so a submit attempt yields one inline
//! message per offending field:
//!
//! - `destination`: at least 2 characters.
//! - `duration.from` / `duration.to`: both bounds required.
//! - `travel_type`: one of [`TravelType`].
//!
//! ## [`TravelFormData`]
//!
//! The validated payload sent to `submit_travel_plan`. All fields are present, and
//! it serializes with the wire names `destination`, `duration.{from,to}` and `type`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

pub const DESTINATION_MESSAGE: &str = "Please enter a valid destination";
pub const START_DATE_MESSAGE: &str = "Start date is required";
pub const END_DATE_MESSAGE: &str = "End date is required";
pub const TRAVEL_TYPE_MESSAGE: &str = "Please select a travel type";

/// Who the user is travelling with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelType {
    /// Options in display order.
    pub const ALL: [TravelType; 4] = [
        TravelType::Solo,
        TravelType::Couple,
        TravelType::Family,
        TravelType::Friends,
    ];

    /// Lowercase value used on the wire and in element ids.
    pub fn value(self) -> &'static str {
        match self {
            TravelType::Solo => "solo",
            TravelType::Couple => "couple",
            TravelType::Family => "family",
            TravelType::Friends => "friends",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelType::Solo => "Solo",
            TravelType::Couple => "Couple",
            TravelType::Family => "Family",
            TravelType::Friends => "Friends",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Date bounds as picked in the range picker.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DurationDraft {
    #[validate(required)]
    pub from: Option<NaiveDate>,
    #[validate(required)]
    pub to: Option<NaiveDate>,
}

/// Unvalidated form state.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct TravelFormDraft {
    #[validate(length(min = 2))]
    pub destination: String,
    #[validate(nested)]
    pub duration: DurationDraft,
    #[validate(required)]
    pub travel_type: Option<TravelType>,
}

impl TravelFormDraft {
    /// Validate the draft and, if it passes, produce the submission payload.
    pub fn to_submission(&self) -> Result<TravelFormData, FormErrors> {
        let errors = self.errors();
        match (self.duration.from, self.duration.to, self.travel_type) {
            (Some(from), Some(to), Some(travel_type)) if errors.is_empty() => Ok(TravelFormData {
                destination: self.destination.clone(),
                duration: TripDuration { from, to },
                travel_type,
            }),
            _ => Err(errors),
        }
    }

    /// Inline errors for the current state, empty when the draft is valid.
    pub fn errors(&self) -> FormErrors {
        match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(e) => FormErrors::from(e),
        }
    }
}

/// Inline, per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub travel_type: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.destination.is_none() && self.duration.is_none() && self.travel_type.is_none()
    }
}

/// `message` when `field` failed any of its rules.
fn message_for(errors: &ValidationErrors, field: &str, message: &str) -> Option<String> {
    errors
        .field_errors()
        .contains_key(field)
        .then(|| message.to_string())
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        // Start date wins over end date so the picker shows a single message.
        let duration = match errors.errors().get("duration") {
            Some(ValidationErrorsKind::Struct(inner)) => {
                message_for(inner, "from", START_DATE_MESSAGE)
                    .or_else(|| message_for(inner, "to", END_DATE_MESSAGE))
            }
            _ => None,
        };

        Self {
            destination: message_for(&errors, "destination", DESTINATION_MESSAGE),
            duration,
            travel_type: message_for(&errors, "travel_type", TRAVEL_TYPE_MESSAGE),
        }
    }
}

/// Inclusive trip dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDuration {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TripDuration {
    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// Validated onboarding payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelFormData {
    pub destination: String,
    pub duration: TripDuration,
    #[serde(rename = "type")]
    pub travel_type: TravelType,
}

impl TravelFormData {
    /// Re-check a payload received over the wire.
    pub fn check(&self) -> Result<(), crate::SubmitError> {
        if self.destination.chars().count() < 2 {
            return Err(crate::SubmitError::Invalid(DESTINATION_MESSAGE.to_string()));
        }
        if self.duration.to < self.duration.from {
            return Err(crate::SubmitError::Invalid(
                "End date must not be before the start date".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_draft() -> TravelFormDraft {
        TravelFormDraft {
            destination: "Tokyo, Japan".to_string(),
            duration: DurationDraft {
                from: Some(date(2025, 1, 27)),
                to: Some(date(2025, 2, 3)),
            },
            travel_type: Some(TravelType::Friends),
        }
    }

    #[test]
    fn test_valid_draft_is_accepted() {
        let data = valid_draft().to_submission().unwrap();
        assert_eq!(data.destination, "Tokyo, Japan");
        assert_eq!(data.travel_type, TravelType::Friends);
        assert_eq!(data.duration.days(), 8);
        assert!(valid_draft().errors().is_empty());
    }

    #[test]
    fn test_short_destination_is_rejected() {
        for destination in ["", "T"] {
            let draft = TravelFormDraft {
                destination: destination.to_string(),
                ..valid_draft()
            };
            let errors = draft.to_submission().unwrap_err();
            assert_eq!(errors.destination.as_deref(), Some(DESTINATION_MESSAGE));
            assert!(errors.duration.is_none());
            assert!(errors.travel_type.is_none());
        }
    }

    #[test]
    fn test_two_character_destination_is_accepted() {
        let draft = TravelFormDraft {
            destination: "Rø".to_string(),
            ..valid_draft()
        };
        assert!(draft.to_submission().is_ok());
    }

    #[test]
    fn test_missing_start_date_is_rejected() {
        let mut draft = valid_draft();
        draft.duration.from = None;
        let errors = draft.to_submission().unwrap_err();
        assert_eq!(errors.duration.as_deref(), Some(START_DATE_MESSAGE));
    }

    #[test]
    fn test_missing_end_date_is_rejected() {
        let mut draft = valid_draft();
        draft.duration.to = None;
        let errors = draft.to_submission().unwrap_err();
        assert_eq!(errors.duration.as_deref(), Some(END_DATE_MESSAGE));
    }

    #[test]
    fn test_start_date_message_wins_when_both_missing() {
        let mut draft = valid_draft();
        draft.duration = DurationDraft::default();
        let errors = draft.to_submission().unwrap_err();
        assert_eq!(errors.duration.as_deref(), Some(START_DATE_MESSAGE));
    }

    #[test]
    fn test_missing_travel_type_is_rejected() {
        let mut draft = valid_draft();
        draft.travel_type = None;
        let errors = draft.to_submission().unwrap_err();
        assert_eq!(errors.travel_type.as_deref(), Some(TRAVEL_TYPE_MESSAGE));
        assert!(errors.destination.is_none());
    }

    #[test]
    fn test_empty_draft_reports_every_field() {
        let errors = TravelFormDraft::default().errors();
        assert_eq!(errors.destination.as_deref(), Some(DESTINATION_MESSAGE));
        assert_eq!(errors.duration.as_deref(), Some(START_DATE_MESSAGE));
        assert_eq!(errors.travel_type.as_deref(), Some(TRAVEL_TYPE_MESSAGE));
    }

    #[test]
    fn test_rejection_matches_inline_errors() {
        let draft = TravelFormDraft {
            destination: "T".to_string(),
            duration: DurationDraft {
                from: Some(date(2025, 1, 27)),
                to: None,
            },
            travel_type: None,
        };
        let errors = draft.to_submission().unwrap_err();
        assert_eq!(errors, draft.errors());
        assert_eq!(errors.duration.as_deref(), Some(END_DATE_MESSAGE));
    }

    #[test]
    fn test_wire_format() {
        let data = valid_draft().to_submission().unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["type"], "friends");
        assert_eq!(json["duration"]["from"], "2025-01-27");
        assert_eq!(json["duration"]["to"], "2025-02-03");
    }

    #[test]
    fn test_check_rejects_reversed_dates() {
        let mut data = valid_draft().to_submission().unwrap();
        data.duration = TripDuration {
            from: date(2025, 2, 3),
            to: date(2025, 1, 27),
        };
        assert!(data.check().is_err());
    }

    #[test]
    fn test_travel_type_values() {
        assert_eq!(TravelType::from_value("couple"), Some(TravelType::Couple));
        assert_eq!(TravelType::from_value("group"), None);
        assert_eq!(TravelType::Family.to_string(), "Family");
    }
}
