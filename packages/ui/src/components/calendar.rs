//! One-month range calendar built on the `dioxus-primitives` calendar.
//!
//! The form keeps its dates as `chrono` values in [`DurationDraft`]; the primitive
//! works with `time` dates, so [`to_range`] and [`from_range`] translate at the edge.

use api::DurationDraft;
use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use dioxus_primitives::calendar::{
    CalendarGrid, CalendarHeader, CalendarMonthTitle, CalendarNavigation,
    CalendarNextMonthButton, CalendarPreviousMonthButton, DateRange, RangeCalendar,
};
use time::{Date, Month, Weekday};

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

const CALENDAR_CSS: Asset = asset!("/assets/styling/calendar.css");

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn to_date(day: NaiveDate) -> Option<Date> {
    let month = Month::try_from(day.month() as u8).ok()?;
    Date::from_calendar_date(day.year(), month, day.day() as u8).ok()
}

pub fn from_date(day: Date) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(day.year(), u8::from(day.month()) as u32, day.day() as u32)
}

/// Only a range with both bounds is shown as a selection.
pub fn to_range(draft: &DurationDraft) -> Option<DateRange> {
    let from = to_date(draft.from?)?;
    let to = to_date(draft.to?)?;
    Some(DateRange::new(from, to))
}

/// A cleared selection empties both bounds.
pub fn from_range(range: Option<DateRange>) -> DurationDraft {
    match range {
        Some(range) => DurationDraft {
            from: from_date(range.start),
            to: from_date(range.end),
        },
        None => DurationDraft::default(),
    }
}

fn format_day(day: NaiveDate) -> String {
    day.format("%b %-d, %Y").to_string()
}

/// Trigger text for the range picker.
pub fn format_range(range: &DurationDraft) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) => format!("{} - {}", format_day(from), format_day(to)),
        (Some(from), None) => format_day(from),
        _ => "Select duration".to_string(),
    }
}

/// Range-mode calendar. Days before `min_date` are disabled, and the view opens on
/// the month containing `min_date`.
#[component]
pub fn Calendar(
    selected: DurationDraft,
    min_date: NaiveDate,
    on_select: EventHandler<DurationDraft>,
) -> Element {
    let min = to_date(min_date).unwrap_or(Date::MIN);
    let mut view_date = use_signal(move || min);

    rsx! {
        document::Stylesheet { href: CALENDAR_CSS }

        div {
            class: "calendar",
            RangeCalendar {
                selected_range: to_range(&selected),
                on_range_change: move |range: Option<DateRange>| on_select.call(from_range(range)),
                view_date: view_date(),
                on_view_change: move |next: Date| view_date.set(next),
                min_date: min,
                first_day_of_week: Weekday::Sunday,
                CalendarHeader {
                    class: "calendar-header",
                    CalendarNavigation {
                        class: "calendar-navigation",
                        CalendarPreviousMonthButton {
                            class: "calendar-nav",
                            Icon { icon: FaChevronLeft, width: 12, height: 12 }
                        }
                        CalendarMonthTitle { class: "calendar-title" }
                        CalendarNextMonthButton {
                            class: "calendar-nav",
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                }
                CalendarGrid { class: "calendar-grid" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_conversion() {
        let day = d(2024, 2, 29);
        let converted = to_date(day).unwrap();
        assert_eq!(converted.year(), 2024);
        assert_eq!(converted.month(), Month::February);
        assert_eq!(converted.day(), 29);
        assert_eq!(from_date(converted), Some(day));
    }

    #[test]
    fn test_partial_draft_has_no_range() {
        assert!(to_range(&DurationDraft::default()).is_none());
        let start_only = DurationDraft {
            from: Some(d(2025, 1, 27)),
            to: None,
        };
        assert!(to_range(&start_only).is_none());
    }

    #[test]
    fn test_picked_range_fills_both_bounds() {
        let start = to_date(d(2025, 1, 27)).unwrap();
        let end = to_date(d(2025, 2, 3)).unwrap();
        let draft = from_range(Some(DateRange::new(start, end)));
        assert_eq!(draft.from, Some(d(2025, 1, 27)));
        assert_eq!(draft.to, Some(d(2025, 2, 3)));

        let shown = to_range(&draft).unwrap();
        assert_eq!((shown.start, shown.end), (start, end));
    }

    #[test]
    fn test_cleared_range_empties_draft() {
        assert_eq!(from_range(None), DurationDraft::default());
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(&DurationDraft::default()), "Select duration");
        let start_only = DurationDraft {
            from: Some(d(2025, 1, 27)),
            to: None,
        };
        assert_eq!(format_range(&start_only), "Jan 27, 2025");
        let full = DurationDraft {
            from: Some(d(2025, 1, 27)),
            to: Some(d(2025, 2, 3)),
        };
        assert_eq!(format_range(&full), "Jan 27, 2025 - Feb 3, 2025");
    }
}
