//! Static itinerary shown on the dashboard.
//!
//! Nothing here is derived from the submitted form; the dashboard is a read-only
//! preview built entirely from these records.

use chrono::{Days, NaiveDate};

use crate::models::{Accommodation, Activity, DateItem, GroupSize, TripSummary};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn upcoming_trip() -> TripSummary {
    TripSummary {
        traveller: "Chhavi".to_string(),
        destination: "Tokyo".to_string(),
        start: ymd(2025, 1, 27),
        end: ymd(2025, 2, 3),
        group: GroupSize { male: 2, female: 2 },
        activity_count: 14,
        image: "/images/tokyo.png".to_string(),
    }
}

pub fn accommodations() -> Vec<Accommodation> {
    vec![
        Accommodation {
            name: "Shinagawa Prince Hotel".to_string(),
            area: "Minato".to_string(),
            check_in: ymd(2025, 1, 27),
            check_out: ymd(2025, 1, 30),
            rating: 4.6,
            image: "/images/shinagawa.png".to_string(),
        },
        Accommodation {
            name: "Hotel Gracery Shinjuku".to_string(),
            area: "Shinjuku".to_string(),
            check_in: ymd(2025, 1, 30),
            check_out: ymd(2025, 2, 1),
            rating: 4.4,
            image: "/images/gracery.png".to_string(),
        },
        Accommodation {
            name: "Asakusa View Hotel".to_string(),
            area: "Taito".to_string(),
            check_in: ymd(2025, 2, 1),
            check_out: ymd(2025, 2, 3),
            rating: 4.3,
            image: "/images/asakusa.png".to_string(),
        },
    ]
}

/// One entry per day of [`upcoming_trip`], both ends included.
pub fn schedule() -> Vec<DateItem> {
    let trip = upcoming_trip();
    (0..trip.duration_days())
        .filter_map(|offset| trip.start.checked_add_days(Days::new(offset as u64)))
        .map(|date| DateItem { date })
        .collect()
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            title: "Senso-ji Temple".to_string(),
            time: "09:00".to_string(),
            location: "Asakusa".to_string(),
            duration_minutes: 120,
            image: "/images/sensoji.png".to_string(),
        },
        Activity {
            title: "Tsukiji Outer Market".to_string(),
            time: "12:30".to_string(),
            location: "Chuo".to_string(),
            duration_minutes: 90,
            image: "/images/tsukiji.png".to_string(),
        },
        Activity {
            title: "Shibuya Sky".to_string(),
            time: "17:00".to_string(),
            location: "Shibuya".to_string(),
            duration_minutes: 45,
            image: "/images/shibuya-sky.png".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        assert_eq!(accommodations().len(), 3);
        assert_eq!(schedule().len(), 8);
        assert_eq!(activities().len(), 3);
    }

    #[test]
    fn test_trip_summary_labels() {
        let trip = upcoming_trip();
        assert_eq!(trip.duration_days(), 8);
        assert_eq!(trip.date_label(), "27.01.2025 - 03.02.2025");
        assert_eq!(trip.group.label(), "4 (2M,2F)");
        assert_eq!(trip.initial(), "C");
    }

    #[test]
    fn test_schedule_covers_trip() {
        let trip = upcoming_trip();
        let days = schedule();
        assert_eq!(days.first().map(|d| d.date), Some(trip.start));
        assert_eq!(days.last().map(|d| d.date), Some(trip.end));
        assert_eq!(days[0].day(), 27);
        assert_eq!(days[0].weekday(), "Mon");
    }

    #[test]
    fn test_accommodations_cover_every_night() {
        let trip = upcoming_trip();
        let nights: i64 = accommodations().iter().map(|a| a.nights()).sum();
        assert_eq!(nights, trip.duration_days() - 1);
        assert_eq!(accommodations()[0].stay_label(), "Jan 27 - Jan 30");
    }

    #[test]
    fn test_activity_duration_labels() {
        let labels: Vec<String> = activities().iter().map(|a| a.duration_label()).collect();
        assert_eq!(labels, vec!["2h", "1h 30m", "45m"]);
    }
}
