//! Display records for the trip dashboard.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Traveller head-count split shown on the trip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSize {
    pub male: u32,
    pub female: u32,
}

impl GroupSize {
    pub fn total(&self) -> u32 {
        self.male + self.female
    }

    /// Compact label, e.g. `4 (2M,2F)`.
    pub fn label(&self) -> String {
        format!("{} ({}M,{}F)", self.total(), self.male, self.female)
    }
}

/// The upcoming trip featured at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub traveller: String,
    pub destination: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub group: GroupSize,
    pub activity_count: u32,
    pub image: String,
}

impl TripSummary {
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// `27.01.2025 - 03.02.2025`
    pub fn date_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d.%m.%Y"),
            self.end.format("%d.%m.%Y")
        )
    }

    /// First letter of the traveller's name, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.traveller
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub area: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rating: f32,
    pub image: String,
}

impl Accommodation {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// `Jan 27 - Jan 30`
    pub fn stay_label(&self) -> String {
        format!(
            "{} - {}",
            self.check_in.format("%b %-d"),
            self.check_out.format("%b %-d")
        )
    }
}

/// One cell of the date strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateItem {
    pub date: NaiveDate,
}

impl DateItem {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Short weekday, e.g. `Mon`.
    pub fn weekday(&self) -> String {
        self.date.format("%a").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub time: String,
    pub location: String,
    pub duration_minutes: u32,
    pub image: String,
}

impl Activity {
    /// `2h 30m`, `45m`, `3h`
    pub fn duration_label(&self) -> String {
        let h = self.duration_minutes / 60;
        let m = self.duration_minutes % 60;
        match (h, m) {
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        }
    }
}
