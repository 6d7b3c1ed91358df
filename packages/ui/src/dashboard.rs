//! Read-only itinerary overview shown after onboarding.

use api::{fixtures, Accommodation, Activity, DateItem, TripSummary};
use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaBed, FaClock, FaLocationDot, FaPersonHiking, FaStar, FaUsers};
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub trip: TripSummary,
    pub accommodations: Vec<Accommodation>,
    pub schedule: Vec<DateItem>,
    pub activities: Vec<Activity>,
}

impl DashboardData {
    pub fn from_fixtures() -> Self {
        Self {
            trip: fixtures::upcoming_trip(),
            accommodations: fixtures::accommodations(),
            schedule: fixtures::schedule(),
            activities: fixtures::activities(),
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let data = use_hook(DashboardData::from_fixtures);
    let mut selected_day = use_signal(|| 0usize);
    let trip = data.trip.clone();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard",

            div {
                class: "dashboard-greeting",
                div {
                    div { class: "dashboard-hello", "Hello {trip.traveller}!" }
                    div { class: "dashboard-subtitle", "Ready for the trip?" }
                }
                div { class: "dashboard-avatar", "{trip.initial()}" }
            }

            section {
                class: "dashboard-section",
                h2 { "Your upcoming trip" }
                TripCard { trip: trip.clone() }
            }

            section {
                class: "dashboard-section",
                h2 { "Accommodation" }
                div {
                    class: "dashboard-row",
                    for stay in data.accommodations.iter() {
                        AccommodationCard { key: "{stay.name}", stay: stay.clone() }
                    }
                }
            }

            section {
                class: "dashboard-section",
                h2 { "Plan your days" }
                div {
                    class: "date-strip",
                    for (i, item) in data.schedule.iter().enumerate() {
                        button {
                            key: "{item.date}",
                            r#type: "button",
                            class: if selected_day() == i { "date-cell date-cell--selected" } else { "date-cell" },
                            onclick: move |_| selected_day.set(i),
                            span { class: "date-cell-weekday", "{item.weekday()}" }
                            span { class: "date-cell-day", "{item.day()}" }
                        }
                    }
                }
            }

            section {
                class: "dashboard-section",
                h2 { "Activities" }
                div {
                    class: "dashboard-column",
                    for activity in data.activities.iter() {
                        ActivityCard { key: "{activity.title}", activity: activity.clone() }
                    }
                }
            }

            div { class: "dashboard-spacer" }
        }
    }
}

#[component]
fn TripCard(trip: TripSummary) -> Element {
    let destination = trip.destination.to_uppercase();

    rsx! {
        div {
            class: "trip-card",
            style: "background-image: url({trip.image})",
            div { class: "trip-card-shade" }
            div {
                class: "trip-card-content",
                div {
                    class: "trip-card-top",
                    div {
                        div { class: "trip-card-destination", "{destination}" }
                        div { class: "trip-card-dates", "{trip.date_label()}" }
                    }
                    span {
                        class: "trip-card-link",
                        Icon { icon: FaArrowRight, width: 18, height: 18 }
                    }
                }
                div {
                    class: "trip-card-stats",
                    TripStat { label: "Duration", value: format!("{} days", trip.duration_days()),
                        Icon { icon: FaClock, width: 16, height: 16 }
                    }
                    TripStat { label: "Group Size", value: trip.group.label(),
                        Icon { icon: FaUsers, width: 16, height: 16 }
                    }
                    TripStat { label: "Activities", value: trip.activity_count.to_string(),
                        Icon { icon: FaPersonHiking, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[component]
fn TripStat(label: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "trip-stat",
            {children}
            div {
                div { class: "trip-stat-value", "{value}" }
                div { class: "trip-stat-label", "{label}" }
            }
        }
    }
}

#[component]
fn AccommodationCard(stay: Accommodation) -> Element {
    let nights = stay.nights();
    let suffix = if nights == 1 { "night" } else { "nights" };
    let rating = format!("{:.1}", stay.rating);

    rsx! {
        article {
            class: "stay-card",
            img { class: "stay-card-image", src: "{stay.image}", alt: "{stay.name}" }
            div {
                class: "stay-card-body",
                div { class: "stay-card-name", "{stay.name}" }
                div {
                    class: "stay-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { "{stay.area}" }
                }
                div {
                    class: "stay-card-meta",
                    Icon { icon: FaBed, width: 12, height: 12 }
                    span { "{stay.stay_label()} · {nights} {suffix}" }
                }
                div {
                    class: "stay-card-meta",
                    Icon { icon: FaStar, width: 12, height: 12 }
                    span { "{rating}" }
                }
            }
        }
    }
}

#[component]
fn ActivityCard(activity: Activity) -> Element {
    rsx! {
        article {
            class: "activity-card",
            img { class: "activity-card-image", src: "{activity.image}", alt: "{activity.title}" }
            div {
                class: "activity-card-body",
                div { class: "activity-card-title", "{activity.title}" }
                div {
                    class: "activity-card-meta",
                    Icon { icon: FaClock, width: 12, height: 12 }
                    span { "{activity.time} · {activity.duration_label()}" }
                }
                div {
                    class: "activity-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { "{activity.location}" }
                }
            }
        }
    }
}
