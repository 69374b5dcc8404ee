//! Trip Itinerary Planner
//!
//! A two-step wizard: pick trip dates, then review the itinerary.
//! The date selection step commits a `TripDates` into the shared
//! `FormState` and advances the flow; the review step renders the
//! committed trip and a JSON export of it.

use dioxus::prelude::*;
use trip_dates::clock::{Clock, SystemClock};
use trip_dates::format::DisplayFormat;
use trip_ui::components::{Button, ButtonVariant, DateSelector, WizardHeader};
use trip_ui::state::FormState;

/// Steps of the itinerary wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    Dates,
    Review,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("itinerary-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(FormState::new);
    let mut step = use_signal(|| WizardStep::Dates);
    let today = SystemClock.today();

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if step() == WizardStep::Dates {
                WizardHeader {
                    title: "When are you traveling?".to_string(),
                    subtitle: "Pick arrival and departure dates to continue.".to_string(),
                }
                DateSelector {
                    today: today,
                    on_next: move |_| {
                        log::info!("advancing to review step");
                        step.set(WizardStep::Review);
                    },
                }
            } else {
                WizardHeader {
                    title: "Review your trip".to_string(),
                    subtitle: "Check the dates before booking.".to_string(),
                }
                ReviewStep {}
                div {
                    style: "margin-top: 12px;",
                    Button {
                        label: "Back to dates".to_string(),
                        variant: ButtonVariant::Outline,
                        onclick: move |_| step.set(WizardStep::Dates),
                    }
                }
            }
        }
    }
}

/// Review step: the committed trip and a JSON export of it.
#[component]
fn ReviewStep() -> Element {
    let form = use_context::<FormState>();

    // The dates step commits before advancing here
    let trip = match (form.dates)() {
        Some(trip) => trip,
        None => {
            return rsx! {
                p {
                    style: "color: #666;",
                    "No trip dates committed yet."
                }
            }
        }
    };

    let format = DisplayFormat::default();
    let arrival_text = format.summary_date(&trip.arrival);
    let departure_text = format.summary_date(&trip.departure);
    let export = serde_json::to_string_pretty(&trip).unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "padding: 16px; background: #F5F5F5; border: 1px solid #E0E0E0; border-radius: 8px;",
                p {
                    style: "margin: 0 0 4px 0; font-weight: 600;",
                    "{arrival_text} to {departure_text}"
                }
                p {
                    style: "margin: 0; color: #616161;",
                    "{trip.days} days of travel"
                }
            }
            pre {
                style: "margin: 0; padding: 12px; background: #263238; color: #ECEFF1; border-radius: 8px; font-size: 12px; overflow-x: auto;",
                "{export}"
            }
        }
    }
}
