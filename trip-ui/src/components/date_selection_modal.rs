//! Side-by-side arrival/departure calendar layout with a live summary.

use chrono::NaiveDate;
use dioxus::prelude::*;
use trip_dates::format::DisplayFormat;
use trip_dates::selection::{DateSelection, DateSlot};
use trip_dates::window::BookingWindow;

use super::{Badge, BadgeVariant, Button, ButtonVariant, Calendar};

#[derive(Props, Clone, PartialEq)]
pub struct DateSelectionModalProps {
    /// Transient picks held by the parent
    pub selection: DateSelection,
    /// Selectable range for both calendars
    pub window: BookingWindow,
    /// Display patterns for the badges and the summary
    pub format: DisplayFormat,
    pub on_select: EventHandler<(Option<NaiveDate>, DateSlot)>,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

/// Two calendars (arrival, departure), a live trip summary, and
/// cancel/confirm actions. Holds no state of its own; all selection
/// state flows in as props.
#[component]
pub fn DateSelectionModal(props: DateSelectionModalProps) -> Element {
    let selection = props.selection;
    let window = props.window;
    let on_select = props.on_select;

    let arrival_disabled = Callback::new(move |date: NaiveDate| window.arrival_disabled(date));
    let departure_disabled =
        Callback::new(move |date: NaiveDate| window.departure_disabled(date, selection.arrival));

    let arrival_badge = selection.arrival.map(|date| props.format.badge_date(&date));
    let departure_badge = selection.departure.map(|date| props.format.badge_date(&date));

    // Shares the commit path's computation
    let summary = selection.confirm().map(|trip| {
        (
            props.format.badge_date(&trip.arrival),
            props.format.badge_date(&trip.departure),
            trip.days,
        )
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            div {
                style: "display: flex; gap: 24px; justify-content: center; flex-wrap: wrap;",
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 8px;",
                    h3 {
                        style: "margin: 0; font-size: 15px;",
                        "Arrival"
                    }
                    if let Some(text) = arrival_badge {
                        Badge { label: text, variant: BadgeVariant::Outline }
                    }
                    Calendar {
                        selected: selection.arrival,
                        initial_month: selection.arrival.unwrap_or(window.today()),
                        disabled: arrival_disabled,
                        on_select: move |date| on_select.call((date, DateSlot::Arrival)),
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 8px;",
                    h3 {
                        style: "margin: 0; font-size: 15px;",
                        "Departure"
                    }
                    if let Some(text) = departure_badge {
                        Badge { label: text, variant: BadgeVariant::Outline }
                    }
                    Calendar {
                        selected: selection.departure,
                        initial_month: selection
                            .departure
                            .or(selection.arrival)
                            .unwrap_or(window.today()),
                        disabled: departure_disabled,
                        on_select: move |date| on_select.call((date, DateSlot::Departure)),
                    }
                }
            }

            if let Some((arrival_text, departure_text, days)) = summary {
                div {
                    style: "padding: 12px 16px; background: #E3F2FD; border: 1px solid #90CAF9; border-radius: 8px; text-align: center;",
                    p {
                        style: "margin: 0 0 4px 0; font-weight: 600; color: #0D47A1;",
                        "Trip summary"
                    }
                    p {
                        style: "margin: 0 0 8px 0; color: #1565C0;",
                        "{arrival_text} to {departure_text}"
                    }
                    Badge { label: format!("{days} days"), variant: BadgeVariant::Accent }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                Button {
                    label: "Cancel".to_string(),
                    variant: ButtonVariant::Outline,
                    onclick: move |_| props.on_cancel.call(()),
                }
                Button {
                    label: "Confirm dates".to_string(),
                    disabled: !selection.is_complete(),
                    onclick: move |_| props.on_confirm.call(()),
                }
            }
        }
    }
}
