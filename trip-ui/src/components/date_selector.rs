//! Trip date selection step: entry views, picker dialog, commit handling.

use chrono::NaiveDate;
use dioxus::prelude::*;
use trip_dates::format::DisplayFormat;
use trip_dates::selection::{DateSelection, DateSlot};
use trip_dates::window::BookingWindow;

use super::{Badge, Button, ButtonVariant, DateSelectionModal, Modal};
use crate::state::FormState;

/// Behavior knobs for the date selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Seed the picker from the committed trip when editing. `false`
    /// reopens the picker with whatever was last picked instead.
    pub seed_on_edit: bool,
    /// Date display patterns
    pub format: DisplayFormat,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            seed_on_edit: true,
            format: DisplayFormat::default(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DateSelectorProps {
    /// Current date, injected by the caller
    pub today: NaiveDate,
    #[props(default)]
    pub config: SelectorConfig,
    /// Advances the wizard after a confirmed commit
    pub on_next: EventHandler<()>,
}

/// Date selection step of the wizard.
///
/// Shows a call-to-action until a trip is committed, then a summary with
/// an edit control. Confirming writes exactly the `dates` field of the
/// shared [`FormState`], closes the dialog, and advances the wizard, in
/// that order. Canceling leaves form state untouched.
#[component]
pub fn DateSelector(props: DateSelectorProps) -> Element {
    let mut form = use_context::<FormState>();
    let mut open = use_signal(|| false);
    let mut selection = use_signal(DateSelection::default);

    let window = BookingWindow::new(props.today);
    let committed = (form.dates)();
    let seed_on_edit = props.config.seed_on_edit;

    let open_fresh = move |_| {
        selection.with_mut(|s| s.clear());
        open.set(true);
    };

    let open_edit = move |_| {
        if seed_on_edit {
            if let Some(trip) = (form.dates)() {
                selection.set(DateSelection::from_trip(&trip));
            }
        }
        open.set(true);
    };

    let handle_select = move |(date, slot): (Option<NaiveDate>, DateSlot)| {
        selection.with_mut(|s| s.select(date, slot));
    };

    let on_next = props.on_next;
    let handle_confirm = move |_| {
        // Unreachable from the UI until both dates are set
        if let Some(trip) = selection().confirm() {
            log::info!(
                "trip dates confirmed: {} to {} ({} days)",
                trip.arrival,
                trip.departure,
                trip.days
            );
            form.dates.set(Some(trip));
            open.set(false);
            on_next.call(());
        }
    };

    let summary = committed.map(|trip| {
        (
            props.config.format.summary_date(&trip.arrival),
            props.config.format.summary_date(&trip.departure),
            trip.days,
        )
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",
            if let Some((arrival_text, departure_text, days)) = summary {
                div {
                    style: "padding: 16px; background: #E8F5E9; border: 1px solid #A5D6A7; border-radius: 8px; display: flex; justify-content: space-between; align-items: center;",
                    div {
                        p {
                            style: "margin: 0 0 4px 0; font-weight: 600; color: #1B5E20;",
                            "Dates selected"
                        }
                        p {
                            style: "margin: 0 0 8px 0; color: #2E7D32;",
                            "Arrival: {arrival_text} | Departure: {departure_text}"
                        }
                        Badge { label: format!("{days} days of travel") }
                    }
                    Button {
                        label: "Change".to_string(),
                        variant: ButtonVariant::Outline,
                        onclick: open_edit,
                    }
                }
            } else {
                Button {
                    label: "Select travel dates".to_string(),
                    full_width: true,
                    onclick: open_fresh,
                }
            }

            Modal {
                open: open(),
                title: "Select trip dates".to_string(),
                on_close: move |_| open.set(false),
                DateSelectionModal {
                    selection: selection(),
                    window: window,
                    format: props.config.format.clone(),
                    on_select: handle_select,
                    on_confirm: handle_confirm,
                    on_cancel: move |_| open.set(false),
                }
            }
        }
    }
}
