//! Reusable Dioxus RSX components for the trip itinerary wizard.

mod badge;
mod button;
mod calendar;
mod date_selection_modal;
mod date_selector;
mod modal;
mod wizard_header;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use calendar::Calendar;
pub use date_selection_modal::DateSelectionModal;
pub use date_selector::{DateSelector, SelectorConfig};
pub use modal::Modal;
pub use wizard_header::WizardHeader;
