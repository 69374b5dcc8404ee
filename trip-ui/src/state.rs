//! Wizard form state managed via Dioxus context.
//!
//! `FormState` bundles the outputs the wizard steps commit into reactive
//! signals provided via `use_context_provider`. Steps retrieve it with
//! `use_context::<FormState>()`; each step writes only its own field, so
//! a commit never disturbs what other steps have stored.

use dioxus::prelude::*;
use trip_dates::trip::TripDates;

/// Shared form state accumulated across the wizard steps.
#[derive(Clone, Copy)]
pub struct FormState {
    /// Confirmed trip date range (None until the dates step commits)
    pub dates: Signal<Option<TripDates>>,
}

impl FormState {
    /// Create a new FormState with nothing committed yet.
    pub fn new() -> Self {
        Self {
            dates: Signal::new(None),
        }
    }
}
