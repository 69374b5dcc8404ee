//! Shared Dioxus components for the trip itinerary wizard.
//!
//! This crate provides:
//! - `state`: Reactive FormState with Dioxus Signals
//! - `components`: Reusable RSX components (date selector, calendar, primitives)

pub mod components;
pub mod state;
