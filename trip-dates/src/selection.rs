use crate::trip::TripDates;
use chrono::NaiveDate;

/// Which calendar a pick came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSlot {
    Arrival,
    Departure,
}

/// In-progress, unconfirmed date picks held while the picker dialog is open.
///
/// Invariant: whenever both slots are set, departure is strictly after
/// arrival. Picks that would break this are dropped or clear the other slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
}

impl DateSelection {
    /// Seed the selection from a previously confirmed trip.
    pub fn from_trip(trip: &TripDates) -> DateSelection {
        DateSelection {
            arrival: Some(trip.arrival),
            departure: Some(trip.departure),
        }
    }

    /// Apply a calendar pick. A `None` date is the calendar's deselect
    /// signal and leaves the selection untouched.
    pub fn select(&mut self, date: Option<NaiveDate>, slot: DateSlot) {
        let Some(date) = date else {
            return;
        };
        match slot {
            DateSlot::Arrival => {
                self.arrival = Some(date);
                // Departure must stay strictly after arrival
                if let Some(departure) = self.departure {
                    if departure <= date {
                        self.departure = None;
                    }
                }
            }
            DateSlot::Departure => match self.arrival {
                Some(arrival) if date > arrival => self.departure = Some(date),
                _ => log::debug!(
                    "dropped departure pick {} (arrival: {:?})",
                    date,
                    self.arrival
                ),
            },
        }
    }

    /// Whether both slots are set.
    pub fn is_complete(&self) -> bool {
        self.arrival.is_some() && self.departure.is_some()
    }

    /// Build the confirmed trip, if both dates are picked.
    pub fn confirm(&self) -> Option<TripDates> {
        TripDates::new(self.arrival?, self.departure?)
    }

    /// Reset both slots.
    pub fn clear(&mut self) {
        *self = DateSelection::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_arrival_then_departure() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(5)), DateSlot::Arrival);
        selection.select(Some(date(10)), DateSlot::Departure);
        assert_eq!(selection.arrival, Some(date(5)));
        assert_eq!(selection.departure, Some(date(10)));
        assert!(selection.is_complete());
    }

    #[test]
    fn test_none_pick_is_noop() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(5)), DateSlot::Arrival);
        selection.select(None, DateSlot::Arrival);
        assert_eq!(selection.arrival, Some(date(5)));
    }

    #[test]
    fn test_reselecting_arrival_clears_stale_departure() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(1)), DateSlot::Arrival);
        selection.select(Some(date(3)), DateSlot::Departure);

        // New arrival on or after the departure invalidates it
        selection.select(Some(date(5)), DateSlot::Arrival);
        assert_eq!(selection.arrival, Some(date(5)));
        assert_eq!(selection.departure, None);
    }

    #[test]
    fn test_reselecting_arrival_keeps_later_departure() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(1)), DateSlot::Arrival);
        selection.select(Some(date(10)), DateSlot::Departure);

        selection.select(Some(date(5)), DateSlot::Arrival);
        assert_eq!(selection.departure, Some(date(10)));
    }

    #[test]
    fn test_departure_on_or_before_arrival_is_dropped() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(5)), DateSlot::Arrival);

        selection.select(Some(date(5)), DateSlot::Departure);
        assert_eq!(selection.departure, None);

        selection.select(Some(date(10)), DateSlot::Departure);
        selection.select(Some(date(3)), DateSlot::Departure);
        assert_eq!(selection.departure, Some(date(10)));
    }

    #[test]
    fn test_departure_without_arrival_is_dropped() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(10)), DateSlot::Departure);
        assert_eq!(selection.departure, None);
    }

    #[test]
    fn test_confirm_guarded_on_completeness() {
        let mut selection = DateSelection::default();
        assert_eq!(selection.confirm(), None);

        selection.select(Some(date(5)), DateSlot::Arrival);
        assert_eq!(selection.confirm(), None);

        selection.select(Some(date(10)), DateSlot::Departure);
        let trip = selection.confirm().unwrap();
        assert_eq!(trip.arrival, date(5));
        assert_eq!(trip.departure, date(10));
        assert_eq!(trip.days, 5);
    }

    #[test]
    fn test_clear() {
        let mut selection = DateSelection::default();
        selection.select(Some(date(5)), DateSlot::Arrival);
        selection.select(Some(date(10)), DateSlot::Departure);
        selection.clear();
        assert_eq!(selection, DateSelection::default());
    }

    #[test]
    fn test_from_trip_seeds_both_slots() {
        let trip = TripDates::new(date(5), date(10)).unwrap();
        let selection = DateSelection::from_trip(&trip);
        assert_eq!(selection.arrival, Some(date(5)));
        assert_eq!(selection.departure, Some(date(10)));
    }
}
