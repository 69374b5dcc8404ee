use chrono::{Months, NaiveDate};

/// The selectable booking window: today through one year out, inclusive
/// on both ends.
///
/// Exposed as disabled-date predicates so calendars can stay generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    today: NaiveDate,
    latest: NaiveDate,
}

impl BookingWindow {
    /// Window starting at `today` and ending one year later.
    /// A Feb 29 start clamps to Feb 28 of the following year.
    pub fn new(today: NaiveDate) -> BookingWindow {
        let latest = today.checked_add_months(Months::new(12)).unwrap();
        BookingWindow { today, latest }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Whether `date` is out of range for an arrival pick.
    pub fn arrival_disabled(&self, date: NaiveDate) -> bool {
        date < self.today || date > self.latest
    }

    /// Whether `date` is out of range for a departure pick, given the
    /// current arrival. Every date is disabled until an arrival is chosen;
    /// after that, dates on or before the arrival are disabled.
    pub fn departure_disabled(&self, date: NaiveDate, arrival: Option<NaiveDate>) -> bool {
        match arrival {
            None => true,
            Some(arrival) => date <= arrival || date > self.latest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_arrival_bounds() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let window = BookingWindow::new(today);

        assert!(window.arrival_disabled(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()));
        assert!(!window.arrival_disabled(today));
        assert!(!window.arrival_disabled(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()));
        assert!(window.arrival_disabled(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()));
    }

    #[test]
    fn test_departure_disabled_until_arrival_chosen() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let window = BookingWindow::new(today);

        assert!(window.departure_disabled(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), None));
        assert!(window.departure_disabled(today, None));
    }

    #[test]
    fn test_departure_bounds_with_arrival() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let arrival = Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let window = BookingWindow::new(today);

        assert!(window.departure_disabled(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), arrival));
        assert!(window.departure_disabled(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(), arrival));
        assert!(!window.departure_disabled(NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(), arrival));
        assert!(!window.departure_disabled(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(), arrival));
        assert!(window.departure_disabled(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(), arrival));
    }

    #[test]
    fn test_leap_day_horizon_clamps() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let window = BookingWindow::new(today);
        assert_eq!(window.latest(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}
