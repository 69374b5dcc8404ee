use chrono::{Local, NaiveDate};

/// Source of the current date. The UI reads "today" through this rather
/// than from an ambient global, so booking windows can be pinned in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::BookingWindow;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_pins_the_window() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let clock = FixedClock(today);
        assert_eq!(clock.today(), today);

        let window = BookingWindow::new(clock.today());
        assert_eq!(window.today(), today);
        assert_eq!(window.latest(), NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    }
}
