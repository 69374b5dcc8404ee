use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Milliseconds in one 24-hour day.
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A confirmed trip date range.
///
/// Invariants: `departure` is strictly after `arrival`, and `days` is
/// `trip_length(arrival, departure)`. Both are guaranteed by [`TripDates::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDates {
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    /// Trip length in days, derived from the two dates.
    pub days: i64,
}

impl TripDates {
    /// Build a trip from an ordered date pair.
    /// Returns `None` unless `departure` is strictly after `arrival`.
    pub fn new(arrival: NaiveDate, departure: NaiveDate) -> Option<TripDates> {
        if departure > arrival {
            Some(TripDates {
                arrival,
                departure,
                days: trip_length(arrival, departure),
            })
        } else {
            None
        }
    }
}

/// Trip length in days: the ceiling of the elapsed time between the two
/// dates, measured in 24-hour units rather than calendar days.
pub fn trip_length(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    let elapsed = departure.signed_duration_since(arrival);
    (elapsed.num_milliseconds().abs() as u64).div_ceil(DAY_MS as u64) as i64
}
