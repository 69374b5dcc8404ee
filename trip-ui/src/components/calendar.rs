//! Single-date month-grid calendar with a disabled-date predicate.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use dioxus::prelude::*;

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Props, Clone, PartialEq)]
pub struct CalendarProps {
    /// Currently selected date, if any
    pub selected: Option<NaiveDate>,
    /// Month shown when the calendar first renders (any date within it)
    pub initial_month: NaiveDate,
    /// Predicate marking dates that cannot be picked
    pub disabled: Callback<NaiveDate, bool>,
    /// Reports `Some(date)` on a pick, `None` when the selected date is
    /// clicked again (deselect)
    pub on_select: EventHandler<Option<NaiveDate>>,
}

/// One-month calendar grid in single-date mode.
///
/// Month navigation is view state only; it never changes the selection.
#[component]
pub fn Calendar(props: CalendarProps) -> Element {
    let mut view_month = use_signal(|| first_of_month(props.initial_month));
    let month = view_month();
    let month_label = month.format("%B %Y").to_string();
    let weeks = month_weeks(month.year(), month.month());

    let nav_style = "border: 1px solid #E0E0E0; background: #FFFFFF; border-radius: 6px; width: 28px; height: 28px; cursor: pointer; color: #455A64;";

    rsx! {
        div {
            style: "border: 1px solid #E0E0E0; border-radius: 8px; padding: 12px; display: inline-block; background: #FFFFFF;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                button {
                    style: "{nav_style}",
                    onclick: move |_| view_month.set(prev_month(view_month())),
                    "\u{2039}"
                }
                span {
                    style: "font-weight: 600; font-size: 14px;",
                    "{month_label}"
                }
                button {
                    style: "{nav_style}",
                    onclick: move |_| view_month.set(next_month(view_month())),
                    "\u{203A}"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(7, 36px); gap: 2px; margin-bottom: 4px;",
                for label in WEEKDAY_LABELS.iter() {
                    span {
                        style: "text-align: center; font-size: 11px; color: #90A4AE;",
                        "{label}"
                    }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(7, 36px); gap: 2px;",
                for week in weeks.iter() {
                    for day in week.iter().copied() {
                        {day_cell(day, month, props.selected, props.disabled, props.on_select)}
                    }
                }
            }
        }
    }
}

/// A single day button in the grid.
fn day_cell(
    day: NaiveDate,
    view_month: NaiveDate,
    selected: Option<NaiveDate>,
    disabled: Callback<NaiveDate, bool>,
    on_select: EventHandler<Option<NaiveDate>>,
) -> Element {
    let in_month = day.month() == view_month.month() && day.year() == view_month.year();
    let is_disabled = disabled.call(day);
    let is_selected = selected == Some(day);

    let day_style = if is_selected {
        "background: #1565C0; color: #FFFFFF; cursor: pointer;"
    } else if is_disabled {
        "background: none; color: #CFD8DC; cursor: default;"
    } else if in_month {
        "background: none; color: #263238; cursor: pointer;"
    } else {
        "background: none; color: #B0BEC5; cursor: pointer;"
    };
    let label = day.day().to_string();

    rsx! {
        button {
            style: "width: 36px; height: 32px; border: none; border-radius: 6px; font-size: 13px; {day_style}",
            disabled: is_disabled,
            onclick: move |_| {
                if is_selected {
                    on_select.call(None);
                } else {
                    on_select.call(Some(day));
                }
            },
            "{label}"
        }
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

fn prev_month(month: NaiveDate) -> NaiveDate {
    first_of_month(month).checked_sub_months(Months::new(1)).unwrap()
}

fn next_month(month: NaiveDate) -> NaiveDate {
    first_of_month(month).checked_add_months(Months::new(1)).unwrap()
}

/// Sunday-first weeks covering the given month. Leading and trailing
/// out-of-month days fill the first and last weeks.
fn month_weeks(year: i32, month: u32) -> Vec<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let last = next_month(first).pred_opt().unwrap();

    let mut cursor = first;
    while cursor.weekday() != Weekday::Sun {
        cursor = cursor.pred_opt().unwrap();
    }

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            week.push(cursor);
            cursor = cursor.succ_opt().unwrap();
        }
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_weeks_june_2024() {
        // June 1, 2024 is a Saturday, so the grid spans six weeks
        let weeks = month_weeks(2024, 6);
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|week| week.len() == 7));
        assert_eq!(weeks[0][0], NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());
        assert_eq!(weeks[5][6], NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
    }

    #[test]
    fn test_month_weeks_starts_on_sunday() {
        let weeks = month_weeks(2021, 2);
        assert_eq!(weeks.len(), 5);
        for week in &weeks {
            assert_eq!(week[0].weekday(), Weekday::Sun);
        }
        assert_eq!(weeks[0][0], NaiveDate::from_ymd_opt(2021, 1, 31).unwrap());
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(next_month(jan31), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(prev_month(jan31), NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
    }
}
