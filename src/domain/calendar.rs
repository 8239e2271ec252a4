//! Month arithmetic for ledger keys and commitment tracking.
//!
//! Month labels double as ledger column keys, so they have to match the
//! stored header text exactly. Commitment periods are tracked as an epoch
//! month index rather than a date to make "n months from now" arithmetic
//! trivial.

use chrono::{Datelike, Local};

/// Full month name used as a ledger column key.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Invalid Month",
    }
}

/// Column key for the month the wall clock is in right now.
pub fn current_month_label() -> String {
    month_name(Local::now().month()).to_string()
}

/// Column key for the month before the current one, wrapping across the
/// year boundary.
pub fn previous_month_label() -> String {
    let month = Local::now().month();
    let previous = if month == 1 { 12 } else { month - 1 };
    month_name(previous).to_string()
}

/// Epoch month index: `year * 12 + month`.
pub fn epoch_month(year: i32, month: u32) -> i64 {
    year as i64 * 12 + month as i64
}

/// Epoch month index of the current wall-clock month.
pub fn current_epoch_month() -> i64 {
    let now = Local::now();
    epoch_month(now.year(), now.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_full_english_labels() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Invalid Month");
    }

    #[test]
    fn epoch_month_is_monotonic_across_year_boundaries() {
        assert_eq!(epoch_month(2025, 12) + 1, epoch_month(2026, 1));
    }

    #[test]
    fn current_labels_are_known_months() {
        let labels: Vec<&str> = (1..=12).map(month_name).collect();
        assert!(labels.contains(&current_month_label().as_str()));
        assert!(labels.contains(&previous_month_label().as_str()));
        assert_ne!(current_month_label(), previous_month_label());
    }
}
