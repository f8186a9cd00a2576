use chrono::{Local, NaiveDate};

/// The current calendar date in the player's local timezone.
///
/// Allowance and interest rules are keyed by calendar date, so this is the
/// single place where wall-clock time becomes a domain date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `start` to `end`. Negative when `end` is before `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Returns `count` consecutive dates starting at `start`.
pub fn consecutive_days(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    start.iter_days().take(count as usize).collect()
}
