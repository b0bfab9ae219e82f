//! Opening Hours Evaluator
//!
//! Decides whether a restaurant is auto-closed at a given instant.
//! Missing or malformed hours always resolve to closed.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use shared::models::{DayWindow, WeeklySchedule, weekday_key};

/// Minutes since local midnight, in the zone `now` carries
#[inline]
pub fn minute_of_day<Z: TimeZone>(now: &DateTime<Z>) -> u16 {
    (now.hour() * 60 + now.minute()) as u16
}

/// Check whether `[open, close)` contains `minute`
///
/// Overnight windows (open > close) wrap past midnight. `open == close`
/// is empty.
pub fn is_within_window(window: &DayWindow, minute: u16) -> bool {
    let open = window.open.minutes();
    let close = window.close.minutes();

    if window.is_overnight() {
        minute >= open || minute < close
    } else {
        minute >= open && minute < close
    }
}

/// Check if a restaurant is auto-closed at `now`
///
/// Only the entry for `now`'s weekday is consulted. Returns `true` when that
/// entry is absent or either bound is missing or not `HH:MM`.
pub fn is_auto_closed<Z: TimeZone>(schedule: &WeeklySchedule, now: &DateTime<Z>) -> bool {
    let day = now.weekday();

    let Some(window) = schedule.window(day) else {
        if schedule.get(day).is_some() {
            tracing::warn!(
                day = weekday_key(day),
                "Malformed opening hours, treating restaurant as closed"
            );
        }
        return true;
    };

    let current = minute_of_day(now);
    let open = is_within_window(&window, current);

    tracing::trace!(
        day = weekday_key(day),
        open = %window.open,
        close = %window.close,
        current,
        is_open = open,
        "Evaluated opening hours"
    );

    !open
}

/// [`is_auto_closed`] against the wall clock in `tz`
pub fn is_auto_closed_now(schedule: &WeeklySchedule, tz: Tz) -> bool {
    is_auto_closed(schedule, &Utc::now().with_timezone(&tz))
}
