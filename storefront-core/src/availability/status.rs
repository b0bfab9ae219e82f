//! Restaurant status
//!
//! Combines the manual toggle with the opening hours.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::models::{RestaurantProfile, RestaurantStatus};

use super::evaluator::is_auto_closed;
use crate::utils::time::{resolve_timezone, to_local};

/// Evaluate a restaurant's status at `now`
///
/// The manual toggle wins; otherwise opening hours are checked in the
/// restaurant's own zone (or `default_tz` when it has none).
pub fn restaurant_status(
    profile: &RestaurantProfile,
    now: &DateTime<Utc>,
    default_tz: Tz,
) -> RestaurantStatus {
    if !profile.is_open {
        return RestaurantStatus::ClosedManually;
    }

    let tz = resolve_timezone(profile.timezone.as_deref(), default_tz);
    if is_auto_closed(&profile.opening_hours, &to_local(now, tz)) {
        RestaurantStatus::ClosedBySchedule
    } else {
        RestaurantStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};
    use shared::models::WeeklySchedule;

    fn profile(is_open: bool, timezone: Option<&str>) -> RestaurantProfile {
        RestaurantProfile {
            id: "r-1".into(),
            name: "Trattoria".into(),
            is_open,
            opening_hours: WeeklySchedule::default().with_day(Weekday::Mon, "12:00", "15:00"),
            timezone: timezone.map(String::from),
        }
    }

    #[test]
    fn test_manual_close_wins() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap();
        assert_eq!(
            restaurant_status(&profile(false, None), &now, Tz::UTC),
            RestaurantStatus::ClosedManually
        );
    }

    #[test]
    fn test_schedule_in_default_zone() {
        let lunch = Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
        assert_eq!(
            restaurant_status(&profile(true, None), &lunch, Tz::UTC),
            RestaurantStatus::Open
        );
        assert_eq!(
            restaurant_status(&profile(true, None), &evening, Tz::UTC),
            RestaurantStatus::ClosedBySchedule
        );
    }

    #[test]
    fn test_restaurant_zone_overrides_default() {
        // 11:30 UTC is 12:30 in Madrid
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap();
        assert_eq!(
            restaurant_status(&profile(true, None), &now, Tz::UTC),
            RestaurantStatus::ClosedBySchedule
        );
        assert_eq!(
            restaurant_status(&profile(true, Some("Europe/Madrid")), &now, Tz::UTC),
            RestaurantStatus::Open
        );
    }
}
