//! Opening hours validation for admin writes
//!
//! The evaluator tolerates bad data and fails closed; the save path is
//! strict so the dashboard can show the restaurant what to fix.

use shared::error::{AppError, AppResult};
use shared::models::{TimeOfDay, WEEKDAYS, WeeklySchedule, weekday_key};

/// Reject any present day entry with a missing or malformed bound
pub fn validate_schedule(schedule: &WeeklySchedule) -> AppResult<()> {
    for day in WEEKDAYS {
        let Some(hours) = schedule.get(day) else {
            continue;
        };
        let key = weekday_key(day);

        for (field, value) in [("open", &hours.open), ("close", &hours.close)] {
            let Some(value) = value else {
                return Err(AppError::invalid_schedule(
                    key,
                    format!("{}: {} time is required", key, field),
                )
                .with_detail("field", field));
            };

            if TimeOfDay::parse(value).is_err() {
                return Err(AppError::invalid_schedule(
                    key,
                    format!("{}: {} time '{}' is not a valid HH:MM time", key, field, value),
                )
                .with_detail("field", field)
                .with_detail("value", value.as_str()));
            }
        }
    }

    Ok(())
}
