//! Opening Hours Model
//!
//! Weekly opening hours as stored on the restaurant profile. Times travel as
//! zero-padded 24h `"HH:MM"` strings and are compared as minute-of-day.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wire format for times of day
const TIME_FORMAT: &str = "%H:%M";

/// Weekdays in calendar order starting on Monday
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English name used as the schedule key for a weekday
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// A time string that is not a valid `HH:MM` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day '{0}', expected HH:MM")]
pub struct InvalidTimeOfDay(pub String);

/// Time of day with minute precision, stored as minute-of-day (0..=1439)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from a minute-of-day value, `None` when outside `0..1440`
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Minutes elapsed since midnight
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parse an `HH:MM` string; surrounding whitespace is ignored
    pub fn parse(value: &str) -> Result<Self, InvalidTimeOfDay> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
            .ok()
            .and_then(|t| Self::from_hm(t.hour(), t.minute()))
            .ok_or_else(|| InvalidTimeOfDay(value.to_string()))
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validated opening window for one day, `[open, close)`
///
/// `open > close` means the window runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

impl DayWindow {
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self { open, close }
    }

    /// Window spans midnight (e.g. 22:00 - 02:00)
    pub fn is_overnight(&self) -> bool {
        self.open > self.close
    }

    /// `open == close`: zero-length, never open
    pub fn is_empty(&self) -> bool {
        self.open == self.close
    }
}

/// Raw day entry as persisted by the admin dashboard
///
/// Kept as strings so one malformed day never breaks loading the whole
/// schedule. Use [`DayHours::window`] to get the validated form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
}

impl DayHours {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
        }
    }

    /// Validated window, `None` if either bound is missing or not `HH:MM`
    pub fn window(&self) -> Option<DayWindow> {
        let open = TimeOfDay::parse(self.open.as_deref()?).ok()?;
        let close = TimeOfDay::parse(self.close.as_deref()?).ok()?;
        Some(DayWindow::new(open, close))
    }
}

/// Lenient day slot: a wrong JSON type marks the day as unusable instead of
/// failing the whole schedule
///
/// Non-string times keep their JSON text so validation can report them; a
/// day that is not an object becomes an entry with no bounds.
fn lenient_day<'de, D>(deserializer: D) -> Result<Option<DayHours>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        serde_json::Value::Object(map) => DayHours {
            open: map.get("open").and_then(time_text),
            close: map.get("close").and_then(time_text),
        },
        _ => DayHours::default(),
    }))
}

fn time_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<DayWindow> for DayHours {
    fn from(window: DayWindow) -> Self {
        Self::new(window.open.to_string(), window.close.to_string())
    }
}

/// Weekly opening hours keyed by lowercase weekday name
///
/// ```json
/// { "monday": { "open": "09:00", "close": "17:00" }, "friday": { "open": "22:00", "close": "02:00" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklySchedule {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub monday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub tuesday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub wednesday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub thursday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub friday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub saturday: Option<DayHours>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_day")]
    pub sunday: Option<DayHours>,
}

impl WeeklySchedule {
    /// Raw entry for a weekday
    pub fn get(&self, day: Weekday) -> Option<&DayHours> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    pub fn set(&mut self, day: Weekday, hours: Option<DayHours>) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = hours;
    }

    /// Builder form of [`WeeklySchedule::set`]
    pub fn with_day(mut self, day: Weekday, open: &str, close: &str) -> Self {
        self.set(day, Some(DayHours::new(open, close)));
        self
    }

    /// Validated window for a weekday
    pub fn window(&self, day: Weekday) -> Option<DayWindow> {
        self.get(day).and_then(DayHours::window)
    }

    /// All valid windows, Monday first
    pub fn windows(&self) -> Vec<(Weekday, DayWindow)> {
        WEEKDAYS
            .iter()
            .filter_map(|&day| self.window(day).map(|w| (day, w)))
            .collect()
    }

    /// No day has an entry at all
    pub fn is_empty(&self) -> bool {
        WEEKDAYS.iter().all(|&day| self.get(day).is_none())
    }
}
