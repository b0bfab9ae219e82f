//! Restaurant Profile Model

use super::schedule::WeeklySchedule;
use serde::{Deserialize, Serialize};

/// Restaurant profile as managed from the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Manual open/closed toggle set by the restaurant
    #[serde(default = "default_is_open")]
    pub is_open: bool,
    #[serde(default)]
    pub opening_hours: WeeklySchedule,
    /// IANA time zone (e.g. "Europe/Madrid"); the business default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

fn default_is_open() -> bool {
    true
}

/// Why a restaurant is or is not taking orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantStatus {
    Open,
    /// The restaurant switched itself off
    ClosedManually,
    /// Outside opening hours, or no valid hours for today
    ClosedBySchedule,
}

impl RestaurantStatus {
    pub fn accepts_orders(&self) -> bool {
        matches!(self, RestaurantStatus::Open)
    }
}
