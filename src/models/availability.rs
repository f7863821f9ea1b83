//! Weekly availability submitted by a player.

use crate::models::player::PlayerId;
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One window of time on a weekday.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: Weekday,
    pub from: NaiveTime,
    pub to: NaiveTime,
}

impl AvailabilitySlot {
    /// True when both slots are on the same day and their windows intersect.
    pub fn overlaps(&self, other: &AvailabilitySlot) -> bool {
        self.day == other.day && self.from < other.to && other.from < self.to
    }
}

/// A player's availability for the week starting on `week_start` (a Monday).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub player_id: PlayerId,
    pub week_start: NaiveDate,
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,
    #[serde(default)]
    pub note: Option<String>,
}
