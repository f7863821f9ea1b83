//! Weekly availability: validation and recording of a player's submission.

use crate::models::{LeagueSnapshot, PlayerId, PortalError, WeeklyAvailability};
use chrono::{Datelike, NaiveDate, Weekday};

/// Validate a submission and store it, replacing the player's earlier submission for that week.
///
/// Rules: the player exists, the week starts on a Monday, every slot ends after it starts,
/// and no two slots on the same day overlap.
pub fn submit_availability(
    league: &mut LeagueSnapshot,
    submission: WeeklyAvailability,
) -> Result<(), PortalError> {
    if league.player(submission.player_id).is_none() {
        return Err(PortalError::PlayerNotFound(submission.player_id));
    }
    if submission.week_start.weekday() != Weekday::Mon {
        return Err(PortalError::InvalidAvailability(format!(
            "week must start on a Monday, got {}",
            submission.week_start
        )));
    }
    for (i, slot) in submission.slots.iter().enumerate() {
        if slot.from >= slot.to {
            return Err(PortalError::InvalidAvailability(format!(
                "slot on {} ends before it starts",
                slot.day
            )));
        }
        if submission.slots[..i].iter().any(|earlier| earlier.overlaps(slot)) {
            return Err(PortalError::InvalidAvailability(format!(
                "overlapping slots on {}",
                slot.day
            )));
        }
    }

    league
        .availability
        .retain(|a| !(a.player_id == submission.player_id && a.week_start == submission.week_start));
    log::info!(
        "Availability for player {} week {}: {} slot(s)",
        submission.player_id,
        submission.week_start,
        submission.slots.len()
    );
    league.availability.push(submission);
    Ok(())
}

/// The player's submission for a week, if any.
pub fn availability_for(
    league: &LeagueSnapshot,
    player_id: PlayerId,
    week_start: NaiveDate,
) -> Option<&WeeklyAvailability> {
    league
        .availability
        .iter()
        .find(|a| a.player_id == player_id && a.week_start == week_start)
}
