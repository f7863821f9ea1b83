//! Match table: a player's matches grouped by date and venue, with display fields per match.
//!
//! Used for both the pending list (undecided) and the history list (decided).

use crate::logic::contrast::{team_text_color, TextColor};
use crate::logic::points::PointsCalculator;
use crate::logic::ranking_table::PLACEHOLDER_LOGO;
use crate::models::{GameMatch, LeagueSnapshot, MatchId, MatchStatus, PlayerId, Side};
use chrono::NaiveDate;
use serde::Serialize;

/// Separator between venue and court in the location text.
const LOCATION_SEPARATOR: &str = " - ";
pub const UNDEFINED_VENUE: &str = "undefined venue";
pub const NO_DATE: &str = "no date";
pub const NO_COURT: &str = "N/A";
pub const UNKNOWN_PLAYER: &str = "Unknown player";
const UNKNOWN_CATEGORY: &str = "-";
const DEFAULT_TEAM_COLOR: &str = "#ffffff";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner,
    Loser,
}

/// One side of a match line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SideCell {
    /// Player names, joined with " / " for doubles.
    pub names: String,
    pub team_color: String,
    pub text_color: TextColor,
    /// Points for decided matches ("0" shown explicitly).
    pub points: Option<String>,
    /// Team logo for undecided matches.
    pub logo: Option<String>,
    pub outcome: Option<Outcome>,
    pub small_font: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchLine {
    pub match_id: MatchId,
    pub court: String,
    pub time: Option<String>,
    pub category: String,
    pub doubles: bool,
    pub status: MatchStatus,
    pub side_a: SideCell,
    pub side_b: SideCell,
    /// Each set as "x/y", winner-first when side B won.
    pub sets: Vec<String>,
    pub result: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VenueGroup {
    pub venue: String,
    pub matches: Vec<MatchLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DateGroup {
    /// Raw date string, or "no date".
    pub date: String,
    pub venues: Vec<VenueGroup>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchTable {
    pub groups: Vec<DateGroup>,
    /// Set when there is nothing to show.
    pub empty_message: Option<String>,
}

impl MatchTable {
    pub fn lines(&self) -> impl Iterator<Item = &MatchLine> {
        self.groups
            .iter()
            .flat_map(|g| g.venues.iter())
            .flat_map(|v| v.matches.iter())
    }
}

/// Undecided matches (no winner yet).
pub fn pending_matches(matches: &[GameMatch]) -> Vec<GameMatch> {
    matches.iter().filter(|m| !m.is_decided()).cloned().collect()
}

/// Decided matches.
pub fn history_matches(matches: &[GameMatch]) -> Vec<GameMatch> {
    matches.iter().filter(|m| m.is_decided()).cloned().collect()
}

/// Split a location into (venue, court). Venue is the text before the first " - ",
/// court the first integer after it.
pub fn parse_location(location: Option<&str>) -> (String, String) {
    let Some((venue, rest)) = location.and_then(|l| l.split_once(LOCATION_SEPARATOR)) else {
        return (UNDEFINED_VENUE.to_string(), NO_COURT.to_string());
    };
    let venue = venue.trim();
    let venue = if venue.is_empty() { UNDEFINED_VENUE } else { venue };
    let digits: String = rest
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let court = match digits.parse::<u32>() {
        Ok(n) => n.to_string(),
        Err(_) => NO_COURT.to_string(),
    };
    (venue.to_string(), court)
}

/// Sets as "a/b", flipped to winner-first when side B won.
pub fn display_sets(game: &GameMatch) -> Vec<String> {
    let flip = game.winner_side() == Some(Side::B);
    game.sets
        .iter()
        .map(|s| {
            if flip {
                format!("{}/{}", s.1, s.0)
            } else {
                format!("{}/{}", s.0, s.1)
            }
        })
        .collect()
}

/// Result label: "W.O." for forfeits, "Suspended", "<sets> ret." for retirements, else the sets.
pub fn result_label(game: &GameMatch) -> String {
    let sets = display_sets(game).join(" ");
    match game.status {
        MatchStatus::CompletedByForfeit => "W.O.".to_string(),
        MatchStatus::Suspended => "Suspended".to_string(),
        MatchStatus::CompletedByRetirement => format!("{} ret.", sets),
        _ => sets,
    }
}

/// Render matches grouped by date (ascending by parsed date) then venue (first appearance).
pub fn render_match_table(
    matches: &[GameMatch],
    league: &LeagueSnapshot,
    calculator: &impl PointsCalculator,
    empty_message: &str,
) -> MatchTable {
    if matches.is_empty() {
        return MatchTable {
            groups: Vec::new(),
            empty_message: Some(empty_message.to_string()),
        };
    }

    let mut groups: Vec<DateGroup> = Vec::new();
    for game in matches {
        let date = game
            .match_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DATE);
        let (venue, court) = parse_location(game.location.as_deref());
        let line = render_line(game, court, league, calculator);

        let group_idx = match groups.iter().position(|g| g.date == date) {
            Some(i) => i,
            None => {
                groups.push(DateGroup {
                    date: date.to_string(),
                    venues: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let venues = &mut groups[group_idx].venues;
        match venues.iter_mut().find(|v| v.venue == venue) {
            Some(v) => v.matches.push(line),
            None => venues.push(VenueGroup {
                venue,
                matches: vec![line],
            }),
        }
    }

    groups.sort_by_key(|g| date_sort_key(&g.date));
    MatchTable {
        groups,
        empty_message: None,
    }
}

/// Parsed dates first in ascending order, then unparseable strings, then "no date".
fn date_sort_key(date: &str) -> (u8, Option<NaiveDate>) {
    if date == NO_DATE {
        return (2, None);
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => (0, Some(d)),
        Err(_) => (1, None),
    }
}

fn render_line(
    game: &GameMatch,
    court: String,
    league: &LeagueSnapshot,
    calculator: &impl PointsCalculator,
) -> MatchLine {
    let doubles = game.sides.is_doubles();
    let winner = game.winner_side();
    let points = winner.map(|_| calculator.points(game));
    let side_cell = |side: Side| {
        let ids = game.sides.players(side);
        let names = ids
            .iter()
            .map(|&id| player_name(league, id))
            .collect::<Vec<_>>()
            .join(" / ");
        let primary = league.player(game.sides.primary(side));
        let team_color = primary
            .and_then(|p| p.team_color())
            .unwrap_or(DEFAULT_TEAM_COLOR)
            .to_string();
        let logo = primary
            .and_then(|p| p.team_image())
            .unwrap_or(PLACEHOLDER_LOGO)
            .to_string();
        SideCell {
            names,
            text_color: team_text_color(&team_color),
            team_color,
            points: points.map(|(a, b)| match side {
                Side::A => a.to_string(),
                Side::B => b.to_string(),
            }),
            logo: if points.is_some() { None } else { Some(logo) },
            outcome: winner.map(|w| if w == side { Outcome::Winner } else { Outcome::Loser }),
            small_font: doubles,
        }
    };
    MatchLine {
        match_id: game.id,
        court,
        time: game.match_time.clone(),
        category: game
            .category_id
            .and_then(|c| league.category(c))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        doubles,
        status: game.status,
        side_a: side_cell(Side::A),
        side_b: side_cell(Side::B),
        sets: display_sets(game),
        result: result_label(game),
    }
}

fn player_name(league: &LeagueSnapshot, id: PlayerId) -> String {
    league
        .player(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
}
