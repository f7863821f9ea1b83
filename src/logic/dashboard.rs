//! Player dashboard: own ranking position and stats, plus pending and history match tables.

use crate::logic::aggregate::{compute_player_stats, ranking_matches};
use crate::logic::match_table::{history_matches, pending_matches, render_match_table, MatchTable};
use crate::logic::points::PointsCalculator;
use crate::models::{
    GameMatch, LeagueSnapshot, PlayerId, PlayerStat, PortalError, TournamentId,
};
use serde::Serialize;

pub const NO_PENDING_MESSAGE: &str = "No pending matches";
pub const NO_HISTORY_MESSAGE: &str = "No matches played yet";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerDashboard {
    pub player_id: PlayerId,
    pub name: String,
    pub category: Option<String>,
    /// 1-based position in the category ranking.
    pub rank: Option<usize>,
    pub stats: Option<PlayerStat>,
    pub pending: MatchTable,
    pub history: MatchTable,
}

/// Build the dashboard of one player for a tournament.
///
/// The ranking is computed over the player's whole category so the rank matches the public table.
pub fn player_dashboard(
    league: &LeagueSnapshot,
    player_id: PlayerId,
    tournament_id: TournamentId,
    calculator: &impl PointsCalculator,
) -> Result<PlayerDashboard, PortalError> {
    let player = league
        .player(player_id)
        .ok_or(PortalError::PlayerNotFound(player_id))?;
    if league.tournament(tournament_id).is_none() {
        return Err(PortalError::TournamentNotFound(tournament_id));
    }

    let (rank, stats) = match player.category_id {
        Some(category_id) => {
            let ranked = compute_player_stats(
                &league.players_in_category(category_id),
                &ranking_matches(&league.matches, tournament_id),
                calculator,
            );
            ranked
                .into_iter()
                .enumerate()
                .find(|(_, s)| s.player_id == player_id)
                .map(|(idx, s)| (Some(idx + 1), Some(s)))
                .unwrap_or((None, None))
        }
        None => (None, None),
    };

    let own: Vec<GameMatch> = league
        .matches_of_player(player_id)
        .into_iter()
        .filter(|m| m.tournament_id == Some(tournament_id))
        .collect();

    Ok(PlayerDashboard {
        player_id,
        name: player.name.clone(),
        category: player
            .category_id
            .and_then(|c| league.category(c))
            .map(|c| c.name.clone()),
        rank,
        stats,
        pending: render_match_table(&pending_matches(&own), league, calculator, NO_PENDING_MESSAGE),
        history: render_match_table(&history_matches(&own), league, calculator, NO_HISTORY_MESSAGE),
    })
}
