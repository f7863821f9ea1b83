//! Stats aggregation: fold decided matches into per-player stats and order them for the ranking.

use crate::logic::points::PointsCalculator;
use crate::models::{GameMatch, MatchStatus, Player, PlayerId, PlayerStat, Side, TournamentId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Matches below this count are averaged as if this many had been played.
pub const MIN_MATCHES_FOR_AVERAGE: u32 = 8;

/// Losers conceding at most this many games in a straight-sets loss give the winner a bonus.
const BONUS_MAX_GAMES_CONCEDED: u32 = 3;

/// Matches that count towards a tournament ranking: same tournament and already decided.
pub fn ranking_matches(matches: &[GameMatch], tournament_id: TournamentId) -> Vec<GameMatch> {
    matches
        .iter()
        .filter(|m| m.tournament_id == Some(tournament_id) && m.is_decided())
        .cloned()
        .collect()
}

/// Build one `PlayerStat` per player with an id, sorted in ranking order.
///
/// 1. Zeroed stats per player (first row wins on duplicate ids).
/// 2. Fold each decided match whose two primary players resolve; other matches are skipped.
/// 3. Compute differentials and averages.
/// 4. Stable sort: played players by promedio, point diff, set diff, game diff, total points
///    (all descending); players with no matches last.
pub fn compute_player_stats(
    players: &[Player],
    matches: &[GameMatch],
    calculator: &impl PointsCalculator,
) -> Vec<PlayerStat> {
    let mut stats: Vec<PlayerStat> = Vec::with_capacity(players.len());
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(players.len());
    for player in players {
        let Some(stat) = PlayerStat::zeroed(player) else {
            continue;
        };
        if index.contains_key(&stat.player_id) {
            continue;
        }
        index.insert(stat.player_id, stats.len());
        stats.push(stat);
    }

    let mut skipped = 0usize;
    for game in matches {
        let a = index.get(&game.sides.primary(Side::A)).copied();
        let b = index.get(&game.sides.primary(Side::B)).copied();
        match (a, b, game.winner_side()) {
            (Some(a), Some(b), Some(winner)) if a != b => {
                apply_match(&mut stats, a, b, game, winner, calculator)
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("Skipped {} match(es) with unresolved players or no winner", skipped);
    }

    for stat in &mut stats {
        finalize(stat);
    }
    stats.sort_by(ranking_order);
    stats
}

/// Apply a single match to the stats at indices `a` (side A) and `b` (side B).
fn apply_match(
    stats: &mut [PlayerStat],
    a: usize,
    b: usize,
    game: &GameMatch,
    winner: Side,
    calculator: &impl PointsCalculator,
) {
    let (points_a, points_b) = calculator.points(game);
    for (idx, side, points) in [(a, Side::A, points_a), (b, Side::B, points_b)] {
        let stat = &mut stats[idx];
        stat.matches_played += 1;
        stat.games_won += game.games_won(side);
        stat.games_lost += game.games_won(side.other());
        stat.sets_won += game.sets_won(side);
        stat.sets_lost += game.sets_won(side.other());
        stat.total_points += points;
        if side == winner {
            stat.wins += 1;
        } else {
            stat.losses += 1;
        }
    }

    if game.status == MatchStatus::CompletedByForfeit {
        return;
    }
    let loser = winner.other();
    let loser_sets = game.sets_won(loser);
    let (winner_idx, loser_idx) = match winner {
        Side::A => (a, b),
        Side::B => (b, a),
    };
    if loser_sets == 0 && game.games_won(loser) <= BONUS_MAX_GAMES_CONCEDED {
        stats[winner_idx].bonus_count += 1;
    }
    if loser_sets == 1 {
        stats[loser_idx].bonus_count += 1;
    }
}

fn finalize(stat: &mut PlayerStat) {
    stat.point_diff = stat.wins as i32 - stat.losses as i32;
    stat.set_diff = stat.sets_won as i32 - stat.sets_lost as i32;
    stat.game_diff = stat.games_won as i32 - stat.games_lost as i32;
    if stat.matches_played == 0 {
        stat.parcial = 0.0;
        stat.promedio = 0.0;
        return;
    }
    let denominator = stat.matches_played.max(MIN_MATCHES_FOR_AVERAGE);
    stat.parcial = f64::from(stat.total_points) / f64::from(stat.matches_played);
    stat.promedio = f64::from(stat.total_points) / f64::from(denominator);
}

/// Ranking comparator. Equal players compare `Equal` so a stable sort keeps input order.
pub fn ranking_order(a: &PlayerStat, b: &PlayerStat) -> Ordering {
    match (a.has_played(), b.has_played()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => b
            .promedio
            .total_cmp(&a.promedio)
            .then(b.point_diff.cmp(&a.point_diff))
            .then(b.set_diff.cmp(&a.set_diff))
            .then(b.game_diff.cmp(&a.game_diff))
            .then(b.total_points.cmp(&a.total_points)),
    }
}
