//! Integration tests for stats aggregation and ranking order.

use league_portal::{
    compute_player_stats, ranking_matches, GameMatch, LeaguePoints, MatchSides, MatchStatus,
    Player, PlayerId, PlayerStat, SetScore,
};
use uuid::Uuid;

fn players(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

fn id(p: &Player) -> PlayerId {
    p.id.unwrap()
}

/// Decided singles match between `a` (side A) and `b` (side B).
fn played(a: &Player, b: &Player, sets: &[(u32, u32)], winner: &Player) -> GameMatch {
    let mut m = GameMatch::singles(id(a), id(b));
    m.sets = sets.iter().map(|&(x, y)| SetScore(x, y)).collect();
    m.status = MatchStatus::Completed;
    m.winner_id = Some(id(winner));
    m
}

fn stat<'a>(stats: &'a [PlayerStat], p: &Player) -> &'a PlayerStat {
    stats.iter().find(|s| s.player_id == id(p)).unwrap()
}

fn order(stats: &[PlayerStat]) -> Vec<PlayerId> {
    stats.iter().map(|s| s.player_id).collect()
}

#[test]
fn two_players_one_match_counts_sets_and_games() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(6, 2), (6, 4)], &ps[0]);
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());

    let p1 = stat(&stats, &ps[0]);
    assert_eq!(
        (p1.matches_played, p1.wins, p1.losses, p1.sets_won, p1.sets_lost, p1.games_won, p1.games_lost),
        (1, 1, 0, 2, 0, 12, 6)
    );
    let p2 = stat(&stats, &ps[1]);
    assert_eq!(
        (p2.matches_played, p2.wins, p2.losses, p2.sets_won, p2.sets_lost, p2.games_won, p2.games_lost),
        (1, 0, 1, 0, 2, 6, 12)
    );
    // Loser conceded 6 games, no bonus either way.
    assert_eq!(p1.bonus_count, 0);
    assert_eq!(p2.bonus_count, 0);
    assert_eq!(order(&stats), vec![id(&ps[0]), id(&ps[1])]);
}

#[test]
fn sets_won_add_up_to_number_of_sets() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(6, 4), (3, 6), (7, 5)], &ps[0]);
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    let total: u32 = stats.iter().map(|s| s.sets_won).sum();
    assert_eq!(total, 3);
}

#[test]
fn winner_gets_bonus_for_straight_sets_with_three_games_conceded() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(6, 0), (6, 3)], &ps[0]);
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    assert_eq!(stat(&stats, &ps[0]).bonus_count, 1);
    assert_eq!(stat(&stats, &ps[1]).bonus_count, 0);
}

#[test]
fn loser_with_one_set_gets_bonus() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(6, 4), (3, 6), (6, 2)], &ps[0]);
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    assert_eq!(stat(&stats, &ps[0]).bonus_count, 0);
    assert_eq!(stat(&stats, &ps[1]).bonus_count, 1);
}

#[test]
fn side_b_winner_gets_bonus_too() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(1, 6), (2, 6)], &ps[1]);
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    assert_eq!(stat(&stats, &ps[1]).bonus_count, 1);
    assert_eq!(stat(&stats, &ps[1]).wins, 1);
    assert_eq!(stat(&stats, &ps[0]).losses, 1);
}

#[test]
fn forfeit_skips_bonus() {
    let ps = players(2);
    let mut m = played(&ps[0], &ps[1], &[(6, 0), (6, 0)], &ps[0]);
    m.status = MatchStatus::CompletedByForfeit;
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    assert_eq!(stat(&stats, &ps[0]).bonus_count, 0);
    assert_eq!(stat(&stats, &ps[0]).wins, 1);
}

#[test]
fn doubles_winner_on_secondary_slot_counts_for_side_a() {
    let ps = players(4);
    let mut m = GameMatch::new(MatchSides::Doubles {
        player1: id(&ps[0]),
        player2: id(&ps[1]),
        player3: id(&ps[2]),
        player4: id(&ps[3]),
    });
    m.sets = vec![SetScore(6, 4), SetScore(6, 4)];
    m.status = MatchStatus::Completed;
    m.winner_id = Some(id(&ps[2]));
    let stats = compute_player_stats(&ps, &[m], &LeaguePoints::default());
    assert_eq!(stat(&stats, &ps[0]).wins, 1);
    assert_eq!(stat(&stats, &ps[1]).losses, 1);
    // Only primary players are folded.
    assert_eq!(stat(&stats, &ps[2]).matches_played, 0);
}

#[test]
fn points_come_from_calculator() {
    let ps = players(2);
    let m = played(&ps[0], &ps[1], &[(6, 2), (6, 4)], &ps[0]);
    let stats = compute_player_stats(&ps, &[m], &|_: &GameMatch| (5u32, 2u32));
    let p1 = stat(&stats, &ps[0]);
    assert_eq!(p1.total_points, 5);
    assert_eq!(p1.parcial, 5.0);
    assert_eq!(p1.promedio, 5.0 / 8.0);
    assert_eq!(stat(&stats, &ps[1]).total_points, 2);
}

#[test]
fn promedio_uses_played_count_above_eight() {
    let ps = players(2);
    let matches: Vec<GameMatch> = (0..10)
        .map(|_| played(&ps[0], &ps[1], &[(6, 2), (6, 4)], &ps[0]))
        .collect();
    let stats = compute_player_stats(&ps, &matches, &|_: &GameMatch| (3u32, 1u32));
    let p1 = stat(&stats, &ps[0]);
    assert_eq!(p1.matches_played, 10);
    assert_eq!(p1.promedio, 3.0);
    assert_eq!(p1.parcial, 3.0);
}

#[test]
fn unresolved_matches_are_skipped() {
    let ps = players(2);
    let stranger = Player::new("Stranger");
    let foreign = played(&ps[0], &stranger, &[(6, 0), (6, 0)], &ps[0]);
    let mut undecided = played(&ps[0], &ps[1], &[], &ps[0]);
    undecided.winner_id = None;
    let stats = compute_player_stats(&ps, &[foreign, undecided], &LeaguePoints::default());
    assert_eq!(stats.len(), 2);
    assert!(stats.iter().all(|s| s.matches_played == 0));
}

#[test]
fn players_without_id_or_duplicated_are_not_ranked() {
    let mut ps = players(2);
    ps.push(Player {
        id: None,
        ..Player::new("No id")
    });
    ps.push(ps[0].clone());
    let stats = compute_player_stats(&ps, &[], &LeaguePoints::default());
    assert_eq!(stats.len(), 2);
}

#[test]
fn unplayed_players_have_zero_derived_fields_and_sort_last() {
    let ps = players(3);
    // P2 only loses, P0 never plays, P1 wins.
    let m = played(&ps[1], &ps[2], &[(6, 0), (6, 0)], &ps[1]);
    let stats = compute_player_stats(&ps, &[m], &|_: &GameMatch| (3u32, 0u32));
    assert_eq!(order(&stats), vec![id(&ps[1]), id(&ps[2]), id(&ps[0])]);
    let idle = stat(&stats, &ps[0]);
    assert_eq!(idle.promedio, 0.0);
    assert_eq!(idle.parcial, 0.0);
    assert_eq!((idle.point_diff, idle.set_diff, idle.game_diff), (0, 0, 0));
}

#[test]
fn equal_promedio_breaks_ties_by_point_diff() {
    let ps = players(2);
    // Both sides get the same points, so only the win/loss differential separates them.
    let m = played(&ps[0], &ps[1], &[(2, 6), (6, 4), (6, 4)], &ps[0]);
    let stats = compute_player_stats(&[ps[1].clone(), ps[0].clone()], &[m], &|_: &GameMatch| (2u32, 2u32));
    assert_eq!(stats[0].player_id, id(&ps[0]));
    assert_eq!(stats[0].point_diff, 1);
    assert_eq!(stats[1].point_diff, -1);
}

#[test]
fn identical_players_keep_input_order() {
    let ps = players(4);
    let first = played(&ps[0], &ps[1], &[(6, 2), (6, 4)], &ps[0]);
    let second = played(&ps[2], &ps[3], &[(6, 2), (6, 4)], &ps[2]);
    let input = vec![ps[2].clone(), ps[0].clone(), ps[3].clone(), ps[1].clone()];
    let stats = compute_player_stats(&input, &[first, second], &LeaguePoints::default());
    assert_eq!(order(&stats), vec![id(&ps[2]), id(&ps[0]), id(&ps[3]), id(&ps[1])]);
}

#[test]
fn ranking_matches_filters_tournament_and_winner() {
    let ps = players(2);
    let tournament = Uuid::new_v4();
    let mut counted = played(&ps[0], &ps[1], &[(6, 2), (6, 4)], &ps[0]);
    counted.tournament_id = Some(tournament);
    let mut other = counted.clone();
    other.tournament_id = Some(Uuid::new_v4());
    let mut pending = counted.clone();
    pending.winner_id = None;
    let selected = ranking_matches(&[counted.clone(), other, pending], tournament);
    assert_eq!(selected, vec![counted]);
}

#[test]
fn league_points_forfeit_and_bonus_loser() {
    use league_portal::PointsCalculator;
    let ps = players(2);
    let points = LeaguePoints::default();

    let mut m = played(&ps[0], &ps[1], &[(3, 6), (6, 7)], &ps[1]);
    assert_eq!(points.points(&m), (1, 3));
    m.bonus_loser = true;
    assert_eq!(points.points(&m), (2, 3));
    m.status = MatchStatus::CompletedByForfeit;
    m.bonus_loser = false;
    assert_eq!(points.points(&m), (0, 3));
    m.winner_id = None;
    assert_eq!(points.points(&m), (0, 0));
}
