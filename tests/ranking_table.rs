//! Integration tests for the ranking table renderer and the contrast helpers.

use league_portal::logic::{
    category_ranking, tag_text_color, team_text_color, Column, TextColor, PLACEHOLDER_LOGO,
};
use league_portal::{
    compute_player_stats, render_ranking_table, Category, GameMatch, LeaguePoints,
    LeagueSnapshot, MatchStatus, Player, PlayerStat, PortalError, RankMetadata,
    RankPositionMetadata, RankingRow, SetScore, TeamRef, Tournament,
};
use uuid::Uuid;

/// Four players where player i beats everyone after them, so the ranking is P0, P1, P2, P3.
fn ladder() -> (Vec<Player>, Vec<GameMatch>) {
    let ps: Vec<Player> = (0..4).map(|i| Player::new(format!("P{i}"))).collect();
    let mut matches = Vec::new();
    for i in 0..4 {
        for j in (i + 1)..4 {
            let mut m = GameMatch::singles(ps[i].id.unwrap(), ps[j].id.unwrap());
            m.sets = vec![SetScore(6, 4), SetScore(6, 4)];
            m.status = MatchStatus::Completed;
            m.winner_id = ps[i].id;
            matches.push(m);
        }
    }
    (ps, matches)
}

fn divider_after(position: usize) -> RankMetadata {
    RankMetadata::from_entries([RankPositionMetadata {
        position,
        is_divider_after: true,
        tag_text: None,
        tag_color: None,
    }])
}

fn stats(ps: &[Player], matches: &[GameMatch]) -> Vec<PlayerStat> {
    compute_player_stats(ps, matches, &LeaguePoints::default())
}

#[test]
fn ranks_are_one_based_positions() {
    let (ps, matches) = ladder();
    let table = render_ranking_table("First", &stats(&ps, &matches), None, &RankMetadata::new());
    let ranks: Vec<(usize, String)> = table.player_rows().map(|r| (r.rank, r.name.clone())).collect();
    assert_eq!(
        ranks,
        vec![
            (1, "P0".to_string()),
            (2, "P1".to_string()),
            (3, "P2".to_string()),
            (4, "P3".to_string())
        ]
    );
    assert_eq!(table.category, "First");
    assert_eq!(table.columns.len(), Column::ALL.len());
}

#[test]
fn divider_follows_third_row_whoever_is_third() {
    let (ps, matches) = ladder();
    let metadata = divider_after(3);

    let table = render_ranking_table("First", &stats(&ps, &matches), None, &metadata);
    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[3], RankingRow::Divider);

    // Drop P0's wins: the order changes but the divider stays after rank 3.
    let fewer: Vec<GameMatch> = matches
        .into_iter()
        .filter(|m| m.winner_id != ps[0].id)
        .collect();
    let table = render_ranking_table("First", &stats(&ps, &fewer), None, &metadata);
    assert_eq!(table.rows[3], RankingRow::Divider);
    match &table.rows[2] {
        RankingRow::Player(row) => assert_eq!(row.rank, 3),
        RankingRow::Divider => panic!("expected a player row"),
    }
}

#[test]
fn tag_is_attached_by_position_with_contrasting_text() {
    let (ps, matches) = ladder();
    let metadata = RankMetadata::from_entries([
        RankPositionMetadata {
            position: 1,
            is_divider_after: false,
            tag_text: Some("Promotion".to_string()),
            tag_color: Some("#ffeb3b".to_string()),
        },
        RankPositionMetadata {
            position: 4,
            is_divider_after: false,
            tag_text: Some("Relegation".to_string()),
            tag_color: Some("#1a237e".to_string()),
        },
    ]);
    let table = render_ranking_table("First", &stats(&ps, &matches), None, &metadata);
    let rows: Vec<_> = table.player_rows().collect();

    let top = rows[0].tag.as_ref().unwrap();
    assert_eq!(top.text, "Promotion");
    assert_eq!(top.text_color, TextColor::Black);
    let bottom = rows[3].tag.as_ref().unwrap();
    assert_eq!(bottom.text, "Relegation");
    assert_eq!(bottom.text_color, TextColor::White);
    assert!(rows[1].tag.is_none());
}

#[test]
fn unplayed_player_shows_only_points_zero() {
    let (mut ps, matches) = ladder();
    ps.push(Player::new("Newcomer"));
    let table = render_ranking_table("First", &stats(&ps, &matches), None, &RankMetadata::new());
    let rows: Vec<_> = table.player_rows().collect();
    let newcomer = rows.last().unwrap();
    assert_eq!(newcomer.name, "Newcomer");
    assert_eq!(newcomer.rank, 5);
    for (column, cell) in Column::ALL.iter().zip(&newcomer.cells) {
        if *column == Column::Points {
            assert_eq!(cell.as_deref(), Some("0"));
        } else {
            assert!(cell.is_none(), "{:?} should be blank", column);
        }
    }
    // Last place played and lost everything: numbers shown, not blanks.
    assert!(rows[3].cells.iter().all(|c| c.is_some()));
}

#[test]
fn highlight_and_logo_fallback() {
    let (mut ps, matches) = ladder();
    ps[1].team = Some(TeamRef {
        name: "Lions".to_string(),
        image_url: Some("/img/lions.png".to_string()),
        color: Some("#aa0000".to_string()),
    });
    let table = render_ranking_table("First", &stats(&ps, &matches), ps[2].id, &RankMetadata::new());
    let rows: Vec<_> = table.player_rows().collect();
    assert_eq!(rows[1].team_logo, "/img/lions.png");
    assert_eq!(rows[0].team_logo, PLACEHOLDER_LOGO);
    let highlighted: Vec<usize> = rows.iter().filter(|r| r.highlighted).map(|r| r.rank).collect();
    assert_eq!(highlighted, vec![3]);
}

#[test]
fn csv_export_skips_dividers() {
    let (ps, matches) = ladder();
    let table = render_ranking_table("First", &stats(&ps, &matches), None, &divider_after(1));
    let mut buf = Vec::new();
    table.write_csv(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("#,Player,Team,Tag,PJ,PG,PP"));
    assert!(lines[1].starts_with("1,P0,"));
    assert!(lines[2].starts_with("2,P1,"));
}

#[test]
fn category_ranking_reads_snapshot() {
    let (ps, mut matches) = ladder();
    let category = Uuid::new_v4();
    let tournament = Uuid::new_v4();
    for m in &mut matches {
        m.tournament_id = Some(tournament);
    }
    let mut league = LeagueSnapshot::new();
    league.players = ps.into_iter().map(|p| p.in_category(category)).collect();
    league.players.push(Player::new("Elsewhere").in_category(Uuid::new_v4()));
    league.matches = matches;
    league.categories.push(Category { id: category, name: "First".to_string() });
    league.tournaments.push(Tournament {
        id: tournament,
        name: "Spring".to_string(),
        category_ids: vec![category],
    });
    league.rank_metadata.insert(category, divider_after(2));

    let table = category_ranking(&league, category, tournament, None, &LeaguePoints::default()).unwrap();
    assert_eq!(table.player_rows().count(), 4);
    assert_eq!(table.rows[2], RankingRow::Divider);

    let missing = Uuid::new_v4();
    assert_eq!(
        category_ranking(&league, missing, tournament, None, &LeaguePoints::default()),
        Err(PortalError::CategoryNotFound(missing))
    );
}

#[test]
fn the_two_contrast_heuristics_differ_on_mid_grey() {
    // 128/255 luma is just above 0.5; the weighted sum is 128, below 150.
    assert_eq!(tag_text_color("#808080"), TextColor::Black);
    assert_eq!(team_text_color("#808080"), TextColor::White);

    assert_eq!(tag_text_color("#ffffff"), TextColor::Black);
    assert_eq!(tag_text_color("#000"), TextColor::White);
    assert_eq!(team_text_color("#fff"), TextColor::Black);
    assert_eq!(team_text_color("not a colour"), TextColor::White);
}
