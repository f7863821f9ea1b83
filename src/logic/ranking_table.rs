//! Ranking table: sorted stats + per-position metadata → rows, columns, dividers, tags.

use crate::logic::aggregate::{compute_player_stats, ranking_matches};
use crate::logic::contrast::{tag_text_color, TextColor};
use crate::logic::points::PointsCalculator;
use crate::models::{
    CategoryId, LeagueSnapshot, PlayerId, PlayerStat, PortalError, RankMetadata, TournamentId,
};
use serde::Serialize;
use std::io::Write;

/// Logo shown when a player has no team image.
pub const PLACEHOLDER_LOGO: &str = "/static/img/team-placeholder.png";

/// Tag background when a tag has text but no colour.
const DEFAULT_TAG_COLOR: &str = "#6c757d";

/// Numeric columns of the ranking table, in display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Played,
    Won,
    Lost,
    PointDiff,
    SetsWon,
    SetsLost,
    SetDiff,
    GamesWon,
    GamesLost,
    GameDiff,
    Bonus,
    Points,
    Parcial,
    Promedio,
}

impl Column {
    pub const ALL: [Column; 14] = [
        Column::Played,
        Column::Won,
        Column::Lost,
        Column::PointDiff,
        Column::SetsWon,
        Column::SetsLost,
        Column::SetDiff,
        Column::GamesWon,
        Column::GamesLost,
        Column::GameDiff,
        Column::Bonus,
        Column::Points,
        Column::Parcial,
        Column::Promedio,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Played => "PJ",
            Column::Won => "PG",
            Column::Lost => "PP",
            Column::PointDiff => "DIF",
            Column::SetsWon => "SG",
            Column::SetsLost => "SP",
            Column::SetDiff => "DS",
            Column::GamesWon => "GG",
            Column::GamesLost => "GP",
            Column::GameDiff => "DG",
            Column::Bonus => "BON",
            Column::Points => "PTS",
            Column::Parcial => "PARCIAL",
            Column::Promedio => "PROM",
        }
    }

    /// Cell text for a player who has played.
    fn value(self, stat: &PlayerStat) -> String {
        match self {
            Column::Played => stat.matches_played.to_string(),
            Column::Won => stat.wins.to_string(),
            Column::Lost => stat.losses.to_string(),
            Column::PointDiff => stat.point_diff.to_string(),
            Column::SetsWon => stat.sets_won.to_string(),
            Column::SetsLost => stat.sets_lost.to_string(),
            Column::SetDiff => stat.set_diff.to_string(),
            Column::GamesWon => stat.games_won.to_string(),
            Column::GamesLost => stat.games_lost.to_string(),
            Column::GameDiff => stat.game_diff.to_string(),
            Column::Bonus => stat.bonus_count.to_string(),
            Column::Points => stat.total_points.to_string(),
            Column::Parcial => format!("{:.2}", stat.parcial),
            Column::Promedio => format!("{:.2}", stat.promedio),
        }
    }
}

/// Tag drawn next to a ranked player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowTag {
    pub text: String,
    pub background: String,
    pub text_color: TextColor,
}

/// One ranked player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerRow {
    /// 1-based position in the sorted list.
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub team_logo: String,
    pub highlighted: bool,
    /// One cell per `Column::ALL`; `None` renders blank.
    pub cells: Vec<Option<String>>,
    pub tag: Option<RowTag>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RankingRow {
    Player(PlayerRow),
    Divider,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankingTable {
    pub category: String,
    pub columns: Vec<Column>,
    pub rows: Vec<RankingRow>,
}

impl RankingTable {
    /// Player rows only, dividers skipped.
    pub fn player_rows(&self) -> impl Iterator<Item = &PlayerRow> {
        self.rows.iter().filter_map(|row| match row {
            RankingRow::Player(p) => Some(p),
            RankingRow::Divider => None,
        })
    }

    /// Write the table as CSV: rank, name, team logo, tag, then one column per stat. Dividers are omitted.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        let mut header = vec!["#", "Player", "Team", "Tag"];
        header.extend(self.columns.iter().map(|c| c.header()));
        out.write_record(&header)?;
        for row in self.player_rows() {
            let mut record = vec![
                row.rank.to_string(),
                row.name.clone(),
                row.team_logo.clone(),
                row.tag.as_ref().map(|t| t.text.clone()).unwrap_or_default(),
            ];
            record.extend(row.cells.iter().map(|c| c.clone().unwrap_or_default()));
            out.write_record(&record)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Render a category ranking from stats already sorted by `compute_player_stats`.
///
/// Metadata is looked up by rank position. Players who never played show only rank, name,
/// logo and a "0" in the points column.
pub fn render_ranking_table(
    category: &str,
    stats: &[PlayerStat],
    highlighted: Option<PlayerId>,
    metadata: &RankMetadata,
) -> RankingTable {
    let mut rows = Vec::with_capacity(stats.len());
    for (idx, stat) in stats.iter().enumerate() {
        let rank = idx + 1;
        let meta = metadata.at(rank);
        let cells = Column::ALL
            .iter()
            .map(|&column| {
                if stat.has_played() {
                    Some(column.value(stat))
                } else if column == Column::Points {
                    Some("0".to_string())
                } else {
                    None
                }
            })
            .collect();
        let tag = meta.and_then(|m| {
            let text = m.tag_text.as_deref().filter(|t| !t.trim().is_empty())?;
            let background = m.tag_color.clone().unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());
            Some(RowTag {
                text: text.to_string(),
                text_color: tag_text_color(&background),
                background,
            })
        });
        rows.push(RankingRow::Player(PlayerRow {
            rank,
            player_id: stat.player_id,
            name: stat.name.clone(),
            team_logo: stat
                .team_image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_LOGO.to_string()),
            highlighted: highlighted == Some(stat.player_id),
            cells,
            tag,
        }));
        if meta.is_some_and(|m| m.is_divider_after) {
            rows.push(RankingRow::Divider);
        }
    }
    RankingTable {
        category: category.to_string(),
        columns: Column::ALL.to_vec(),
        rows,
    }
}

/// Compute and render the ranking of one category for one tournament.
pub fn category_ranking(
    league: &LeagueSnapshot,
    category_id: CategoryId,
    tournament_id: TournamentId,
    highlighted: Option<PlayerId>,
    calculator: &impl PointsCalculator,
) -> Result<RankingTable, PortalError> {
    let category = league
        .category(category_id)
        .ok_or(PortalError::CategoryNotFound(category_id))?;
    if league.tournament(tournament_id).is_none() {
        return Err(PortalError::TournamentNotFound(tournament_id));
    }
    let stats = compute_player_stats(
        &league.players_in_category(category_id),
        &ranking_matches(&league.matches, tournament_id),
        calculator,
    );
    Ok(render_ranking_table(
        &category.name,
        &stats,
        highlighted,
        &league.metadata_for(category_id),
    ))
}
