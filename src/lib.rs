//! League player portal: library with models, ranking/match-table logic, and configuration.

pub mod config;
pub mod logic;
pub mod models;

pub use config::PortalConfig;
pub use logic::{
    availability_for, category_ranking, compute_player_stats, player_dashboard, ranking_matches,
    render_match_table, render_ranking_table, submit_availability, LeaguePoints, MatchTable,
    PlayerDashboard, PointsCalculator, RankingRow, RankingTable, ViewSequencer, ViewTicket,
};
pub use models::{
    AvailabilitySlot, Category, CategoryId, GameMatch, LeagueSnapshot, MatchId, MatchRow,
    MatchSides, MatchStatus, Player, PlayerId, PlayerStat, PortalError, RankMetadata,
    RankPositionMetadata, SetScore, Side, SnapshotPayload, TeamRef, Tournament, TournamentId,
    WeeklyAvailability,
};
