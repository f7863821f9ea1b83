//! Portal logic: stats aggregation, table rendering, dashboard, availability.

mod aggregate;
mod availability;
mod contrast;
mod dashboard;
mod match_table;
mod points;
mod ranking_table;
mod sequence;

pub use aggregate::{compute_player_stats, ranking_matches, ranking_order, MIN_MATCHES_FOR_AVERAGE};
pub use availability::{availability_for, submit_availability};
pub use contrast::{parse_hex_color, tag_text_color, team_text_color, TextColor};
pub use dashboard::{player_dashboard, PlayerDashboard, NO_HISTORY_MESSAGE, NO_PENDING_MESSAGE};
pub use match_table::{
    display_sets, history_matches, parse_location, pending_matches, render_match_table,
    result_label, DateGroup, MatchLine, MatchTable, Outcome, SideCell, VenueGroup, NO_COURT,
    NO_DATE, UNDEFINED_VENUE, UNKNOWN_PLAYER,
};
pub use points::{LeaguePoints, PointsCalculator};
pub use ranking_table::{
    category_ranking, render_ranking_table, Column, PlayerRow, RankingRow, RankingTable, RowTag, PLACEHOLDER_LOGO,
};
pub use sequence::{ViewSequencer, ViewTicket};
