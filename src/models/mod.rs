//! Data structures for the league portal: players, matches, stats, metadata, availability.

mod availability;
mod game;
mod league;
mod metadata;
mod player;

pub use availability::{AvailabilitySlot, WeeklyAvailability};
pub use game::{GameMatch, MatchId, MatchRow, MatchSides, MatchStatus, SetScore, Side, TournamentId};
pub use league::{Category, LeagueSnapshot, PortalError, SnapshotPayload, Tournament};
pub use metadata::{RankMetadata, RankPositionMetadata};
pub use player::{CategoryId, Player, PlayerId, PlayerStat, TeamRef};
