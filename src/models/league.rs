//! League snapshot: everything the portal reads from the remote data service.

use crate::models::availability::WeeklyAvailability;
use crate::models::game::{GameMatch, MatchRow, TournamentId};
use crate::models::metadata::{RankMetadata, RankPositionMetadata};
use crate::models::player::{CategoryId, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Errors surfaced to a single portal panel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PortalError {
    /// No player row with this id.
    PlayerNotFound(PlayerId),
    /// No category row with this id.
    CategoryNotFound(CategoryId),
    /// No tournament row with this id.
    TournamentNotFound(TournamentId),
    /// Availability submission rejected, with the reason shown to the player.
    InvalidAvailability(String),
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortalError::PlayerNotFound(_) => write!(f, "Player not found"),
            PortalError::CategoryNotFound(_) => write!(f, "Category not found"),
            PortalError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            PortalError::InvalidAvailability(reason) => write!(f, "Invalid availability: {}", reason),
        }
    }
}

impl std::error::Error for PortalError {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

/// Wire shape of a snapshot upload: matches arrive as flat rows and metadata as a list per category.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SnapshotPayload {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRow>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub rank_metadata: HashMap<CategoryId, Vec<RankPositionMetadata>>,
    #[serde(default)]
    pub availability: Vec<WeeklyAvailability>,
}

/// In-memory copy of the league data. Replaced wholesale, never mutated by the renderers.
#[derive(Clone, Debug, Default)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub matches: Vec<GameMatch>,
    pub categories: Vec<Category>,
    pub tournaments: Vec<Tournament>,
    pub rank_metadata: HashMap<CategoryId, RankMetadata>,
    pub availability: Vec<WeeklyAvailability>,
}

impl LeagueSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an uploaded payload. Malformed match rows are dropped and logged.
    pub fn from_payload(payload: SnapshotPayload) -> Self {
        let total = payload.matches.len();
        let matches: Vec<GameMatch> = payload
            .matches
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                let m = row.into_match();
                if m.is_none() {
                    log::warn!("Dropping match {} without both primary players", id);
                }
                m
            })
            .collect();
        if matches.len() < total {
            log::info!("Loaded {} of {} match rows", matches.len(), total);
        }
        Self {
            players: payload.players,
            matches,
            categories: payload.categories,
            tournaments: payload.tournaments,
            rank_metadata: payload
                .rank_metadata
                .into_iter()
                .map(|(category, entries)| (category, RankMetadata::from_entries(entries)))
                .collect(),
            availability: payload.availability,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == Some(id))
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    /// Players of one category, in snapshot order.
    pub fn players_in_category(&self, category_id: CategoryId) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    /// Matches in which a player takes part on either side.
    pub fn matches_of_player(&self, player_id: PlayerId) -> Vec<GameMatch> {
        self.matches
            .iter()
            .filter(|m| m.sides.side_of(player_id).is_some())
            .cloned()
            .collect()
    }

    /// Rank metadata for a category (empty when none is curated).
    pub fn metadata_for(&self, category_id: CategoryId) -> RankMetadata {
        self.rank_metadata.get(&category_id).cloned().unwrap_or_default()
    }
}
