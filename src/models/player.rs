//! Player, team reference, and the derived PlayerStat record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Unique identifier for a category (division) of the league.
pub type CategoryId = Uuid;

/// Team a player belongs to, as joined from the remote service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Hex colour (`#rrggbb` or `#rgb`).
    #[serde(default)]
    pub color: Option<String>,
}

/// A player row. `id` is `None` when the row came back without one; such rows are not ranked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub id: Option<PlayerId>,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

impl Player {
    /// Create a player with a fresh id and no category or team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Some(Uuid::new_v4()),
            name: name.into(),
            category_id: None,
            team: None,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_team(mut self, team: TeamRef) -> Self {
        self.team = Some(team);
        self
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.name.as_str())
    }

    pub fn team_image(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.image_url.as_deref())
    }

    pub fn team_color(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.color.as_deref())
    }
}

/// Cumulative statistics for one player, rebuilt on every ranking computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_id: PlayerId,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub team_name: Option<String>,
    pub team_image: Option<String>,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub bonus_count: u32,
    pub total_points: u32,
    /// wins - losses
    pub point_diff: i32,
    pub set_diff: i32,
    pub game_diff: i32,
    /// Points per match played.
    pub parcial: f64,
    /// Points over max(matches played, 8); the primary ranking key.
    pub promedio: f64,
}

impl PlayerStat {
    /// Zeroed stats for a player with an id. Returns `None` for id-less rows.
    pub fn zeroed(player: &Player) -> Option<Self> {
        let player_id = player.id?;
        Some(Self {
            player_id,
            name: player.name.clone(),
            category_id: player.category_id,
            team_name: player.team_name().map(str::to_owned),
            team_image: player.team_image().map(str::to_owned),
            ..Self::default()
        })
    }

    pub fn has_played(&self) -> bool {
        self.matches_played > 0
    }
}
