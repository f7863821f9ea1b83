//! Match, Side, and set scores for singles / doubles games.

use crate::models::player::{CategoryId, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a tournament (season).
pub type TournamentId = Uuid;

/// Which side of the match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Lifecycle status of a match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
    CompletedByForfeit,
    CompletedByRetirement,
    Suspended,
}

/// Games won by side A and side B in one set. Serialized as `[a, b]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore(pub u32, pub u32);

impl SetScore {
    pub fn games(self, side: Side) -> u32 {
        match side {
            Side::A => self.0,
            Side::B => self.1,
        }
    }

    /// Side with strictly more games; `None` for an even set.
    pub fn winner(self) -> Option<Side> {
        match self.0.cmp(&self.1) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Who plays. Side A is player1 (+ player3), side B is player2 (+ player4).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSides {
    Singles {
        player1: PlayerId,
        player2: PlayerId,
    },
    Doubles {
        player1: PlayerId,
        player2: PlayerId,
        player3: PlayerId,
        player4: PlayerId,
    },
}

impl MatchSides {
    /// Primary player of a side (player1 for A, player2 for B).
    pub fn primary(&self, side: Side) -> PlayerId {
        match (*self, side) {
            (MatchSides::Singles { player1, .. }, Side::A)
            | (MatchSides::Doubles { player1, .. }, Side::A) => player1,
            (MatchSides::Singles { player2, .. }, Side::B)
            | (MatchSides::Doubles { player2, .. }, Side::B) => player2,
        }
    }

    /// Secondary player of a side, doubles only.
    pub fn secondary(&self, side: Side) -> Option<PlayerId> {
        match (*self, side) {
            (MatchSides::Singles { .. }, _) => None,
            (MatchSides::Doubles { player3, .. }, Side::A) => Some(player3),
            (MatchSides::Doubles { player4, .. }, Side::B) => Some(player4),
        }
    }

    /// All players of a side, primary first.
    pub fn players(&self, side: Side) -> Vec<PlayerId> {
        std::iter::once(self.primary(side))
            .chain(self.secondary(side))
            .collect()
    }

    pub fn is_doubles(&self) -> bool {
        matches!(self, MatchSides::Doubles { .. })
    }

    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        [Side::A, Side::B]
            .into_iter()
            .find(|&side| self.players(side).contains(&player_id))
    }
}

/// A single match between two sides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub sides: MatchSides,
    /// Set scores in play order, side A first.
    pub sets: Vec<SetScore>,
    pub status: MatchStatus,
    /// None until decided.
    pub winner_id: Option<PlayerId>,
    pub bonus_loser: bool,
    /// Raw date string as stored remotely (`YYYY-MM-DD`).
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    /// Free text, `"<venue> - <court>"`.
    pub location: Option<String>,
    pub category_id: Option<CategoryId>,
    pub tournament_id: Option<TournamentId>,
}

impl GameMatch {
    pub fn new(sides: MatchSides) -> Self {
        Self {
            id: Uuid::new_v4(),
            sides,
            sets: Vec::new(),
            status: MatchStatus::Scheduled,
            winner_id: None,
            bonus_loser: false,
            match_date: None,
            match_time: None,
            location: None,
            category_id: None,
            tournament_id: None,
        }
    }

    pub fn singles(player1: PlayerId, player2: PlayerId) -> Self {
        Self::new(MatchSides::Singles { player1, player2 })
    }

    /// Winning side: A when the winner is side A's primary or secondary player, B for any other winner.
    pub fn winner_side(&self) -> Option<Side> {
        let winner = self.winner_id?;
        let side_a = self.sides.primary(Side::A) == winner
            || self.sides.secondary(Side::A) == Some(winner);
        Some(if side_a { Side::A } else { Side::B })
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Sets won by a side (strictly more games in that set).
    pub fn sets_won(&self, side: Side) -> u32 {
        self.sets.iter().filter(|s| s.winner() == Some(side)).count() as u32
    }

    pub fn games_won(&self, side: Side) -> u32 {
        self.sets.iter().map(|s| s.games(side)).sum()
    }
}

/// Flat match row as returned by the remote service. Doubles when both player3 and player4 are set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: MatchId,
    #[serde(default)]
    pub player1_id: Option<PlayerId>,
    #[serde(default)]
    pub player2_id: Option<PlayerId>,
    #[serde(default)]
    pub player3_id: Option<PlayerId>,
    #[serde(default)]
    pub player4_id: Option<PlayerId>,
    #[serde(default)]
    pub sets: Vec<SetScore>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub winner_id: Option<PlayerId>,
    #[serde(default)]
    pub bonus_loser: bool,
    #[serde(default)]
    pub match_date: Option<String>,
    #[serde(default)]
    pub match_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub tournament_id: Option<TournamentId>,
}

impl MatchRow {
    /// Convert into a typed match. Rows missing player1 or player2 are malformed: `None`.
    pub fn into_match(self) -> Option<GameMatch> {
        let (player1, player2) = (self.player1_id?, self.player2_id?);
        let sides = match (self.player3_id, self.player4_id) {
            (Some(player3), Some(player4)) => MatchSides::Doubles {
                player1,
                player2,
                player3,
                player4,
            },
            _ => MatchSides::Singles { player1, player2 },
        };
        Some(GameMatch {
            id: self.id,
            sides,
            sets: self.sets,
            status: self.status,
            winner_id: self.winner_id,
            bonus_loser: self.bonus_loser,
            match_date: self.match_date,
            match_time: self.match_time,
            location: self.location,
            category_id: self.category_id,
            tournament_id: self.tournament_id,
        })
    }
}
