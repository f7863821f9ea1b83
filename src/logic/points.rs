//! Points calculator: turns a match result into one point value per side.

use crate::models::{GameMatch, MatchStatus, Side};
use serde::{Deserialize, Serialize};

/// Converts a match into `(points side A, points side B)`.
pub trait PointsCalculator {
    fn points(&self, game: &GameMatch) -> (u32, u32);
}

impl<F> PointsCalculator for F
where
    F: Fn(&GameMatch) -> (u32, u32),
{
    fn points(&self, game: &GameMatch) -> (u32, u32) {
        self(game)
    }
}

/// Fixed points per outcome. The loser of a forfeit gets `forfeit_loss` instead of `loss`,
/// and a match flagged `bonus_loser` adds `bonus_loser` to the losing side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaguePoints {
    pub win: u32,
    pub loss: u32,
    pub forfeit_loss: u32,
    pub bonus_loser: u32,
}

impl Default for LeaguePoints {
    fn default() -> Self {
        Self {
            win: 3,
            loss: 1,
            forfeit_loss: 0,
            bonus_loser: 1,
        }
    }
}

impl PointsCalculator for LeaguePoints {
    fn points(&self, game: &GameMatch) -> (u32, u32) {
        let Some(winner) = game.winner_side() else {
            return (0, 0);
        };
        let mut loser_points = match game.status {
            MatchStatus::CompletedByForfeit => self.forfeit_loss,
            _ => self.loss,
        };
        if game.bonus_loser {
            loser_points += self.bonus_loser;
        }
        match winner {
            Side::A => (self.win, loser_points),
            Side::B => (loser_points, self.win),
        }
    }
}
