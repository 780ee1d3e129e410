use serde::{Deserialize, Serialize};

/// Health and score for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub hit_points: i32,
    pub score: u32,
}

impl Ledger {
    pub fn new(hit_points: i32, score: u32) -> Self {
        Self { hit_points, score }
    }

    /// Subtract `amount` hit points. Returns true when this leaves the player at or below zero.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.hit_points = self.hit_points.saturating_sub(amount);
        self.is_defeated()
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    pub fn has_won(&self, target: u32) -> bool {
        self.score >= target
    }

    /// Hit points as shown to the player; never below zero.
    pub fn display_hit_points(&self) -> u32 {
        self.hit_points.max(0) as u32
    }
}
