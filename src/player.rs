//! Per-player running totals and their report view.

use crate::rate::{Average, Percentage};
use serde::Serialize;

/// Running totals for one player.
///
/// # Invariants
///
/// - `games_won <= games_played`
/// - `net_score` is the sum of the player's deltas over every counted hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Hands the player sat in.
    pub games_played: u32,

    /// Hands the player won.
    pub games_won: u32,

    /// Net money won (negative when losing overall).
    pub net_score: i64,
}

impl PlayerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one hand for this player.
    pub fn record(&mut self, won: bool, delta: i64) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        self.net_score += delta;
    }

    /// Share of hands won, as a whole-number percentage.
    pub fn games_won_pc(&self) -> Percentage {
        Percentage::percent(i64::from(self.games_won), i64::from(self.games_played))
    }

    /// Net score per hand played, to one decimal place.
    pub fn net_score_avg(&self) -> Average {
        Average::ratio(self.net_score, i64::from(self.games_played))
    }

    /// Builds the report row for this player.
    pub fn summary(&self, player: &str) -> PlayerSummary {
        PlayerSummary {
            player: player.to_string(),
            games_played: self.games_played,
            games_won: self.games_won,
            net_score: self.net_score,
            games_won_pc: self.games_won_pc(),
            net_score_avg: self.net_score_avg(),
        }
    }
}

/// One report row: the totals plus derived rates.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub player: String,
    pub games_played: u32,
    pub games_won: u32,
    pub net_score: i64,
    pub games_won_pc: Percentage,
    pub net_score_avg: Average,
}
