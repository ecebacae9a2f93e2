use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEventKind {
    Goal,
    ShotOnTarget,
    ShotWide,
}

/// One entry of the minute-ordered event log produced by the match engine.
/// Scores are the running totals *after* the event applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub team_id: u32,
    pub team_name: String,
    pub player_id: Option<u32>,
    pub player_name: String,
    pub kind: MatchEventKind,
    pub home_score: u8,
    pub away_score: u8,
}

/// The immutable outcome of a played match. Created exactly once per
/// fixture and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub home_id: u32,
    pub away_id: u32,
    #[serde(rename = "homeScore")]
    pub home_score: u8,
    #[serde(rename = "awayScore")]
    pub away_score: u8,
    /// scorer player id -> goals. Values always sum to the total score.
    pub scorers: HashMap<u32, u8>,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl MatchResult {
    pub fn total_goals(&self) -> u8 {
        self.home_score + self.away_score
    }

    pub fn scorer_goals(&self) -> u8 {
        self.scorers.values().sum()
    }
}
