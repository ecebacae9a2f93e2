use crate::club::player::player::Player;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAM_STRENGTH: u8 = 70;

/// Tactical play style. Modifies event frequency and finishing conversion
/// in the minute-stepped match engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayStyle {
    #[default]
    Balanced,
    TikiTaka,
    #[serde(alias = "contropiede")]
    Counterattack,
    #[serde(alias = "pressing-alto")]
    HighPressing,
}

impl PlayStyle {
    /// More possession-heavy styles produce more chances per minute.
    pub fn event_modifier(self) -> f32 {
        match self {
            PlayStyle::Balanced => 1.0,
            PlayStyle::TikiTaka => 1.2,
            PlayStyle::Counterattack => 0.8,
            PlayStyle::HighPressing => 1.3,
        }
    }

    /// Counterattacking sides create fewer chances but finish them better.
    pub fn conversion_modifier(self) -> f32 {
        match self {
            PlayStyle::Balanced => 1.0,
            PlayStyle::TikiTaka => 0.9,
            PlayStyle::Counterattack => 1.3,
            PlayStyle::HighPressing => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub crest: String,
    #[serde(default)]
    pub squad: Vec<Player>,
    #[serde(default)]
    pub style: PlayStyle,
    #[serde(default)]
    pub strength: Option<u8>,
}

impl Team {
    /// Team strength for event-mode simulations, with the documented
    /// fallback when the boundary supplied none.
    pub fn match_strength(&self) -> u8 {
        self.strength.unwrap_or(DEFAULT_TEAM_STRENGTH)
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.squad.iter().find(|p| p.id == player_id)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
