use crate::club::player::player::Player;
use crate::club::player::position::Role;
use crate::r#match::result::{MatchEvent, MatchEventKind, MatchResult};
use crate::r#match::simulator::Match;
use crate::r#match::squad::MatchSquad;
use log::debug;
use rand::{Rng, RngExt};
use std::collections::HashMap;

pub const MATCH_MINUTES: u8 = 90;

/// Base chance that anything happens in a given minute, before play-style
/// modifiers.
const EVENT_PROBABILITY: f32 = 0.1;

/// Base chance that an event resolves into a goal, before conversion
/// modifiers. Events below [`SHOT_ON_TARGET_THRESHOLD`] that are not goals
/// land on target; the rest go wide.
const GOAL_THRESHOLD: f32 = 0.15;
const SHOT_ON_TARGET_THRESHOLD: f32 = 0.5;

/// Weighted actor selection: forwards take the bulk of the chances,
/// midfielders most of the rest, anyone can be involved in the remainder.
const FORWARD_SHARE: f32 = 0.6;
const MIDFIELD_SHARE: f32 = 0.9;

/// Minute-stepped match engine. Cooperatively scheduled: the caller drives
/// one simulated minute per [`tick`](MatchEngine::tick) so a UI can render
/// incrementally; [`play_to_end`](MatchEngine::play_to_end) runs the rest
/// synchronously. Nothing is committed anywhere until the caller takes the
/// final [`MatchResult`].
#[derive(Debug)]
pub struct MatchEngine {
    id: String,
    home: MatchSquad,
    away: MatchSquad,
    minute: u8,
    home_score: u8,
    away_score: u8,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn new(r#match: Match) -> Self {
        MatchEngine {
            id: r#match.id,
            home: r#match.home,
            away: r#match.away,
            minute: 0,
            home_score: 0,
            away_score: 0,
            events: Vec::new(),
        }
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn score(&self) -> (u8, u8) {
        (self.home_score, self.away_score)
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.minute >= MATCH_MINUTES
    }

    /// Advance one simulated minute. At most one event happens per minute;
    /// goals increment the running score immediately.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<MatchEvent> {
        if self.is_finished() {
            return None;
        }

        self.minute += 1;

        let home_strength = self.home.strength as f32;
        let away_strength = self.away.strength as f32;
        let home_acts = rng.random::<f32>() < home_strength / (home_strength + away_strength);

        let (squad, is_home) = if home_acts {
            (&self.home, true)
        } else {
            (&self.away, false)
        };

        let event_chance = EVENT_PROBABILITY * squad.style.event_modifier();
        if rng.random::<f32>() >= event_chance {
            return None;
        }

        let player = Self::pick_actor(squad, rng);

        let team_id = squad.team_id;
        let team_name = squad.team_name.clone();
        let player_id = player.map(|p| p.id);
        let player_name = player.map(|p| p.last_name().to_string()).unwrap_or_default();
        let conversion = squad.style.conversion_modifier();

        let roll = rng.random::<f32>();

        let kind = if roll < GOAL_THRESHOLD * conversion {
            if is_home {
                self.home_score += 1;
            } else {
                self.away_score += 1;
            }
            MatchEventKind::Goal
        } else if roll < SHOT_ON_TARGET_THRESHOLD {
            MatchEventKind::ShotOnTarget
        } else {
            MatchEventKind::ShotWide
        };

        let event = MatchEvent {
            minute: self.minute,
            team_id,
            team_name,
            player_id,
            player_name,
            kind,
            home_score: self.home_score,
            away_score: self.away_score,
        };

        if kind == MatchEventKind::Goal {
            debug!(
                "{}' goal for {} ({}-{})",
                event.minute, event.team_name, self.home_score, self.away_score
            );
        }

        self.events.push(event.clone());
        Some(event)
    }

    /// Run every remaining minute synchronously.
    pub fn play_to_end(&mut self, rng: &mut impl Rng) {
        while !self.is_finished() {
            self.tick(rng);
        }
    }

    /// Finalize into an immutable result. Scorers are derived from the goal
    /// events, so their per-player counts always sum to the final score.
    pub fn into_result(self) -> MatchResult {
        let mut scorers: HashMap<u32, u8> = HashMap::new();

        for event in &self.events {
            if event.kind == MatchEventKind::Goal {
                if let Some(player_id) = event.player_id {
                    *scorers.entry(player_id).or_insert(0) += 1;
                }
            }
        }

        MatchResult {
            id: self.id,
            home_id: self.home.team_id,
            away_id: self.away.team_id,
            home_score: self.home_score,
            away_score: self.away_score,
            scorers,
            events: self.events,
        }
    }

    /// Pick the involved player, weighted toward attacking roles: forwards
    /// roughly four times as often as the generic pick, midfielders (and
    /// attacking midfielders) covering most of the rest.
    fn pick_actor<'s>(squad: &'s MatchSquad, rng: &mut impl Rng) -> Option<&'s Player> {
        if squad.players.is_empty() {
            return None;
        }

        let roll = rng.random::<f32>();

        if roll < FORWARD_SHARE {
            let forwards = squad.by_role(Role::Forward);
            if !forwards.is_empty() {
                return Some(forwards[rng.random_range(0..forwards.len())]);
            }
        }

        if roll < MIDFIELD_SHARE {
            let midfielders: Vec<&Player> = squad
                .players
                .iter()
                .filter(|p| {
                    matches!(
                        p.natural_role(),
                        Role::Midfielder | Role::AttackingMidfielder
                    )
                })
                .collect();
            if !midfielders.is_empty() {
                return Some(midfielders[rng.random_range(0..midfielders.len())]);
            }
        }

        Some(&squad.players[rng.random_range(0..squad.players.len())])
    }
}
