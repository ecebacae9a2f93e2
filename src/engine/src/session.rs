use crate::club::team::lineup::Lineup;
use crate::club::team::team::PlayStyle;
use crate::error::EngineError;
use crate::league::season::Season;
use serde::{Deserialize, Serialize};

/// Everything a client needs to resume a session where it left off.
/// The formation name is stored alongside the lineup so a restored
/// [`LineupManager`](crate::club::team::lineup::LineupManager) can be
/// rebuilt against the right template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub team_id: u32,
    pub formation: String,
    pub style: PlayStyle,
    pub lineup: Option<Lineup>,
    pub season: Season,
}

/// External persistence collaborator. The engine only ever round-trips
/// [`GameState`] through this seam; where and how it is stored is the
/// caller's business.
pub trait StateStore {
    fn load(&self) -> Result<Option<GameState>, EngineError>;
    fn save(&mut self, state: &GameState) -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::player::Player;
    use crate::club::team::formation::Formation;
    use crate::club::team::lineup::LineupManager;
    use crate::club::team::team::Team;
    use std::collections::HashMap;

    struct MemoryStore {
        slot: HashMap<String, String>,
    }

    impl StateStore for MemoryStore {
        fn load(&self) -> Result<Option<GameState>, EngineError> {
            self.slot
                .get("state")
                .map(|json| {
                    serde_json::from_str(json)
                        .map_err(|e| EngineError::Storage(e.to_string()))
                })
                .transpose()
        }

        fn save(&mut self, state: &GameState) -> Result<(), EngineError> {
            let json =
                serde_json::to_string(state).map_err(|e| EngineError::Storage(e.to_string()))?;
            self.slot.insert("state".to_string(), json);
            Ok(())
        }
    }

    fn team(id: u32) -> Team {
        let squad = (0..13)
            .map(|n| {
                let role = match n {
                    0 => "POR",
                    1..=5 => "DIF",
                    6..=9 => "CEN",
                    _ => "ATT",
                };
                Player::new(id * 1000 + n, format!("T{} Player {}", id, n), role)
            })
            .collect();

        Team {
            id,
            name: format!("Team {}", id),
            crest: String::new(),
            squad,
            style: PlayStyle::TikiTaka,
            strength: None,
        }
    }

    #[test]
    fn state_survives_a_store_round_trip() {
        let teams = vec![team(1), team(2)];
        let user = teams[0].clone();

        let mut manager = LineupManager::new(Formation::default_formation(), user.squad.clone());
        manager.auto_fill();
        let lineup = manager.confirm().unwrap();

        let state = GameState {
            team_id: user.id,
            formation: lineup.formation.clone(),
            style: user.style,
            lineup: Some(lineup),
            season: Season::new(teams, user.id).unwrap(),
        };

        let mut store = MemoryStore {
            slot: HashMap::new(),
        };
        store.save(&state).unwrap();
        let restored = store.load().unwrap().unwrap();

        assert_eq!(restored.team_id, state.team_id);
        assert_eq!(restored.style, PlayStyle::TikiTaka);
        assert_eq!(restored.lineup, state.lineup);
        assert_eq!(
            restored.season.schedule.total_matchdays(),
            state.season.schedule.total_matchdays()
        );
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStore {
            slot: HashMap::new(),
        };
        assert!(store.load().unwrap().is_none());
    }
}
