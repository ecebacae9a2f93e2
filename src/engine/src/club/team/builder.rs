use crate::club::player::attributes::PlayerAttributes;
use crate::club::player::player::{Player, dedup_squad};
use crate::club::team::team::{PlayStyle, Team};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Raw team record as accepted at the ingestion boundary. Squads may be
/// missing or empty; the builder tolerates both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub crest: Option<String>,
    #[serde(default)]
    pub squad: Option<Vec<Player>>,
    #[serde(default)]
    pub style: Option<PlayStyle>,
    #[serde(default)]
    pub strength: Option<u8>,
}

pub struct TeamBuilder;

const FILLER_SQUAD_SIZE: usize = 18;

/// Fixed role distribution of a synthesized filler squad.
const FILLER_ROLES: [(&str, usize); 5] = [
    ("POR", 2),
    ("DIF", 6),
    ("CEN", 5),
    ("TQ", 1),
    ("ATT", 4),
];

impl TeamBuilder {
    pub fn build(record: TeamRecord) -> Team {
        let squad = match record.squad {
            Some(squad) if !squad.is_empty() => dedup_squad(squad),
            _ => {
                warn!(
                    "team {} ({}) has no squad data, synthesizing filler squad",
                    record.name, record.id
                );
                Self::filler_squad(record.id, &record.name)
            }
        };

        Team {
            id: record.id,
            name: record.name,
            crest: record.crest.unwrap_or_default(),
            squad,
            style: record.style.unwrap_or_default(),
            strength: record.strength,
        }
    }

    pub fn build_all(records: Vec<TeamRecord>) -> Vec<Team> {
        let teams: Vec<Team> = records.into_iter().map(Self::build).collect();
        info!("ingested {} teams", teams.len());
        teams
    }

    /// Fixed-size, role-distributed squad for teams ingested without player
    /// data. Ids are derived from the team id to stay unique across teams.
    fn filler_squad(team_id: u32, team_name: &str) -> Vec<Player> {
        let mut squad = Vec::with_capacity(FILLER_SQUAD_SIZE);
        let mut ordinal: u32 = 0;

        for &(role_label, count) in &FILLER_ROLES {
            for _ in 0..count {
                ordinal += 1;

                let mut player = Player::new(
                    team_id * 100_000 + ordinal,
                    format!("{} Youth {}", team_name, ordinal),
                    role_label,
                );

                // Flat, serviceable ratings around the low 60s so filler
                // squads stay clearly below real ones.
                let level = Some(60 + (ordinal % 5) as u8);
                player.overall = level;
                player.attributes = if role_label == "POR" {
                    PlayerAttributes {
                        diving: level,
                        handling: level,
                        kicking: level,
                        reflexes: level,
                        reactions: level,
                        positioning: level,
                        ..PlayerAttributes::default()
                    }
                } else {
                    PlayerAttributes {
                        speed: level,
                        shooting: level,
                        passing: level,
                        dribbling: level,
                        defending: level,
                        physicality: level,
                        ..PlayerAttributes::default()
                    }
                };

                squad.push(player);
            }
        }

        squad
    }
}
