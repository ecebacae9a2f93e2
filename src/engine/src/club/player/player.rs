use crate::club::player::attributes::PlayerAttributes;
use crate::club::player::position::{FieldSlot, Role};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,

    /// Raw position label as ingested ("Centre-Back", "POR", ...). The
    /// canonical role is derived, never stored.
    #[serde(default, alias = "ruolo")]
    pub position: String,

    #[serde(default)]
    pub overall: Option<u8>,

    #[serde(flatten)]
    pub attributes: PlayerAttributes,

    /// Set while the player occupies a starter slot, cleared otherwise.
    #[serde(default, rename = "fieldPosition", skip_serializing_if = "Option::is_none")]
    pub field_slot: Option<FieldSlot>,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, position: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            position: position.into(),
            overall: None,
            attributes: PlayerAttributes::default(),
            field_slot: None,
        }
    }

    #[inline]
    pub fn natural_role(&self) -> Role {
        Role::from_label(&self.position)
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.natural_role().is_goalkeeper()
    }

    /// Family name for short-form commentary lines.
    pub fn last_name(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.natural_role().get_short_name())
    }
}

/// Remove duplicate player ids, keeping the first occurrence. Upstream data
/// feeds occasionally repeat players; every squad must be deduplicated
/// before lineup or match use.
pub fn dedup_squad(players: Vec<Player>) -> Vec<Player> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(players.len());

    players
        .into_iter()
        .filter(|player| {
            if seen.insert(player.id) {
                true
            } else {
                warn!("duplicate player id removed from squad: {}", player.id);
                false
            }
        })
        .collect()
}
