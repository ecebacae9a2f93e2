use serde::{Deserialize, Serialize};

/// Raw numeric attributes as ingested from the boundary. Everything is
/// optional: upstream data sources routinely omit whole blocks, and the
/// performance calculator falls back to `overall` in that case.
///
/// Serde aliases accept the Italian field names the data feed uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    #[serde(default, alias = "velocita")]
    pub speed: Option<u8>,
    #[serde(default, alias = "tiro")]
    pub shooting: Option<u8>,
    #[serde(default, alias = "passaggio")]
    pub passing: Option<u8>,
    #[serde(default)]
    pub dribbling: Option<u8>,
    #[serde(default, alias = "difesa")]
    pub defending: Option<u8>,
    #[serde(default, alias = "fisico")]
    pub physicality: Option<u8>,

    // Goalkeeper block
    #[serde(default, alias = "tuffo")]
    pub diving: Option<u8>,
    #[serde(default, alias = "presa")]
    pub handling: Option<u8>,
    #[serde(default, alias = "rinvio")]
    pub kicking: Option<u8>,
    #[serde(default, alias = "riflessi")]
    pub reflexes: Option<u8>,
    #[serde(default, alias = "reattivita")]
    pub reactions: Option<u8>,
    #[serde(default, alias = "piazzamento")]
    pub positioning: Option<u8>,
}

impl PlayerAttributes {
    pub fn outfield(&self) -> [Option<u8>; 6] {
        [
            self.speed,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defending,
            self.physicality,
        ]
    }

    pub fn goalkeeping(&self) -> [Option<u8>; 6] {
        [
            self.diving,
            self.handling,
            self.kicking,
            self.reflexes,
            self.reactions,
            self.positioning,
        ]
    }

    pub fn has_outfield_set(&self) -> bool {
        self.outfield().iter().all(|a| a.is_some())
    }

    pub fn has_goalkeeping_set(&self) -> bool {
        self.goalkeeping().iter().all(|a| a.is_some())
    }
}
