use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Canonical role set. Every free-text position label the boundary can hand
/// us collapses into one of these five tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    AttackingMidfielder,
    Forward,
}

/// Compatibility for pairs the table does not define.
pub const COMPATIBILITY_PENALTY: f32 = 0.5;

impl Role {
    /// Canonicalize a raw position label. Handles the abbreviated Italian
    /// codes first, then falls through to substring matching on Italian and
    /// English terms. Unknown labels map to Midfielder.
    pub fn from_label(label: &str) -> Role {
        match label.trim().to_uppercase().as_str() {
            "POR" => return Role::Goalkeeper,
            "DIF" => return Role::Defender,
            "CEN" => return Role::Midfielder,
            "TQ" => return Role::AttackingMidfielder,
            "ATT" | "ALA" | "AS" | "SS" | "PC" => return Role::Forward,
            _ => {}
        }

        let label = label.to_lowercase();

        if label.contains("goal") || label.contains("portiere") {
            return Role::Goalkeeper;
        }

        if label.contains("defen")
            || label.contains("back")
            || label.contains("difensore")
            || label.contains("terzino")
        {
            return Role::Defender;
        }

        if (label.contains("attack") && label.contains("midfield"))
            || label.contains("trequartista")
            || (label.contains("centrocampista") && label.contains("offensivo"))
        {
            return Role::AttackingMidfielder;
        }

        if label.contains("midfield") || label.contains("centrocampista") {
            return Role::Midfielder;
        }

        if label.contains("forward")
            || label.contains("attack")
            || label.contains("striker")
            || label.contains("winger")
            || label.contains("attaccante")
            || label.contains("ala")
        {
            return Role::Forward;
        }

        Role::Midfielder
    }

    /// How well a player with this natural role performs in a field slot of
    /// `field_role`. Exact match is 1.0, undefined pairs fall back to the
    /// penalty constant. The table is directed, not symmetric.
    pub fn compatibility(self, field_role: Role) -> f32 {
        use Role::*;

        match (self, field_role) {
            (Goalkeeper, Goalkeeper) => 1.0,

            (Defender, Defender) => 1.0,
            (Defender, Midfielder) => 0.8,
            (Defender, AttackingMidfielder) => 0.6,
            (Defender, Forward) => 0.5,

            (Midfielder, Midfielder) => 1.0,
            (Midfielder, Defender) => 0.85,
            (Midfielder, AttackingMidfielder) => 0.9,
            (Midfielder, Forward) => 0.75,

            (AttackingMidfielder, AttackingMidfielder) => 1.0,
            (AttackingMidfielder, Midfielder) => 0.9,
            (AttackingMidfielder, Forward) => 0.85,
            (AttackingMidfielder, Defender) => 0.6,

            (Forward, Forward) => 1.0,
            (Forward, AttackingMidfielder) => 0.85,
            (Forward, Midfielder) => 0.75,
            (Forward, Defender) => 0.5,

            _ => COMPATIBILITY_PENALTY,
        }
    }

    /// Classify how a player with this natural role fits a field role.
    pub fn fit(self, field_role: Role) -> PositionFit {
        let compatibility = self.compatibility(field_role);

        if compatibility == 1.0 {
            PositionFit::Natural
        } else if compatibility >= 0.8 {
            PositionFit::Adapted
        } else {
            PositionFit::OutOfPosition
        }
    }

    #[inline]
    pub fn is_goalkeeper(self) -> bool {
        self == Role::Goalkeeper
    }

    pub fn get_short_name(self) -> &'static str {
        match self {
            Role::Goalkeeper => "GK",
            Role::Defender => "DF",
            Role::Midfielder => "MF",
            Role::AttackingMidfielder => "AM",
            Role::Forward => "FW",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Goalkeeper => "goalkeeper",
            Role::Defender => "defender",
            Role::Midfielder => "midfielder",
            Role::AttackingMidfielder => "attacking-midfielder",
            Role::Forward => "forward",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFit {
    Natural,
    Adapted,
    OutOfPosition,
}

/// One position in a formation layout: a role plus the slot ordinal within
/// the eleven. Kept as a structured value, never a parsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSlot {
    pub role: Role,
    pub index: u8,
}

impl FieldSlot {
    pub const fn new(role: Role, index: u8) -> Self {
        FieldSlot { role, index }
    }
}

impl Display for FieldSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.role, self.index)
    }
}
