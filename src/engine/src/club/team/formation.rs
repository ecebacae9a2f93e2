use crate::club::player::position::{FieldSlot, Role};

/// One slot of a formation layout: the field slot identity plus cosmetic
/// pitch coordinates (percent offsets from the top-left of the pitch view).
#[derive(Debug, Clone, Copy)]
pub struct FormationSlot {
    pub slot: FieldSlot,
    pub top: f32,
    pub left: f32,
}

const fn slot(role: Role, index: u8, top: f32, left: f32) -> FormationSlot {
    FormationSlot {
        slot: FieldSlot::new(role, index),
        top,
        left,
    }
}

/// A named formation template. Pure layout data: eleven ordered slots, a
/// role per slot, nothing persisted per match beyond the name.
#[derive(Debug, Clone, Copy)]
pub struct Formation {
    pub name: &'static str,
    pub slots: [FormationSlot; 11],
}

impl Formation {
    pub fn by_name(name: &str) -> Option<&'static Formation> {
        FORMATIONS.iter().find(|f| f.name == name)
    }

    pub fn default_formation() -> &'static Formation {
        &FORMATIONS[0]
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.slots.iter().map(|s| s.slot.role)
    }
}

use Role::{AttackingMidfielder as AM, Defender as DF, Forward as FW, Goalkeeper as GK, Midfielder as MF};

pub const FORMATIONS: [Formation; 4] = [
    Formation {
        name: "4-3-3",
        slots: [
            slot(GK, 0, 92.0, 50.0),
            slot(DF, 1, 75.0, 15.0),
            slot(DF, 2, 75.0, 38.0),
            slot(DF, 3, 75.0, 62.0),
            slot(DF, 4, 75.0, 85.0),
            slot(MF, 5, 50.0, 30.0),
            slot(MF, 6, 45.0, 50.0),
            slot(MF, 7, 50.0, 70.0),
            slot(FW, 8, 25.0, 30.0),
            slot(FW, 9, 20.0, 50.0),
            slot(FW, 10, 25.0, 70.0),
        ],
    },
    Formation {
        name: "4-4-2",
        slots: [
            slot(GK, 0, 92.0, 50.0),
            slot(DF, 1, 75.0, 15.0),
            slot(DF, 2, 75.0, 38.0),
            slot(DF, 3, 75.0, 62.0),
            slot(DF, 4, 75.0, 85.0),
            slot(MF, 5, 50.0, 15.0),
            slot(MF, 6, 50.0, 38.0),
            slot(MF, 7, 50.0, 62.0),
            slot(MF, 8, 50.0, 85.0),
            slot(FW, 9, 25.0, 35.0),
            slot(FW, 10, 25.0, 65.0),
        ],
    },
    Formation {
        name: "3-5-2",
        slots: [
            slot(GK, 0, 92.0, 50.0),
            slot(DF, 1, 75.0, 30.0),
            slot(DF, 2, 75.0, 50.0),
            slot(DF, 3, 75.0, 70.0),
            slot(MF, 4, 55.0, 15.0),
            slot(MF, 5, 50.0, 35.0),
            slot(MF, 6, 45.0, 50.0),
            slot(MF, 7, 50.0, 65.0),
            slot(MF, 8, 55.0, 85.0),
            slot(FW, 9, 25.0, 35.0),
            slot(FW, 10, 25.0, 65.0),
        ],
    },
    Formation {
        name: "4-2-3-1",
        slots: [
            slot(GK, 0, 92.0, 50.0),
            slot(DF, 1, 75.0, 15.0),
            slot(DF, 2, 75.0, 38.0),
            slot(DF, 3, 75.0, 62.0),
            slot(DF, 4, 75.0, 85.0),
            slot(MF, 5, 60.0, 35.0),
            slot(MF, 6, 60.0, 65.0),
            slot(AM, 7, 45.0, 25.0),
            slot(AM, 8, 40.0, 50.0),
            slot(AM, 9, 45.0, 75.0),
            slot(FW, 10, 20.0, 50.0),
        ],
    },
];
