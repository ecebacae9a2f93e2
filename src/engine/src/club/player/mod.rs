pub mod attributes;
pub mod calculator;
pub mod player;
pub mod position;

pub use attributes::PlayerAttributes;
pub use calculator::PerformanceCalculator;
pub use player::{dedup_squad, Player};
pub use position::{FieldSlot, PositionFit, Role, COMPATIBILITY_PENALTY};
